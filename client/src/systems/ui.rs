use bevy::{prelude::*, window::CursorOptions};

use super::input::release_cursor;
use crate::{constants::*, markers::*};
use common::{components::Health, events::GameOver, markers::PlayerMarker, resources::GameState, weapons::Weapon};

// ============================================================================
// HUD Text
// ============================================================================

#[must_use]
pub fn score_text(score: u32) -> String {
    format!("Zombies: {score}")
}

#[must_use]
pub fn weapon_text(weapon: Weapon) -> String {
    format!("Weapon: {}", weapon.label())
}

#[must_use]
pub fn health_text(percent: f32) -> String {
    format!("Health: {percent:.0}%")
}

fn hud_font() -> TextFont {
    TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    }
}

// ============================================================================
// UI Setup System
// ============================================================================

pub fn setup_hud_system(mut commands: Commands, state: Res<GameState>) {
    // Score in the top left corner
    commands.spawn((
        Text::new(score_text(state.score)),
        hud_font(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN),
            ..default()
        },
        ScoreUIMarker,
    ));

    // Health bar in the bottom left corner
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            bottom: Val::Px(HUD_MARGIN),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(5.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(health_text(100.0)),
                hud_font(),
                TextColor(Color::WHITE),
                HealthTextUIMarker,
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Px(HEALTH_BAR_WIDTH),
                        height: Val::Px(HEALTH_BAR_HEIGHT),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.2, 0.0, 0.0, 0.8)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.9, 0.1, 0.1)),
                        HealthBarUIMarker,
                    ));
                });
        });

    // Weapon indicator in the bottom right corner
    commands.spawn((
        Text::new(weapon_text(state.weapon)),
        hud_font(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_MARGIN),
            bottom: Val::Px(HUD_MARGIN),
            ..default()
        },
        WeaponUIMarker,
    ));

    // Crosshair
    let crosshair_color = Color::srgba(1.0, 1.0, 1.0, 0.8);
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                ..default()
            },
            CrosshairUIMarker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-CROSSHAIR_SIZE / 2.0),
                    top: Val::Px(-CROSSHAIR_THICKNESS / 2.0),
                    width: Val::Px(CROSSHAIR_SIZE),
                    height: Val::Px(CROSSHAIR_THICKNESS),
                    ..default()
                },
                BackgroundColor(crosshair_color),
            ));
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-CROSSHAIR_THICKNESS / 2.0),
                    top: Val::Px(-CROSSHAIR_SIZE / 2.0),
                    width: Val::Px(CROSSHAIR_THICKNESS),
                    height: Val::Px(CROSSHAIR_SIZE),
                    ..default()
                },
                BackgroundColor(crosshair_color),
            ));
        });

    // Damage overlay (hidden until the player is hurt)
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, DAMAGE_OVERLAY_ALPHA)),
        DamageOverlayUIMarker,
        Visibility::Hidden,
    ));

    // Game over panel
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(HUD_MARGIN),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUIMarker,
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: HUD_FONT_SIZE * 3.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
            ));
            parent.spawn((Text::new(""), hud_font(), TextColor(Color::WHITE), FinalScoreUIMarker));
        });
}

// ============================================================================
// UI Update Systems
// ============================================================================

pub fn ui_score_system(state: Res<GameState>, mut text: Single<&mut Text, With<ScoreUIMarker>>) {
    if !state.is_changed() {
        return;
    }
    text.0 = score_text(state.score);
}

pub fn ui_weapon_system(state: Res<GameState>, mut text: Single<&mut Text, With<WeaponUIMarker>>) {
    if !state.is_changed() {
        return;
    }
    text.0 = weapon_text(state.weapon);
}

// Bar width and label follow the player's health as a percentage of max
pub fn ui_health_system(
    player: Single<&Health, (With<PlayerMarker>, Changed<Health>)>,
    mut bar: Single<&mut Node, With<HealthBarUIMarker>>,
    mut text: Single<&mut Text, With<HealthTextUIMarker>>,
) {
    let percent = player.percent();
    bar.width = Val::Percent(percent);
    text.0 = health_text(percent);
}

// Show the final score and hand the pointer back
pub fn ui_game_over_system(
    mut game_over: MessageReader<GameOver>,
    mut panel: Single<&mut Visibility, With<GameOverUIMarker>>,
    mut final_score: Single<&mut Text, With<FinalScoreUIMarker>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    let Some(event) = game_over.read().last() else {
        return;
    };
    **panel = Visibility::Visible;
    final_score.0 = format!("Zombies killed: {}", event.score);
    release_cursor(&mut cursor_options);
}
