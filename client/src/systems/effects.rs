use bevy::prelude::*;

use crate::{
    components::{FadeOut, Lifetime},
    constants::*,
    markers::DamageOverlayUIMarker,
    resources::DamageFlash,
};
use common::{
    config::GameConfig,
    events::{PlayerDamaged, PowerUpCollected},
};

// ============================================================================
// Timed Effects
// ============================================================================

// Alpha of a fading effect after `fraction` of its lifetime
#[must_use]
pub fn faded_alpha(start: f32, fraction: f32) -> f32 {
    start * (1.0 - fraction.clamp(0.0, 1.0))
}

pub fn lifetime_system(mut commands: Commands, time: Res<Time>, mut effects: Query<(Entity, &mut Lifetime)>) {
    for (entity, mut lifetime) in &mut effects {
        lifetime.0.tick(time.delta());
        if lifetime.0.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

pub fn fade_out_system(mut materials: ResMut<Assets<StandardMaterial>>, effects: Query<(&Lifetime, &FadeOut)>) {
    for (lifetime, fade) in &effects {
        if let Some(material) = materials.get_mut(&fade.material) {
            material
                .base_color
                .set_alpha(faded_alpha(fade.start, lifetime.0.fraction()));
        }
    }
}

// ============================================================================
// Damage Overlay
// ============================================================================

// The screen dims briefly whenever the player is hurt
pub fn damage_overlay_system(
    time: Res<Time>,
    mut damaged: MessageReader<PlayerDamaged>,
    mut flash: ResMut<DamageFlash>,
    mut overlay: Single<&mut Visibility, With<DamageOverlayUIMarker>>,
) {
    if damaged.read().last().is_some() {
        flash.timer = Some(Timer::from_seconds(DAMAGE_OVERLAY_SECS, TimerMode::Once));
    }

    let Some(timer) = flash.timer.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if timer.is_finished() {
        flash.timer = None;
        **overlay = Visibility::Hidden;
    } else {
        **overlay = Visibility::Visible;
    }
}

// ============================================================================
// Power-Up Explosion
// ============================================================================

// Translucent sphere the size of the kill radius, visible from inside
pub fn powerup_explosion_system(
    mut commands: Commands,
    mut collected: MessageReader<PowerUpCollected>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    for event in collected.read() {
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 0.0, EXPLOSION_ALPHA),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        });
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(config.powerup.kill_radius).mesh().uv(16, 12))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(Vec3::from(event.position)),
            Lifetime::from_seconds(EXPLOSION_SECS),
            FadeOut {
                material,
                start: EXPLOSION_ALPHA,
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use std::time::Duration;

    #[test]
    fn faded_alpha_runs_from_start_to_zero() {
        assert!((faded_alpha(0.8, 0.0) - 0.8).abs() < 1e-6);
        assert!((faded_alpha(0.8, 0.5) - 0.4).abs() < 1e-6);
        assert!(faded_alpha(0.8, 1.0).abs() < 1e-6);
        assert!(faded_alpha(0.8, 2.0).abs() < 1e-6);
    }

    #[test]
    fn expired_effects_are_despawned() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        let short = world.spawn(Lifetime::from_seconds(0.05)).id();
        let long = world.spawn(Lifetime::from_seconds(0.5)).id();

        world.resource_mut::<Time>().advance_by(Duration::from_millis(100));
        let mut schedule = Schedule::default();
        schedule.add_systems(lifetime_system);
        schedule.run(&mut world);

        assert!(world.get_entity(short).is_err());
        assert!(world.get_entity(long).is_ok());
    }

    #[test]
    fn damage_shows_the_overlay_until_the_flash_ends() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.init_resource::<DamageFlash>();
        world.init_resource::<Messages<PlayerDamaged>>();
        let overlay = world.spawn((DamageOverlayUIMarker, Visibility::Hidden)).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(damage_overlay_system);

        world.resource_mut::<Messages<PlayerDamaged>>().write(PlayerDamaged {
            amount: 10,
            remaining: 90,
        });
        schedule.run(&mut world);
        assert_eq!(world.get::<Visibility>(overlay), Some(&Visibility::Visible));

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(DAMAGE_OVERLAY_SECS * 2.0));
        schedule.run(&mut world);
        assert_eq!(world.get::<Visibility>(overlay), Some(&Visibility::Hidden));
        assert!(world.resource::<DamageFlash>().timer.is_none());
    }
}
