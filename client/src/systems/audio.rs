use bevy::prelude::*;

use crate::resources::SoundAssets;
use common::{
    events::{GameOver, PlayerDamaged, PowerUpCollected, ShotFired, TreeHit, WeaponSwitched, ZombieHit, ZombieKilled},
    weapons::Weapon,
};

// ============================================================================
// Sound Effects
// ============================================================================

fn play(commands: &mut Commands, sound: &Handle<AudioSource>) {
    commands.spawn((AudioPlayer::new(sound.clone()), PlaybackSettings::DESPAWN));
}

#[must_use]
pub fn shot_sound(sounds: &SoundAssets, weapon: Weapon) -> &Handle<AudioSource> {
    match weapon {
        Weapon::Rifle => &sounds.rifle,
        Weapon::Pistol => &sounds.pistol,
        Weapon::Flamethrower => &sounds.flamethrower,
    }
}

// One-shot sounds for the gameplay messages of this frame. A sound that failed to load
// simply plays nothing.
pub fn play_sounds_system(
    mut commands: Commands,
    sounds: Option<Res<SoundAssets>>,
    mut shots: MessageReader<ShotFired>,
    mut switches: MessageReader<WeaponSwitched>,
    mut hits: MessageReader<ZombieHit>,
    mut kills: MessageReader<ZombieKilled>,
    mut tree_hits: MessageReader<TreeHit>,
    mut damaged: MessageReader<PlayerDamaged>,
    mut collected: MessageReader<PowerUpCollected>,
    mut game_over: MessageReader<GameOver>,
) {
    let Some(sounds) = sounds else {
        return;
    };

    for shot in shots.read() {
        play(&mut commands, shot_sound(&sounds, shot.weapon));
    }
    if switches.read().last().is_some() {
        play(&mut commands, &sounds.weapon_switch);
    }
    // A killing shot plays the death sound instead of the hit
    if kills.read().last().is_some() {
        play(&mut commands, &sounds.zombie_death);
    } else if hits.read().last().is_some() {
        play(&mut commands, &sounds.zombie_hit);
    }
    hits.clear();
    if tree_hits.read().last().is_some() {
        play(&mut commands, &sounds.tree_hit);
    }
    if damaged.read().last().is_some() {
        play(&mut commands, &sounds.player_hurt);
    }
    if collected.read().last().is_some() {
        play(&mut commands, &sounds.powerup);
    }
    if game_over.read().last().is_some() {
        play(&mut commands, &sounds.game_over);
    }
}
