use bevy_ecs::{entity::Entity, message::Message};

use crate::{components::Position, weapons::Weapon};

// ============================================================================
// Gameplay Messages
// ============================================================================
//
// Written by the simulation, read by the presentation layer for sounds and effects.

#[derive(Message, Debug, Clone, Copy)]
pub struct ShotFired {
    pub weapon: Weapon,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct WeaponSwitched {
    pub weapon: Weapon,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ZombieHit {
    pub entity: Entity,
    pub damage: i32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ZombieIgnited {
    pub entity: Entity,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ZombieKilled {
    pub entity: Entity,
    pub position: Position,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ZombieAttacked {
    pub entity: Entity,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct TreeHit {
    pub entity: Entity,
    pub remaining: u32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct TreeFelled {
    pub entity: Entity,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerDamaged {
    pub amount: i32,
    pub remaining: i32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct GameOver {
    pub score: u32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct PowerUpCollected {
    pub position: Position,
    pub killed: usize,
}
