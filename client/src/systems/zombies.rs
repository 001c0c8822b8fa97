use bevy::prelude::*;
use rand::Rng;

use crate::{
    components::{FireEmitter, FireParticle, ZombieFlash, ZombieVisual},
    constants::*,
    resources::EffectMeshes,
};
use common::{
    components::Burning,
    events::{ZombieAttacked, ZombieHit, ZombieIgnited},
};

// ============================================================================
// Flashes and Glow
// ============================================================================

pub fn zombie_flash_system(
    mut commands: Commands,
    mut hits: MessageReader<ZombieHit>,
    mut attacks: MessageReader<ZombieAttacked>,
) {
    // Killed zombies may already be gone
    for hit in hits.read() {
        commands.entity(hit.entity).try_insert(ZombieFlash::new(ZOMBIE_HIT_FLASH_SECS));
    }
    for attack in attacks.read() {
        commands
            .entity(attack.entity)
            .try_insert(ZombieFlash::new(ZOMBIE_ATTACK_FLASH_SECS));
    }
}

// Emissive tint of a zombie: a red flash wins over the orange fire glow
#[must_use]
pub fn zombie_emissive(flashing: bool, burning: bool) -> LinearRgba {
    if flashing {
        LinearRgba::RED * ZOMBIE_FLASH_STRENGTH
    } else if burning {
        LinearRgba::rgb(1.0, 0.4, 0.0) * FIRE_GLOW_STRENGTH
    } else {
        LinearRgba::BLACK
    }
}

pub fn zombie_tint_system(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut zombies: Query<(Entity, &ZombieVisual, Option<&mut ZombieFlash>, Has<Burning>)>,
) {
    for (entity, visual, flash, burning) in &mut zombies {
        let flashing = flash.is_some_and(|mut flash| {
            flash.timer.tick(time.delta());
            if flash.timer.is_finished() {
                commands.entity(entity).remove::<ZombieFlash>();
                false
            } else {
                true
            }
        });

        let emissive = zombie_emissive(flashing, burning);
        // Only touch the asset when the tint changes
        if materials.get(&visual.material).is_some_and(|m| m.emissive != emissive)
            && let Some(material) = materials.get_mut(&visual.material)
        {
            material.emissive = emissive;
        }
    }
}

// ============================================================================
// Fire Particles
// ============================================================================

// Start position and velocity of a fire particle around a zombie's feet
pub fn fire_particle_start(rng: &mut impl Rng) -> (Vec3, Vec3) {
    let offset = Vec3::new(
        rng.random_range(-FIRE_PARTICLE_SPREAD..FIRE_PARTICLE_SPREAD),
        rng.random_range(0.0..FIRE_PARTICLE_MAX_Y),
        rng.random_range(-FIRE_PARTICLE_SPREAD..FIRE_PARTICLE_SPREAD),
    );
    let velocity = Vec3::new(
        rng.random_range(-FIRE_PARTICLE_SIDE_SPEED..FIRE_PARTICLE_SIDE_SPEED),
        rng.random_range(0.0..FIRE_PARTICLE_RISE_SPREAD) + FIRE_PARTICLE_RISE_MIN,
        rng.random_range(-FIRE_PARTICLE_SIDE_SPEED..FIRE_PARTICLE_SIDE_SPEED),
    );
    (offset, velocity)
}

fn fire_material(rng: &mut impl Rng) -> StandardMaterial {
    // Orange to yellow
    let green = rng.random_range(0.3..0.8);
    StandardMaterial {
        base_color: Color::srgba(1.0, green, 0.0, FIRE_PARTICLE_START_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

pub fn ignite_zombie_system(
    mut commands: Commands,
    mut ignited: MessageReader<ZombieIgnited>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    effects: Option<Res<EffectMeshes>>,
    emitters: Query<(), With<FireEmitter>>,
) {
    let Some(effects) = effects else {
        return;
    };
    let mut rng = rand::rng();

    for event in ignited.read() {
        if emitters.contains(event.entity) {
            continue;
        }
        let Ok(mut zombie) = commands.get_entity(event.entity) else {
            continue;
        };
        zombie.insert(FireEmitter).with_children(|parent| {
            for _ in 0..FIRE_PARTICLE_COUNT {
                let (offset, velocity) = fire_particle_start(&mut rng);
                let material = materials.add(fire_material(&mut rng));
                parent.spawn((
                    Mesh3d(effects.fire_particle.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(offset),
                    FireParticle {
                        velocity,
                        alpha: FIRE_PARTICLE_START_ALPHA,
                        material,
                    },
                ));
            }
        });
    }
}

// Particles rise and fade, then restart near the feet
pub fn fire_particle_system(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut particles: Query<(&mut FireParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::rng();

    for (mut particle, mut transform) in &mut particles {
        transform.translation += particle.velocity * dt;
        particle.alpha -= FIRE_PARTICLE_FADE * dt;

        if particle.alpha <= 0.0 {
            let (offset, velocity) = fire_particle_start(&mut rng);
            transform.translation = offset.with_y(0.0);
            particle.velocity = velocity;
            particle.alpha = FIRE_PARTICLE_START_ALPHA;
        }

        if let Some(material) = materials.get_mut(&particle.material) {
            material.base_color.set_alpha(particle.alpha);
        }
    }
}

// Once the fire is out its particles go too
pub fn extinguish_zombie_system(
    mut commands: Commands,
    zombies: Query<(Entity, &Children), (With<FireEmitter>, Without<Burning>)>,
    particles: Query<(), With<FireParticle>>,
) {
    for (entity, children) in &zombies {
        for &child in children {
            if particles.contains(child) {
                commands.entity(child).despawn();
            }
        }
        commands.entity(entity).remove::<FireEmitter>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn flash_overrides_fire_glow() {
        assert_eq!(zombie_emissive(true, true), LinearRgba::RED * ZOMBIE_FLASH_STRENGTH);
        assert_ne!(zombie_emissive(false, true), LinearRgba::BLACK);
        assert_eq!(zombie_emissive(false, false), LinearRgba::BLACK);
    }

    #[test]
    fn fire_particles_start_around_the_feet_and_rise() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (offset, velocity) = fire_particle_start(&mut rng);
            assert!(offset.x.abs() <= FIRE_PARTICLE_SPREAD && offset.z.abs() <= FIRE_PARTICLE_SPREAD);
            assert!((0.0..FIRE_PARTICLE_MAX_Y).contains(&offset.y));
            assert!(velocity.y >= FIRE_PARTICLE_RISE_MIN);
        }
    }

    #[test]
    fn hit_and_attack_start_flashes_of_different_length() {
        let mut world = World::new();
        world.init_resource::<Messages<ZombieHit>>();
        world.init_resource::<Messages<ZombieAttacked>>();
        let hit = world.spawn_empty().id();
        let attacker = world.spawn_empty().id();
        world
            .resource_mut::<Messages<ZombieHit>>()
            .write(ZombieHit { entity: hit, damage: 25 });
        world
            .resource_mut::<Messages<ZombieAttacked>>()
            .write(ZombieAttacked { entity: attacker });

        let mut schedule = Schedule::default();
        schedule.add_systems(zombie_flash_system);
        schedule.run(&mut world);

        let secs = |entity| world.get::<ZombieFlash>(entity).map(|f| f.timer.duration().as_secs_f32());
        assert_eq!(secs(hit), Some(ZOMBIE_HIT_FLASH_SECS));
        assert_eq!(secs(attacker), Some(ZOMBIE_ATTACK_FLASH_SECS));
    }

    #[test]
    fn extinguished_zombie_drops_its_particles() {
        let mut world = World::new();
        let zombie = world.spawn(FireEmitter).id();
        let particle = world
            .spawn((
                FireParticle {
                    velocity: Vec3::Y,
                    alpha: 0.5,
                    material: Handle::default(),
                },
                ChildOf(zombie),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(extinguish_zombie_system);
        schedule.run(&mut world);

        assert!(world.get_entity(particle).is_err());
        assert!(world.get::<FireEmitter>(zombie).is_none());
    }
}
