use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::{
    components::{FadeOut, FlameParticle, Lifetime, Recoil, WeaponModel},
    constants::*,
    markers::FlameGlowMarker,
    resources::EffectMeshes,
    spawning::weapons::hex,
};
use common::{
    constants::RECOIL_DURATION,
    events::{ShotFired, WeaponSwitched},
    resources::GameState,
    weapons::RecoilOffset,
};

// ============================================================================
// Recoil
// ============================================================================

// Weapon pose for a recoil offset: kicked back towards the camera, raised, muzzle tilted
#[must_use]
pub fn recoil_pose(rest: Vec3, offset: RecoilOffset) -> Transform {
    Transform::from_translation(rest + Vec3::new(0.0, offset.up, offset.back))
        .with_rotation(Quat::from_euler(EulerRot::YXZ, WEAPON_REST_YAW, offset.pitch, 0.0))
}

// Every shot restarts the recoil animation of the firing weapon
pub fn recoil_start_system(
    mut commands: Commands,
    mut shots: MessageReader<ShotFired>,
    models: Query<(Entity, &WeaponModel)>,
) {
    for shot in shots.read() {
        for (entity, model) in &models {
            if model.weapon == shot.weapon {
                commands.entity(entity).insert(Recoil::default());
            }
        }
    }
}

pub fn recoil_animate_system(
    mut commands: Commands,
    time: Res<Time>,
    mut models: Query<(Entity, &WeaponModel, &mut Recoil, &mut Transform)>,
) {
    for (entity, model, mut recoil, mut transform) in &mut models {
        recoil.elapsed += time.delta_secs();
        *transform = recoil_pose(model.rest, model.weapon.recoil().offset_at(recoil.elapsed));
        if recoil.elapsed >= RECOIL_DURATION {
            commands.entity(entity).remove::<Recoil>();
        }
    }
}

// Only the active weapon is drawn; a switch also cancels any recoil in progress
pub fn weapon_visibility_system(
    mut commands: Commands,
    mut switched: MessageReader<WeaponSwitched>,
    state: Res<GameState>,
    mut models: Query<(Entity, &WeaponModel, &mut Visibility, &mut Transform)>,
) {
    if switched.read().last().is_none() {
        return;
    }

    for (entity, model, mut visibility, mut transform) in &mut models {
        *visibility = if model.weapon == state.weapon {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        *transform = recoil_pose(model.rest, RecoilOffset::default());
        commands.entity(entity).remove::<Recoil>();
    }
}

// ============================================================================
// Muzzle Effects
// ============================================================================

fn translucent(color: Color, alpha: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

// Rifle and pistol flash at the muzzle; the flamethrower spits a short-lived flame burst
pub fn muzzle_effect_system(
    mut commands: Commands,
    mut shots: MessageReader<ShotFired>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    effects: Option<Res<EffectMeshes>>,
    models: Query<(Entity, &WeaponModel)>,
) {
    let Some(effects) = effects else {
        return;
    };

    for shot in shots.read() {
        let Some((model, _)) = models.iter().find(|(_, model)| model.weapon == shot.weapon) else {
            continue;
        };

        match shot.weapon.muzzle_offset() {
            Some(muzzle_z) => {
                commands.spawn((
                    Mesh3d(effects.muzzle_flash.clone()),
                    MeshMaterial3d(effects.muzzle_flash_material.clone()),
                    Transform::from_xyz(0.0, MUZZLE_FLASH_Y, muzzle_z),
                    Lifetime::from_seconds(MUZZLE_FLASH_SECS),
                    ChildOf(model),
                ));
            }
            None => spawn_flames(&mut commands, &mut materials, &effects, model, &mut rand::rng()),
        }
    }
}

fn spawn_flames(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    effects: &EffectMeshes,
    weapon: Entity,
    rng: &mut impl Rng,
) {
    // Cone opens away from the nozzle
    commands.spawn((
        Mesh3d(effects.flame_cone.clone()),
        MeshMaterial3d(materials.add(translucent(hex(0xff_6600), FLAME_CONE_ALPHA))),
        Transform::from_xyz(0.0, 0.0, FLAME_CONE_Z).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        Lifetime::from_seconds(FLAME_SECS),
        ChildOf(weapon),
    ));
    commands.spawn((
        Mesh3d(effects.flame_glow.clone()),
        MeshMaterial3d(materials.add(translucent(hex(0xff_3300), FLAME_GLOW_ALPHA))),
        Transform::from_xyz(0.0, 0.0, FLAME_NOZZLE_Z),
        Lifetime::from_seconds(FLAME_SECS),
        FlameGlowMarker,
        ChildOf(weapon),
    ));

    let particle_materials = FLAME_PARTICLE_COLORS.map(|color| materials.add(translucent(hex(color), 1.0)));
    for _ in 0..FLAME_PARTICLE_COUNT {
        let (offset, velocity) = flame_particle_start(rng);
        let material = particle_materials[rng.random_range(0..particle_materials.len())].clone();
        commands.spawn((
            Mesh3d(effects.flame_particle.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(offset).with_scale(Vec3::splat(rng.random_range(1.0..2.0))),
            FlameParticle { velocity },
            Lifetime::from_seconds(FLAME_SECS),
            FadeOut {
                material,
                start: FLAME_PARTICLE_ALPHA,
            },
            ChildOf(weapon),
        ));
    }
}

// Random start inside the flame cone and a forward velocity with some sideways drift
pub fn flame_particle_start(rng: &mut impl Rng) -> (Vec3, Vec3) {
    let distance = rng.random_range(0.0..FLAME_REACH);
    let spread = distance * FLAME_SPREAD;
    let offset = Vec3::new(
        rng.random_range(-0.5..0.5) * spread,
        rng.random_range(-0.5..0.5) * spread * 0.5,
        FLAME_NOZZLE_Z - distance,
    );
    let velocity = Vec3::new(
        rng.random_range(-0.5..0.5) * FLAME_JITTER,
        rng.random_range(-0.5..0.5) * FLAME_JITTER,
        -FLAME_SPEED,
    );
    (offset, velocity)
}

pub fn flame_particle_system(time: Res<Time>, mut particles: Query<(&FlameParticle, &mut Transform)>) {
    let dt = time.delta_secs();
    for (particle, mut transform) in &mut particles {
        transform.translation += particle.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::weapons::Weapon;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn recoil_pose_kicks_back_and_settles_to_rest() {
        let rest = Vec3::from_array(RIFLE_REST);
        let profile = Weapon::Rifle.recoil();

        let kicked = recoil_pose(rest, profile.offset_at(0.0));
        assert!((kicked.translation.z - (rest.z + profile.kick_back)).abs() < 1e-6);
        assert!((kicked.translation.y - (rest.y + profile.kick_up)).abs() < 1e-6);

        let settled = recoil_pose(rest, profile.offset_at(RECOIL_DURATION));
        assert!(settled.translation.distance(rest) < 1e-6);
        assert!(
            settled
                .rotation
                .angle_between(Quat::from_rotation_y(WEAPON_REST_YAW))
                < 1e-5
        );
    }

    #[test]
    fn flame_particles_start_inside_the_cone_ahead_of_the_nozzle() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let (offset, velocity) = flame_particle_start(&mut rng);
            let distance = FLAME_NOZZLE_Z - offset.z;
            assert!((0.0..FLAME_REACH).contains(&distance));
            assert!(offset.x.abs() <= distance * FLAME_SPREAD / 2.0 + 1e-6);
            assert!(velocity.z < 0.0);
        }
    }

    #[test]
    fn shot_restarts_recoil_on_the_firing_weapon_only() {
        use bevy::ecs::message::Messages;

        let mut world = World::new();
        world.init_resource::<Messages<ShotFired>>();
        let rifle = world
            .spawn(WeaponModel {
                weapon: Weapon::Rifle,
                rest: Vec3::ZERO,
            })
            .id();
        let pistol = world
            .spawn(WeaponModel {
                weapon: Weapon::Pistol,
                rest: Vec3::ZERO,
            })
            .id();
        world
            .resource_mut::<Messages<ShotFired>>()
            .write(ShotFired { weapon: Weapon::Rifle });

        let mut schedule = Schedule::default();
        schedule.add_systems(recoil_start_system);
        schedule.run(&mut world);

        assert!(world.get::<Recoil>(rifle).is_some());
        assert!(world.get::<Recoil>(pistol).is_none());
    }
}
