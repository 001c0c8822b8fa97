use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::{components::WeaponModel, constants::*, markers::WeaponModelMarker};
use common::weapons::Weapon;

// ============================================================================
// Weapon Parts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Box(Vec3),
    Cylinder { radius: f32, height: f32 },
    Frustum { top: f32, bottom: f32, height: f32 },
    Ring { major: f32, minor: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct WeaponPart {
    pub shape: PartShape,
    pub color: u32,
    pub emissive: Option<(u32, f32)>,
    pub metallic: f32,
    pub roughness: f32,
    pub translation: Vec3,
    pub rotation: Quat,
}

impl WeaponPart {
    const fn new(shape: PartShape, color: u32, metallic: f32, roughness: f32, translation: Vec3) -> Self {
        Self {
            shape,
            color,
            emissive: None,
            metallic,
            roughness,
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    const fn glowing(mut self, color: u32, strength: f32) -> Self {
        self.emissive = Some((color, strength));
        self
    }
}

// Barrels and tubes lie along -Z
fn along_z() -> Quat {
    Quat::from_rotation_x(FRAC_PI_2)
}

pub(crate) fn hex(color: u32) -> Color {
    Color::srgb_u8((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

#[must_use]
pub fn weapon_parts(weapon: Weapon) -> Vec<WeaponPart> {
    use PartShape::{Box, Cylinder, Frustum, Ring};

    match weapon {
        Weapon::Rifle => vec![
            WeaponPart::new(Box(Vec3::new(0.08, 0.15, 1.2)), 0x2a_2a2a, 0.7, 0.3, Vec3::ZERO),
            WeaponPart::new(
                Cylinder {
                    radius: 0.02,
                    height: 0.8,
                },
                0x1a_1a1a,
                0.9,
                0.2,
                Vec3::new(0.0, 0.05, -0.6),
            )
            .rotated(along_z()),
            WeaponPart::new(Box(Vec3::new(0.1, 0.15, 0.4)), 0x3d_2817, 0.0, 0.8, Vec3::new(0.0, 0.0, 0.6)),
            WeaponPart::new(Box(Vec3::new(0.06, 0.2, 0.12)), 0x3d_2817, 0.0, 0.8, Vec3::new(0.0, -0.15, 0.1))
                .rotated(Quat::from_rotation_z(0.2)),
            WeaponPart::new(Box(Vec3::new(0.06, 0.25, 0.15)), 0x1a_1a1a, 0.5, 0.5, Vec3::new(0.0, -0.25, -0.1)),
        ],
        Weapon::Pistol => vec![
            WeaponPart::new(Box(Vec3::new(0.08, 0.15, 0.35)), 0x1a_1a1a, 0.8, 0.2, Vec3::new(0.0, 0.0, -0.1)),
            WeaponPart::new(
                Cylinder {
                    radius: 0.015,
                    height: 0.25,
                },
                0x0a_0a0a,
                0.9,
                0.1,
                Vec3::new(0.0, 0.05, -0.35),
            )
            .rotated(along_z()),
            WeaponPart::new(Box(Vec3::new(0.06, 0.25, 0.15)), 0x2a_2a2a, 0.0, 0.7, Vec3::new(0.0, -0.2, 0.05))
                .rotated(Quat::from_rotation_z(0.15)),
            WeaponPart::new(Box(Vec3::new(0.02, 0.03, 0.02)), 0xff_aa00, 0.0, 0.5, Vec3::new(0.0, 0.09, -0.2))
                .glowing(0xff_aa00, 0.3),
        ],
        Weapon::Flamethrower => vec![
            // Fuel tank lies across the weapon
            WeaponPart::new(
                Cylinder {
                    radius: 0.12,
                    height: 0.5,
                },
                0x8b_0000,
                0.7,
                0.3,
                Vec3::new(0.0, -0.05, 0.1),
            )
            .rotated(Quat::from_rotation_z(FRAC_PI_2)),
            WeaponPart::new(
                Cylinder {
                    radius: 0.02,
                    height: 0.3,
                },
                0x2a_2a2a,
                0.0,
                0.9,
                Vec3::new(0.05, 0.0, -0.1),
            )
            .rotated(along_z()),
            WeaponPart::new(
                Frustum {
                    top: 0.04,
                    bottom: 0.03,
                    height: 0.6,
                },
                0x3a_3a3a,
                0.8,
                0.2,
                Vec3::new(0.0, 0.0, -0.4),
            )
            .rotated(along_z()),
            WeaponPart::new(
                Ring {
                    major: 0.06,
                    minor: 0.015,
                },
                0x2a_2a2a,
                0.0,
                0.9,
                Vec3::new(0.0, -0.08, -0.3),
            )
            .rotated(Quat::from_rotation_z(FRAC_PI_2)),
            WeaponPart::new(Box(Vec3::new(0.06, 0.2, 0.1)), 0x1a_1a1a, 0.0, 0.8, Vec3::new(0.0, -0.18, 0.05))
                .rotated(Quat::from_rotation_z(0.2)),
            WeaponPart::new(Box(Vec3::splat(0.04)), 0xff_6600, 0.6, 0.5, Vec3::new(0.0, 0.08, 0.1))
                .glowing(0xff_3300, 0.3),
            WeaponPart::new(
                Frustum {
                    top: 0.04,
                    bottom: 0.05,
                    height: 0.08,
                },
                0xff_4400,
                0.7,
                0.5,
                Vec3::new(0.0, 0.0, -0.7),
            )
            .rotated(along_z())
            .glowing(0xff_2200, 0.4),
        ],
    }
}

#[must_use]
pub fn weapon_rest(weapon: Weapon) -> Vec3 {
    Vec3::from_array(match weapon {
        Weapon::Rifle => RIFLE_REST,
        Weapon::Pistol => PISTOL_REST,
        Weapon::Flamethrower => FLAMETHROWER_REST,
    })
}

fn part_mesh(shape: PartShape) -> Mesh {
    match shape {
        PartShape::Box(size) => Cuboid::from_size(size).into(),
        PartShape::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
        PartShape::Frustum { top, bottom, height } => ConicalFrustum {
            radius_top: top,
            radius_bottom: bottom,
            height,
        }
        .into(),
        PartShape::Ring { major, minor } => Torus::new(major - minor, major + minor).into(),
    }
}

fn part_material(part: &WeaponPart) -> StandardMaterial {
    StandardMaterial {
        base_color: hex(part.color),
        emissive: part
            .emissive
            .map_or(LinearRgba::BLACK, |(color, strength)| hex(color).to_linear() * strength),
        metallic: part.metallic,
        perceptual_roughness: part.roughness,
        ..default()
    }
}

// ============================================================================
// Weapon Models
// ============================================================================

// The three weapon models as children of the camera; only the active one is shown
pub fn spawn_weapon_models(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    camera: Entity,
    active: Weapon,
) {
    for weapon in Weapon::ALL {
        let rest = weapon_rest(weapon);
        let visibility = if weapon == active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        let model = commands
            .spawn((
                WeaponModel { weapon, rest },
                WeaponModelMarker,
                Transform::from_translation(rest).with_rotation(Quat::from_rotation_y(WEAPON_REST_YAW)),
                visibility,
                ChildOf(camera),
            ))
            .id();

        for part in weapon_parts(weapon) {
            commands.spawn((
                Mesh3d(meshes.add(part_mesh(part.shape))),
                MeshMaterial3d(materials.add(part_material(&part))),
                Transform::from_translation(part.translation).with_rotation(part.rotation),
                ChildOf(model),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_most(weapon: Weapon) -> f32 {
        weapon_parts(weapon)
            .iter()
            .map(|part| part.translation.z)
            .fold(f32::INFINITY, f32::min)
    }

    #[test]
    fn muzzle_flash_sits_beyond_the_barrel() {
        for weapon in [Weapon::Rifle, Weapon::Pistol] {
            let Some(muzzle) = weapon.muzzle_offset() else {
                panic!("{weapon:?} has no muzzle");
            };
            assert!(muzzle <= front_most(weapon));
        }
    }

    #[test]
    fn flamethrower_tip_is_frontmost_and_glows() {
        let parts = weapon_parts(Weapon::Flamethrower);
        let Some(tip) = parts.iter().min_by(|a, b| a.translation.z.total_cmp(&b.translation.z)) else {
            panic!("no parts");
        };
        assert!(tip.emissive.is_some());
        assert!(FLAME_NOZZLE_Z < tip.translation.z);
    }

    #[test]
    fn every_weapon_rests_low_and_right() {
        for weapon in Weapon::ALL {
            let rest = weapon_rest(weapon);
            assert!(rest.x > 0.0 && rest.y < 0.0 && rest.z < 0.0);
            assert!(!weapon_parts(weapon).is_empty());
        }
    }

    #[test]
    fn hex_colours_decode_channels() {
        assert_eq!(hex(0xff_4400), Color::srgb_u8(255, 68, 0));
    }
}
