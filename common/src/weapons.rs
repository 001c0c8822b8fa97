use crate::constants::{RECOIL_DURATION, RECOIL_PITCH_KICK, RECOIL_SETTLE_PITCH, RECOIL_SETTLE_TIME};

// ============================================================================
// Weapons
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weapon {
    #[default]
    Rifle,
    Pistol,
    Flamethrower,
}

impl Weapon {
    pub const ALL: [Self; 3] = [Self::Rifle, Self::Pistol, Self::Flamethrower];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Rifle => Self::Pistol,
            Self::Pistol => Self::Flamethrower,
            Self::Flamethrower => Self::Rifle,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rifle => "ASSAULT RIFLE",
            Self::Pistol => "PISTOL",
            Self::Flamethrower => "FLAMETHROWER",
        }
    }

    #[must_use]
    pub const fn recoil(self) -> RecoilProfile {
        match self {
            Self::Rifle => RecoilProfile {
                kick_back: 0.15,
                kick_up: 0.05,
            },
            Self::Pistol => RecoilProfile {
                kick_back: 0.08,
                kick_up: 0.03,
            },
            Self::Flamethrower => RecoilProfile {
                kick_back: 0.05,
                kick_up: 0.02,
            },
        }
    }

    // Muzzle flash distance along the weapon's -Z axis; the flamethrower spits flames instead.
    #[must_use]
    pub const fn muzzle_offset(self) -> Option<f32> {
        match self {
            Self::Rifle => Some(-1.0),
            Self::Pistol => Some(-0.5),
            Self::Flamethrower => None,
        }
    }

    #[must_use]
    pub const fn ignites(self) -> bool {
        matches!(self, Self::Flamethrower)
    }
}

// ============================================================================
// Recoil
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoilProfile {
    pub kick_back: f32,
    pub kick_up: f32,
}

// Offset from the weapon's rest pose
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecoilOffset {
    pub back: f32,
    pub up: f32,
    pub pitch: f32,
}

impl RecoilProfile {
    // Linear interpolation through three keyframes: full kick at 0, a partial settle at
    // RECOIL_SETTLE_TIME, rest at RECOIL_DURATION.
    #[must_use]
    pub fn offset_at(&self, elapsed: f32) -> RecoilOffset {
        let kick = RecoilOffset {
            back: self.kick_back,
            up: self.kick_up,
            pitch: -RECOIL_PITCH_KICK,
        };
        let settle = RecoilOffset {
            back: self.kick_back / 3.0,
            up: self.kick_up / 2.0,
            pitch: -RECOIL_SETTLE_PITCH,
        };

        if elapsed <= 0.0 {
            kick
        } else if elapsed < RECOIL_SETTLE_TIME {
            lerp_offset(kick, settle, elapsed / RECOIL_SETTLE_TIME)
        } else if elapsed < RECOIL_DURATION {
            let t = (elapsed - RECOIL_SETTLE_TIME) / (RECOIL_DURATION - RECOIL_SETTLE_TIME);
            lerp_offset(settle, RecoilOffset::default(), t)
        } else {
            RecoilOffset::default()
        }
    }
}

fn lerp_offset(a: RecoilOffset, b: RecoilOffset, t: f32) -> RecoilOffset {
    RecoilOffset {
        back: (b.back - a.back).mul_add(t, a.back),
        up: (b.up - a.up).mul_add(t, a.up),
        pitch: (b.pitch - a.pitch).mul_add(t, a.pitch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn weapons_cycle_through_all_three() {
        let mut weapon = Weapon::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(weapon);
            weapon = weapon.next();
        }
        assert_eq!(seen, Weapon::ALL);
        assert_eq!(weapon, Weapon::Rifle);
    }

    #[test]
    fn only_flamethrower_ignites_and_lacks_muzzle_flash() {
        for weapon in Weapon::ALL {
            assert_eq!(weapon.ignites(), weapon.muzzle_offset().is_none());
        }
    }

    #[test]
    fn recoil_starts_at_full_kick() {
        let offset = Weapon::Rifle.recoil().offset_at(0.0);
        assert!(approx(offset.back, 0.15));
        assert!(approx(offset.up, 0.05));
        assert!(approx(offset.pitch, -0.1));
    }

    #[test]
    fn recoil_hits_settle_keyframe() {
        let offset = Weapon::Pistol.recoil().offset_at(RECOIL_SETTLE_TIME);
        assert!(approx(offset.back, 0.08 / 3.0));
        assert!(approx(offset.up, 0.015));
        assert!(approx(offset.pitch, -0.03));
    }

    #[test]
    fn recoil_interpolates_between_keyframes() {
        let profile = Weapon::Rifle.recoil();
        let halfway = profile.offset_at(RECOIL_SETTLE_TIME / 2.0);
        assert!(approx(halfway.back, (0.15 + 0.05) / 2.0));
        assert!(halfway.pitch < -0.03 && halfway.pitch > -0.1);
    }

    #[test]
    fn recoil_returns_to_rest() {
        for weapon in Weapon::ALL {
            assert_eq!(weapon.recoil().offset_at(RECOIL_DURATION), RecoilOffset::default());
            assert_eq!(weapon.recoil().offset_at(1.0), RecoilOffset::default());
        }
    }
}
