#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::Time;
use tracing::{debug, info};

use super::{player::view_direction, trees::fell_tree, zombies::ZombieOutcomes};
use crate::{
    collision::{ray_vs_aabb, zombies::zombie_bounds},
    components::{Burning, Health, Player, Position, Tree},
    config::GameConfig,
    constants::{TREE_CANOPY_HALF_WIDTH, TREE_CANOPY_MAX_Y, TREE_CANOPY_MIN_Y, TREE_TRUNK_HEIGHT, TREE_TRUNK_RADIUS},
    events::{ShotFired, TreeFelled, TreeHit, WeaponSwitched, ZombieIgnited},
    map::{CampusLayout, CollisionBox},
    markers::{PlayerMarker, TreeMarker, ZombieMarker},
    resources::{CampusRng, GameState, PlayerInput},
};

// ============================================================================
// Weapon Switching
// ============================================================================

pub fn weapon_switch_system(
    input: Res<PlayerInput>,
    mut state: ResMut<GameState>,
    mut switched: MessageWriter<WeaponSwitched>,
) {
    if !input.switch_weapon || !input.pointer_locked {
        return;
    }
    state.weapon = state.weapon.next();
    switched.write(WeaponSwitched { weapon: state.weapon });
    info!("weapon switched to {}", state.weapon.label());
}

// ============================================================================
// Hit Detection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotTarget {
    Zombie(Entity),
    Tree(Entity),
}

// Trunk and canopy boxes of a standing tree anchored at its base
#[must_use]
pub fn tree_hitboxes(pos: &Position) -> [CollisionBox; 2] {
    let base = Vec3::from(*pos);
    [
        CollisionBox {
            min: base + Vec3::new(-TREE_TRUNK_RADIUS, 0.0, -TREE_TRUNK_RADIUS),
            max: base + Vec3::new(TREE_TRUNK_RADIUS, TREE_TRUNK_HEIGHT, TREE_TRUNK_RADIUS),
        },
        CollisionBox {
            min: base + Vec3::new(-TREE_CANOPY_HALF_WIDTH, TREE_CANOPY_MIN_Y, -TREE_CANOPY_HALF_WIDTH),
            max: base + Vec3::new(TREE_CANOPY_HALF_WIDTH, TREE_CANOPY_MAX_Y, TREE_CANOPY_HALF_WIDTH),
        },
    ]
}

// Nearest target along the ray within range, unless a piece of campus geometry is closer.
#[must_use]
pub fn find_shot_target(
    origin: Vec3,
    dir: Vec3,
    range: f32,
    targets: impl IntoIterator<Item = (ShotTarget, CollisionBox)>,
    walls: &[CollisionBox],
) -> Option<(ShotTarget, f32)> {
    let (target, distance) = targets
        .into_iter()
        .filter_map(|(target, bx)| ray_vs_aabb(origin, dir, &bx, range).map(|t| (target, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    let blocked = walls
        .iter()
        .filter_map(|bx| ray_vs_aabb(origin, dir, bx, range))
        .any(|t| t < distance);
    if blocked { None } else { Some((target, distance)) }
}

// ============================================================================
// Shooting
// ============================================================================

pub fn shooting_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    layout: Res<CampusLayout>,
    input: Res<PlayerInput>,
    mut state: ResMut<GameState>,
    mut rng: ResMut<CampusRng>,
    mut shots: MessageWriter<ShotFired>,
    mut tree_hits: MessageWriter<TreeHit>,
    mut trees_felled: MessageWriter<TreeFelled>,
    mut ignited: MessageWriter<ZombieIgnited>,
    mut outcomes: ZombieOutcomes,
    players: Query<(&Position, &Player), With<PlayerMarker>>,
    mut zombies: Query<(Entity, &Position, &mut Health, Has<Burning>), With<ZombieMarker>>,
    mut trees: Query<(Entity, &Position, &mut Tree), With<TreeMarker>>,
) {
    state.shot_cooldown.tick(time.delta());

    if !input.shoot || !input.pointer_locked || !state.can_shoot() {
        return;
    }
    let Ok((player_pos, player)) = players.single() else {
        return;
    };

    state.shot_cooldown.reset();
    let weapon = state.weapon;
    shots.write(ShotFired { weapon });

    let eye = Vec3::from(*player_pos) + Vec3::Y * (config.player.height / 2.0);
    let dir = view_direction(player.yaw, player.pitch);
    let zombie_height = config.zombie.height;

    let zombie_targets = zombies
        .iter()
        .map(|(entity, pos, _, _)| (ShotTarget::Zombie(entity), zombie_bounds(pos, zombie_height)));
    let tree_targets = trees
        .iter()
        .filter(|(_, _, tree)| !tree.destroyed)
        .flat_map(|(entity, pos, _)| tree_hitboxes(pos).map(|bx| (ShotTarget::Tree(entity), bx)));

    let Some((target, _)) = find_shot_target(
        eye,
        dir,
        config.weapon.range,
        zombie_targets.chain(tree_targets),
        &layout.collision_boxes,
    ) else {
        return;
    };

    match target {
        ShotTarget::Tree(entity) => {
            let Ok((_, _, mut tree)) = trees.get_mut(entity) else {
                return;
            };
            tree.hit_points = tree.hit_points.saturating_sub(1);
            tree_hits.write(TreeHit {
                entity,
                remaining: tree.hit_points,
            });
            debug!("tree {entity} hit, {} hit points left", tree.hit_points);
            if tree.hit_points == 0 {
                fell_tree(&mut tree, &mut rng.0);
                trees_felled.write(TreeFelled { entity });
                debug!("tree {entity} felled");
            }
        }
        ShotTarget::Zombie(entity) => {
            let Ok((_, pos, mut health, burning)) = zombies.get_mut(entity) else {
                return;
            };
            let died = outcomes.damage(&mut commands, &mut state, entity, pos, &mut health, config.weapon.damage);
            if weapon.ignites() && !died && !burning {
                commands
                    .entity(entity)
                    .insert(Burning::new(config.burn.duration, config.burn.tick_interval));
                ignited.write(ZombieIgnited { entity });
                debug!("zombie {entity} set on fire");
            }
        }
    }
}
