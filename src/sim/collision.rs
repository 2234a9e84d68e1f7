//! Collision pass: mirror reflections and prism splits
//!
//! Runs once per tick against pre-move positions, before any entity
//! advances. Split children are buffered and appended after the scan so
//! the projectile list stays stable while it is walked; ids are assigned
//! at append time from the shared counter.

use std::f32::consts::PI;

use log::debug;

use super::state::{GameState, Projectile};
use crate::consts::*;
use crate::normalize_angle;

/// Heading after bouncing off a mirror facing `mirror_angle`: the incoming
/// angle mirrored across the facing axis, then reversed.
#[inline]
pub fn reflect_heading(heading: f32, mirror_angle: f32) -> f32 {
    normalize_angle(mirror_angle - (heading - mirror_angle) + PI)
}

/// One tick of the collision pass over every live projectile.
///
/// Each projectile checks mirrors first (segment versus segment), then
/// prisms (center within radius). The two checks gate on separate per
/// projectile immunity counters, decremented here so a fresh reflection
/// or split keeps its full immunity through the tick that granted it.
pub fn resolve_collisions(state: &mut GameState) {
    let bounce_grace = state.config.bounce_grace_age();
    let population = state.projectiles.len();
    let mut spawned: Vec<Projectile> = Vec::new();

    let GameState {
        projectiles,
        mirrors,
        prisms,
        ..
    } = state;

    for proj in projectiles.iter_mut() {
        if !proj.alive {
            continue;
        }

        if proj.bounce_cooldown > 0 {
            proj.bounce_cooldown -= 1;
        } else {
            let seg = proj.segment();
            for mirror in mirrors.iter() {
                if seg.intersects(&mirror.segment()) {
                    proj.motion.heading = reflect_heading(proj.motion.heading, mirror.angle);
                    proj.bounce_cooldown = BOUNCE_IMMUNITY_TICKS;
                    proj.age = bounce_grace;
                    debug!(
                        "projectile {} reflected off mirror {} to heading {:.3}",
                        proj.id, mirror.id, proj.motion.heading
                    );
                    break;
                }
            }
        }

        if proj.prism_cooldown > 0 {
            proj.prism_cooldown -= 1;
            continue;
        }
        for prism in prisms.iter() {
            if proj.motion.pos.distance(prism.pos) > prism.radius {
                continue;
            }
            proj.alive = false;
            proj.prism_cooldown = SPLIT_IMMUNITY_TICKS;

            if proj.split_level >= MAX_SPLIT_LEVEL || population + spawned.len() >= MAX_PROJECTILES
            {
                debug!(
                    "split refused for projectile {} (level {}, population {})",
                    proj.id,
                    proj.split_level,
                    population + spawned.len()
                );
            } else {
                let hit = proj.motion.pos;
                let heading = proj.motion.heading;
                for (offset, color, scale) in [
                    (-SPLIT_ANGLE, SPLIT_LEFT_COLOR, 1.0),
                    (SPLIT_ANGLE, SPLIT_RIGHT_COLOR, 1.0),
                    (0.0, proj.color, SPLIT_CHILD_SCALE),
                ] {
                    // Ids are assigned when the buffer is appended below.
                    let mut child = Projectile::new(0, hit, normalize_angle(heading + offset));
                    child.motion.speed = proj.motion.speed;
                    child.length = proj.length * scale;
                    child.width = proj.width * scale;
                    child.color = color;
                    child.split_level = proj.split_level + 1;
                    child.prism_cooldown = SPLIT_IMMUNITY_TICKS;
                    spawned.push(child);
                }
                debug!(
                    "prism {} split projectile {} into level {} children",
                    prism.id,
                    proj.id,
                    proj.split_level + 1
                );
            }
            break;
        }
    }

    for mut child in spawned {
        child.id = state.next_entity_id();
        state.projectiles.push(child);
    }
}
