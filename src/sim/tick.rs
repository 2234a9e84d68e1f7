//! Fixed-tick update ordering
//!
//! One `tick` call advances the whole simulation exactly one step, in the
//! order the gameplay depends on: ability timers, then player movement and
//! casts, then the collision pass against pre-move positions, then every
//! entity's own advance, then pruning. The render layer reads the state
//! only after all of it.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::ability::AbilitySlot;
use super::collision::resolve_collisions;
use super::state::GameState;

/// A single ability trigger: which slot fired and where it was aimed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub slot: AbilitySlot,
    pub target: Vec2,
}

/// Everything the input layer delivers for one tick. Cast triggers are
/// edges (one entry per press), never key-held state sampled per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Latest move order, already in world coordinates.
    pub move_to: Option<Vec2>,
    /// Ability triggers for this tick.
    pub casts: Vec<Cast>,
}

/// Advance the simulation one fixed tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.tick_count += 1;

    // Ability timers and stock recovery.
    state.abilities.tick();

    // Input boundary: out-of-bounds move orders are dropped here so the
    // state entry points stay total.
    if let Some(target) = input.move_to {
        if state.config.contains(target) {
            state.set_move_target(target);
        } else {
            debug!("move order outside world bounds dropped: {target}");
        }
    }
    state.player.advance();

    for cast in &input.casts {
        state.cast(cast.slot, cast.target);
    }

    // Collisions resolve against pre-move positions.
    resolve_collisions(state);

    // Kinematics and lifetimes, split children included.
    for proj in &mut state.projectiles {
        proj.motion.advance();
        proj.age += 1;
    }
    for mirror in &mut state.mirrors {
        mirror.lifetime = mirror.lifetime.saturating_sub(1);
    }
    for prism in &mut state.prisms {
        prism.lifetime = prism.lifetime.saturating_sub(1);
    }
    if let Some(marker) = &mut state.move_marker {
        marker.size -= 1.0;
    }

    // Prune last, so the render layer never sees a dead entity.
    state.prune();
}
