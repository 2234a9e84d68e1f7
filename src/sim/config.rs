//! World configuration
//!
//! Frame rate and window size were process-wide globals in the original
//! prototype; here they are an immutable struct handed to `GameState::new`
//! once at startup. Every duration in the sim is stored in whole ticks and
//! derived from seconds through this struct, so a non-default tick rate
//! rescales all timers consistently.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BOUNCE_GRACE_FACTOR, PROJECTILE_LIFETIME_SECS, TICK_RATE, WORLD_HEIGHT, WORLD_WIDTH,
};

/// Fixed world parameters, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// World width; x positions live in `[0, width)`.
    pub width: f32,
    /// World height; y positions live in `[0, height)`.
    pub height: f32,
    /// Simulation ticks per second.
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tick_rate: TICK_RATE,
        }
    }
}

impl Config {
    /// Convert a duration in seconds to whole ticks.
    pub fn secs_to_ticks(&self, secs: f32) -> u32 {
        (secs * self.tick_rate).round() as u32
    }

    /// True if `p` lies inside the world rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Center of the world, where the player spawns.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Max projectile age in ticks before the lifetime check reaps it.
    pub fn projectile_max_age(&self) -> i32 {
        (PROJECTILE_LIFETIME_SECS * self.tick_rate) as i32
    }

    /// Age assigned on reflection: a negative grace period so a fresh
    /// bounce is not immediately reaped by the lifetime check.
    pub fn bounce_grace_age(&self) -> i32 {
        -((PROJECTILE_LIFETIME_SECS * self.tick_rate * BOUNCE_GRACE_FACTOR) as i32)
    }
}
