//! Ability slots: cooldown timers and the mirror stock pool
//!
//! Every slot runs a ready -> cooling -> ready timer counted in whole
//! ticks. The tertiary slot layers a replenishing stock on top: casts
//! spend units and a recurring recovery timer refills them one per
//! interval. Castability (stock > 0) is deliberately decoupled from
//! whether the timer is running (stock < max).

use serde::{Deserialize, Serialize};

use super::config::Config;
use crate::consts::{MIRROR_RECOVERY_SECS, MIRROR_STOCK_MAX};

/// The four castable ability slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilitySlot {
    Primary,
    Secondary,
    Tertiary,
    Ultimate,
}

/// Tick-counted cooldown. Zero means ready.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Cooldown {
    pub remaining: u32,
}

impl Cooldown {
    pub fn ready(&self) -> bool {
        self.remaining == 0
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// One tick of recovery. Saturates at ready.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Replenishing resource pool gating the mirror slot.
///
/// Spending from a full pool starts the recovery timer. Each time the
/// timer lapses one unit comes back and the timer restarts, until the pool
/// is full again. Spending from a partial pool never restarts the timer,
/// so draining the whole pool still refills in `max` intervals total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub available: u8,
    pub max: u8,
    pub recovery: Cooldown,
    interval: u32,
}

impl Stock {
    /// A full pool with an idle recovery timer.
    pub fn full(max: u8, interval: u32) -> Self {
        Self {
            available: max,
            max,
            recovery: Cooldown::default(),
            interval,
        }
    }

    /// Spend one unit if any is available. Returns whether the cast fires.
    pub fn try_spend(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        if self.available == self.max {
            self.recovery.start(self.interval);
        }
        self.available -= 1;
        true
    }

    /// One tick of regeneration. Idle while the pool is full.
    pub fn tick(&mut self) {
        if self.available >= self.max {
            return;
        }
        self.recovery.tick();
        if self.recovery.ready() {
            self.available += 1;
            if self.available < self.max {
                self.recovery.start(self.interval);
            }
        }
    }
}

/// The player's four ability slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityBar {
    pub primary: Cooldown,
    pub secondary: Cooldown,
    pub tertiary: Stock,
    pub ultimate: Cooldown,
}

impl AbilityBar {
    pub fn new(config: &Config) -> Self {
        Self {
            primary: Cooldown::default(),
            secondary: Cooldown::default(),
            tertiary: Stock::full(
                MIRROR_STOCK_MAX,
                config.secs_to_ticks(MIRROR_RECOVERY_SECS),
            ),
            ultimate: Cooldown::default(),
        }
    }

    /// One tick of recovery across all four slots.
    pub fn tick(&mut self) {
        self.primary.tick();
        self.secondary.tick();
        self.tertiary.tick();
        self.ultimate.tick();
    }
}
