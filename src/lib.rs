//! Mirrorcast - simulation core for a top-down action prototype
//!
//! A player entity casts timed abilities that spawn mobile geometric
//! entities: projectiles that bounce off player-placed mirrors and split
//! into child projectiles inside prisms. Everything advances on a fixed
//! simulation tick. The windowing/input/render layer lives outside this
//! crate and talks to it through `sim::TickInput` going in and
//! `view::scene` coming out.
//!
//! Core modules:
//! - `sim`: deterministic fixed-tick simulation (entities, abilities, collisions)
//! - `view`: read-only presentation adapter for the render layer

pub mod sim;
pub mod view;

pub use sim::{Config, GameState, TickInput};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Entity color as 8-bit RGB.
    pub type Rgb = [u8; 3];

    /// Fixed simulation rate in ticks per second
    pub const TICK_RATE: f32 = 60.0;
    /// Default world bounds; positions live in `[0, WIDTH) x [0, HEIGHT)`
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Player disc radius
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Player travel per tick
    pub const PLAYER_SPEED: f32 = 4.0;

    /// Projectile travel per tick
    pub const PROJECTILE_SPEED: f32 = 20.0;
    /// Projectile rectangle extents; the length axis runs along the heading
    pub const PROJECTILE_LENGTH: f32 = 20.0;
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    /// Unreflected flight time before the age check reaps a projectile
    pub const PROJECTILE_LIFETIME_SECS: f32 = 0.4;
    /// Share of the lifetime granted back as negative age on reflection
    pub const BOUNCE_GRACE_FACTOR: f32 = 0.75;
    /// Ticks of mirror immunity after a reflection
    pub const BOUNCE_IMMUNITY_TICKS: u32 = 3;

    /// Angular offset of the two fanned split children
    pub const SPLIT_ANGLE: f32 = std::f32::consts::FRAC_PI_8;
    /// The straight split child keeps the heading at reduced size
    pub const SPLIT_CHILD_SCALE: f32 = 0.6;
    /// Ticks of prism immunity granted to freshly split children
    pub const SPLIT_IMMUNITY_TICKS: u32 = 6;
    /// Generation cap: no projectile splits past this level
    pub const MAX_SPLIT_LEVEL: u8 = 6;
    /// Population cap: splits are refused at or above this many projectiles
    pub const MAX_PROJECTILES: usize = 100;

    /// Mirror rectangle extents; the length axis runs along the reflecting
    /// segment, perpendicular to the stored facing angle
    pub const MIRROR_LENGTH: f32 = 60.0;
    pub const MIRROR_WIDTH: f32 = 6.0;
    pub const MIRROR_LIFETIME_SECS: f32 = 5.0;

    /// Prism trigger radius around its center point
    pub const PRISM_RADIUS: f32 = 30.0;
    pub const PRISM_LIFETIME_SECS: f32 = 5.0;

    /// Move marker starting size; it shrinks by one per tick
    pub const MOVE_MARKER_SIZE: f32 = 30.0;

    /// Ability cooldowns in seconds
    pub const PRIMARY_COOLDOWN_SECS: f32 = 2.0;
    pub const SECONDARY_COOLDOWN_SECS: f32 = 4.0;
    pub const ULTIMATE_COOLDOWN_SECS: f32 = 12.0;
    /// Mirror stock: pool size and per-unit recovery interval
    pub const MIRROR_STOCK_MAX: u8 = 3;
    pub const MIRROR_RECOVERY_SECS: f32 = 3.0;
    /// Ultimate: evenly spaced ring of mirrors around the player
    pub const RING_MIRROR_COUNT: usize = 18;
    pub const RING_RADIUS: f32 = 100.0;

    /// Flat-UI palette
    pub const PLAYER_COLOR: Rgb = [231, 76, 60];
    pub const PROJECTILE_COLOR: Rgb = [255, 255, 255];
    pub const SPLIT_LEFT_COLOR: Rgb = [52, 152, 219];
    pub const SPLIT_RIGHT_COLOR: Rgb = [241, 196, 15];
    pub const MIRROR_COLOR: Rgb = [236, 240, 241];
    pub const PRISM_COLOR: Rgb = [155, 89, 182];
    pub const MOVE_MARKER_COLOR: Rgb = [46, 204, 113];
    pub const BACKGROUND_COLOR: Rgb = [189, 195, 199];
}

/// Normalize an angle to the range [-PI, PI)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector along `heading` in radians (atan2 convention, y down)
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}
