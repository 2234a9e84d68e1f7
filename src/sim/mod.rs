//! Deterministic fixed-tick simulation
//!
//! All gameplay logic lives here, free of platform and rendering
//! dependencies: fixed timestep only, plainly owned Vec collections with
//! stable iteration order, and whole-tick integer timers. Feed it a
//! `TickInput` per tick and read the results through `view`.

pub mod ability;
pub mod collision;
pub mod config;
pub mod geom;
pub mod state;
pub mod tick;

pub use ability::{AbilityBar, AbilitySlot, Cooldown, Stock};
pub use collision::{reflect_heading, resolve_collisions};
pub use config::Config;
pub use geom::{Orientation, Segment, on_segment, orientation, segments_intersect};
pub use state::{GameState, Mirror, Motion, MoveMarker, Player, Prism, Projectile};
pub use tick::{Cast, TickInput, tick};
