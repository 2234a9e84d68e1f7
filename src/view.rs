//! Read-only presentation adapter
//!
//! The render layer never touches sim state directly: once per tick,
//! after pruning, it takes a `Scene` snapshot plus the HUD slot strings.
//! Angles leave this module in degrees; the sim itself is radians only.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{AbilitySlot, GameState};

/// A filled disc (player, prism, move marker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub rotation_deg: f32,
    pub color: Rgb,
}

/// A center-anchored rectangle rotated so its length axis follows the
/// entity (travel heading for projectiles, surface direction for mirrors).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: Vec2,
    pub length: f32,
    pub width: f32,
    pub rotation_deg: f32,
    pub color: Rgb,
}

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Rgb,
    pub player: Disc,
    pub projectiles: Vec<OrientedRect>,
    pub mirrors: Vec<OrientedRect>,
    pub prisms: Vec<Disc>,
    pub move_marker: Option<Disc>,
}

/// Snapshot the drawable state. Call after `tick`, so pruning has already
/// removed everything dead.
pub fn scene(state: &GameState) -> Scene {
    Scene {
        background: BACKGROUND_COLOR,
        player: Disc {
            center: state.player.motion.pos,
            radius: state.player.radius,
            rotation_deg: 0.0,
            color: PLAYER_COLOR,
        },
        projectiles: state
            .projectiles
            .iter()
            .map(|p| OrientedRect {
                center: p.motion.pos,
                length: p.length,
                width: p.width,
                rotation_deg: p.motion.heading.to_degrees(),
                color: p.color,
            })
            .collect(),
        mirrors: state
            .mirrors
            .iter()
            .map(|m| OrientedRect {
                center: m.pos,
                length: m.length,
                width: m.width,
                rotation_deg: (m.angle + std::f32::consts::FRAC_PI_2).to_degrees(),
                color: MIRROR_COLOR,
            })
            .collect(),
        prisms: state
            .prisms
            .iter()
            .map(|p| Disc {
                center: p.pos,
                radius: p.radius,
                rotation_deg: p.angle.to_degrees(),
                color: PRISM_COLOR,
            })
            .collect(),
        move_marker: state.move_marker.map(|m| Disc {
            center: m.pos,
            radius: m.size,
            rotation_deg: 0.0,
            color: MOVE_MARKER_COLOR,
        }),
    }
}

/// HUD text for one ability slot: whole seconds left (rounded up) while
/// the slot's timer runs, otherwise its key label. The stock slot shows
/// its count next to the label once recovery is done.
pub fn slot_text(state: &GameState, slot: AbilitySlot) -> String {
    let bar = &state.abilities;
    let (remaining, label) = match slot {
        AbilitySlot::Primary => (bar.primary.remaining, "Q"),
        AbilitySlot::Secondary => (bar.secondary.remaining, "W"),
        AbilitySlot::Tertiary => (bar.tertiary.recovery.remaining, "E"),
        AbilitySlot::Ultimate => (bar.ultimate.remaining, "R"),
    };
    if remaining > 0 {
        let secs = (remaining as f32 / state.config.tick_rate).ceil() as u32;
        return secs.to_string();
    }
    match slot {
        AbilitySlot::Tertiary => format!("{label} {}", bar.tertiary.available),
        _ => label.to_string(),
    }
}
