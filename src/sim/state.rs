//! Simulation state: entities and the player controller
//!
//! `GameState` owns every entity collection outright. The input layer
//! feeds it movement targets and cast events; the render layer reads it
//! through `view::scene` after pruning. Nothing outside `sim` mutates it.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::ability::{AbilityBar, AbilitySlot};
use super::config::Config;
use super::geom::Segment;
use crate::consts::*;
use crate::heading_vec;

/// Shared kinematic state for anything that travels along a heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vec2,
    /// Travel direction in radians (atan2 convention, y down).
    pub heading: f32,
    /// Distance covered per tick.
    pub speed: f32,
}

impl Motion {
    pub fn new(pos: Vec2, heading: f32, speed: f32) -> Self {
        Self {
            pos,
            heading,
            speed,
        }
    }

    /// Advance one tick along the heading.
    pub fn advance(&mut self) {
        self.pos += self.speed * heading_vec(self.heading);
    }

    /// Point the heading at `target`.
    pub fn aim_at(&mut self, target: Vec2) {
        let d = target - self.pos;
        self.heading = d.y.atan2(d.x);
    }
}

/// A cast projectile. Collides as the segment between its two
/// length-endpoints; the width only matters to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub motion: Motion,
    pub length: f32,
    pub width: f32,
    pub color: Rgb,
    /// Ticks of immunity left before the next mirror reflection.
    pub bounce_cooldown: u32,
    /// Ticks of immunity left before a prism may consume this projectile.
    pub prism_cooldown: u32,
    /// Ticks lived; negative right after a reflection (grace period).
    pub age: i32,
    /// Cleared when a prism consumes the projectile.
    pub alive: bool,
    /// Prism-split generation, capped at `MAX_SPLIT_LEVEL`.
    pub split_level: u8,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, heading: f32) -> Self {
        Self {
            id,
            motion: Motion::new(pos, heading, PROJECTILE_SPEED),
            length: PROJECTILE_LENGTH,
            width: PROJECTILE_WIDTH,
            color: PROJECTILE_COLOR,
            bounce_cooldown: 0,
            prism_cooldown: 0,
            age: 0,
            alive: true,
            split_level: 0,
        }
    }

    /// Collision segment along the heading, centered on the position.
    pub fn segment(&self) -> Segment {
        Segment::from_center_angle(self.motion.pos, self.length / 2.0, self.motion.heading)
    }

    /// Liveness predicate for the prune pass.
    pub fn is_live(&self, config: &Config) -> bool {
        self.alive && config.contains(self.motion.pos) && self.age <= config.projectile_max_age()
    }
}

/// A timed reflecting surface. The stored angle is the facing direction;
/// the reflecting segment (and the drawn length axis) runs perpendicular
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mirror {
    pub id: u32,
    pub pos: Vec2,
    pub length: f32,
    pub width: f32,
    /// Facing direction in radians; the surface runs at `angle + PI/2`.
    pub angle: f32,
    /// Ticks left before the mirror fades.
    pub lifetime: u32,
}

impl Mirror {
    pub fn new(id: u32, pos: Vec2, angle: f32, lifetime: u32) -> Self {
        Self {
            id,
            pos,
            length: MIRROR_LENGTH,
            width: MIRROR_WIDTH,
            angle,
            lifetime,
        }
    }

    /// The reflecting segment, perpendicular to the facing angle.
    pub fn segment(&self) -> Segment {
        Segment::from_center_angle(self.pos, self.length / 2.0, self.angle + FRAC_PI_2)
    }
}

/// A timed splitting obstacle: consumes the first projectile whose center
/// comes within `radius` and fans it into three children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prism {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Display rotation in radians, fixed at cast time.
    pub angle: f32,
    /// Ticks left before the prism fades.
    pub lifetime: u32,
}

impl Prism {
    pub fn new(id: u32, pos: Vec2, angle: f32, lifetime: u32) -> Self {
        Self {
            id,
            pos,
            radius: PRISM_RADIUS,
            angle,
            lifetime,
        }
    }
}

/// Shrinking ring dropped at the latest move target. At most one exists;
/// each new move order replaces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveMarker {
    pub pos: Vec2,
    pub size: f32,
}

impl MoveMarker {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: MOVE_MARKER_SIZE,
        }
    }
}

/// The player-controlled entity. Nothing in the sim harms it; it only
/// moves and casts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub motion: Motion,
    pub radius: f32,
    pub move_target: Vec2,
    pub moving: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            motion: Motion::new(pos, 0.0, PLAYER_SPEED),
            radius: PLAYER_RADIUS,
            move_target: pos,
            moving: false,
        }
    }

    /// One tick of move-to-target travel: re-aim, then either snap onto
    /// the target and stop, or advance one speed step. The snap keeps
    /// arrival idempotent: once there, further ticks do nothing.
    pub fn advance(&mut self) {
        if !self.moving {
            return;
        }
        self.motion.aim_at(self.move_target);
        if self.motion.pos.distance(self.move_target) < self.motion.speed {
            self.motion.pos = self.move_target;
            self.moving = false;
        } else {
            self.motion.advance();
        }
    }
}

/// Complete simulation state: the player controller plus every entity
/// collection it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    /// Ticks simulated since `new`.
    pub tick_count: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub mirrors: Vec<Mirror>,
    pub prisms: Vec<Prism>,
    /// At most one marker; a new move order replaces it.
    pub move_marker: Option<MoveMarker>,
    pub abilities: AbilityBar,
    next_id: u32,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let player = Player::new(config.center());
        let abilities = AbilityBar::new(&config);
        Self {
            config,
            tick_count: 0,
            player,
            projectiles: Vec::new(),
            mirrors: Vec::new(),
            prisms: Vec::new(),
            move_marker: None,
            abilities,
            next_id: 1,
        }
    }

    /// Allocate a unique entity id.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Movement entry point. Drops a fresh move marker; the previous one
    /// is replaced rather than accumulated.
    pub fn set_move_target(&mut self, target: Vec2) {
        self.player.move_target = target;
        self.player.moving = true;
        self.move_marker = Some(MoveMarker::new(target));
    }

    /// Ability entry point, one dispatch per slot. A cast that finds its
    /// slot cooling or its stock empty is a silent no-op.
    pub fn cast(&mut self, slot: AbilitySlot, target: Vec2) {
        match slot {
            AbilitySlot::Primary => self.cast_bolt(target),
            AbilitySlot::Secondary => self.cast_prism(target),
            AbilitySlot::Tertiary => self.cast_mirror(target),
            AbilitySlot::Ultimate => self.cast_mirror_ring(),
        }
    }

    /// Heading from the player to `target`.
    fn aim(&self, target: Vec2) -> f32 {
        let d = target - self.player.motion.pos;
        d.y.atan2(d.x)
    }

    fn cast_bolt(&mut self, target: Vec2) {
        if !self.abilities.primary.ready() {
            debug!("bolt cast refused: cooling");
            return;
        }
        self.abilities
            .primary
            .start(self.config.secs_to_ticks(PRIMARY_COOLDOWN_SECS));
        let heading = self.aim(target);
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::new(id, self.player.motion.pos, heading));
        debug!("bolt {id} cast at heading {heading:.3}");
    }

    fn cast_prism(&mut self, target: Vec2) {
        if !self.abilities.secondary.ready() {
            debug!("prism cast refused: cooling");
            return;
        }
        self.abilities
            .secondary
            .start(self.config.secs_to_ticks(SECONDARY_COOLDOWN_SECS));
        let angle = self.aim(target);
        let lifetime = self.config.secs_to_ticks(PRISM_LIFETIME_SECS);
        let id = self.next_entity_id();
        self.prisms.push(Prism::new(id, target, angle, lifetime));
        debug!("prism {id} cast at {target}");
    }

    fn cast_mirror(&mut self, target: Vec2) {
        if !self.abilities.tertiary.try_spend() {
            debug!("mirror cast refused: out of stock");
            return;
        }
        let angle = self.aim(target);
        let lifetime = self.config.secs_to_ticks(MIRROR_LIFETIME_SECS);
        let id = self.next_entity_id();
        self.mirrors.push(Mirror::new(id, target, angle, lifetime));
        debug!(
            "mirror {id} cast at {target}, {} left in stock",
            self.abilities.tertiary.available
        );
    }

    fn cast_mirror_ring(&mut self) {
        if !self.abilities.ultimate.ready() {
            debug!("mirror ring refused: cooling");
            return;
        }
        self.abilities
            .ultimate
            .start(self.config.secs_to_ticks(ULTIMATE_COOLDOWN_SECS));
        let lifetime = self.config.secs_to_ticks(MIRROR_LIFETIME_SECS);
        let spacing = TAU / RING_MIRROR_COUNT as f32;
        for i in 0..RING_MIRROR_COUNT {
            let angle = i as f32 * spacing;
            let pos = self.player.motion.pos + RING_RADIUS * heading_vec(angle);
            let id = self.next_entity_id();
            self.mirrors.push(Mirror::new(id, pos, angle, lifetime));
        }
        debug!("mirror ring cast around {}", self.player.motion.pos);
    }

    /// Drop every entity whose liveness check failed this tick. Runs last,
    /// so the render layer never sees a dead entity.
    pub fn prune(&mut self) {
        let config = &self.config;
        self.projectiles.retain(|p| p.is_live(config));
        self.mirrors.retain(|m| m.lifetime > 0);
        self.prisms.retain(|p| p.lifetime > 0);
        if self.move_marker.is_some_and(|m| m.size <= 0.0) {
            self.move_marker = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn motion_advances_along_heading() {
        let mut motion = Motion::new(Vec2::new(100.0, 100.0), FRAC_PI_2, 5.0);
        motion.advance();
        assert!((motion.pos - Vec2::new(100.0, 105.0)).length() < 1e-3);
    }

    #[test]
    fn player_snaps_onto_near_target_and_stops() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_target = Vec2::new(102.0, 100.0);
        player.moving = true;
        player.advance();
        assert_eq!(player.motion.pos, Vec2::new(102.0, 100.0));
        assert!(!player.moving);
        // Arrival is idempotent.
        player.advance();
        assert_eq!(player.motion.pos, Vec2::new(102.0, 100.0));
    }

    #[test]
    fn player_walks_toward_far_target() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_target = Vec2::new(200.0, 100.0);
        player.moving = true;
        player.advance();
        assert!((player.motion.pos - Vec2::new(104.0, 100.0)).length() < 1e-3);
        assert!(player.moving);
    }

    #[test]
    fn move_order_replaces_the_marker() {
        let mut state = GameState::new(Config::default());
        state.set_move_target(Vec2::new(50.0, 50.0));
        state.set_move_target(Vec2::new(80.0, 90.0));
        let marker = state.move_marker.expect("marker");
        assert_eq!(marker.pos, Vec2::new(80.0, 90.0));
        assert_eq!(marker.size, MOVE_MARKER_SIZE);
    }

    #[test]
    fn bolt_cast_spawns_one_aimed_projectile_and_cools() {
        let mut state = GameState::new(Config::default());
        state.cast(AbilitySlot::Primary, Vec2::new(250.0, 400.0));
        assert_eq!(state.projectiles.len(), 1);
        let proj = &state.projectiles[0];
        assert!((proj.motion.heading - FRAC_PI_2).abs() < 1e-4);
        assert_eq!(proj.motion.pos, state.player.motion.pos);
        assert_eq!(proj.split_level, 0);
        assert!(!state.abilities.primary.ready());

        // Mid-cooldown cast is a silent no-op.
        state.cast(AbilitySlot::Primary, Vec2::new(0.0, 0.0));
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn prism_cast_lands_at_the_target() {
        let mut state = GameState::new(Config::default());
        state.cast(AbilitySlot::Secondary, Vec2::new(100.0, 100.0));
        assert_eq!(state.prisms.len(), 1);
        assert_eq!(state.prisms[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.prisms[0].radius, PRISM_RADIUS);
        assert!(!state.abilities.secondary.ready());
    }

    #[test]
    fn mirror_faces_the_aim_direction() {
        let mut state = GameState::new(Config::default());
        state.cast(AbilitySlot::Tertiary, Vec2::new(400.0, 250.0));
        assert_eq!(state.mirrors.len(), 1);
        let mirror = &state.mirrors[0];
        assert!(mirror.angle.abs() < 1e-4);
        // The reflecting segment runs perpendicular to the aim.
        let seg = mirror.segment();
        assert!((seg.a.x - seg.b.x).abs() < 1e-3);
        assert!((seg.a.y - seg.b.y).abs() > MIRROR_LENGTH - 1e-3);
    }

    #[test]
    fn stock_gates_mirror_casts() {
        let mut state = GameState::new(Config::default());
        for _ in 0..4 {
            state.cast(AbilitySlot::Tertiary, Vec2::new(100.0, 100.0));
        }
        // The fourth cast found an empty pool.
        assert_eq!(state.mirrors.len(), 3);
        assert_eq!(state.abilities.tertiary.available, 0);
    }

    #[test]
    fn ultimate_rings_the_player_with_mirrors() {
        let mut state = GameState::new(Config::default());
        state.cast(AbilitySlot::Ultimate, Vec2::ZERO);
        assert_eq!(state.mirrors.len(), RING_MIRROR_COUNT);
        let spacing = TAU / RING_MIRROR_COUNT as f32;
        for (i, mirror) in state.mirrors.iter().enumerate() {
            let angle = i as f32 * spacing;
            assert!((mirror.angle - angle).abs() < 1e-4);
            let expected = state.player.motion.pos + RING_RADIUS * heading_vec(angle);
            assert!((mirror.pos - expected).length() < 1e-3);
        }
        assert!(!state.abilities.ultimate.ready());
    }

    #[test]
    fn entity_ids_are_unique_across_collections() {
        let mut state = GameState::new(Config::default());
        state.cast(AbilitySlot::Primary, Vec2::new(0.0, 0.0));
        state.cast(AbilitySlot::Secondary, Vec2::new(100.0, 100.0));
        state.cast(AbilitySlot::Tertiary, Vec2::new(200.0, 200.0));
        let mut ids = vec![
            state.projectiles[0].id,
            state.prisms[0].id,
            state.mirrors[0].id,
        ];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn projectile_liveness_predicate() {
        let config = Config::default();
        let mut proj = Projectile::new(1, Vec2::new(250.0, 250.0), 0.0);
        assert!(proj.is_live(&config));
        proj.age = config.projectile_max_age();
        assert!(proj.is_live(&config));
        proj.age += 1;
        assert!(!proj.is_live(&config));
        proj.age = 0;
        proj.motion.pos = Vec2::new(-1.0, 250.0);
        assert!(!proj.is_live(&config));
        proj.motion.pos = Vec2::new(250.0, 250.0);
        proj.alive = false;
        assert!(!proj.is_live(&config));
    }

    #[test]
    fn prune_keeps_exactly_the_live_entities() {
        let mut state = GameState::new(Config::default());
        let keep = state.next_entity_id();
        state
            .projectiles
            .push(Projectile::new(keep, Vec2::new(250.0, 250.0), 0.0));
        let dead = state.next_entity_id();
        let mut consumed = Projectile::new(dead, Vec2::new(100.0, 100.0), 0.0);
        consumed.alive = false;
        state.projectiles.push(consumed);

        let mid = state.next_entity_id();
        state
            .mirrors
            .push(Mirror::new(mid, Vec2::new(50.0, 50.0), 0.0, 0));
        let prid = state.next_entity_id();
        state
            .prisms
            .push(Prism::new(prid, Vec2::new(80.0, 80.0), 0.0, 4));
        state.move_marker = Some(MoveMarker {
            pos: Vec2::new(10.0, 10.0),
            size: 0.0,
        });

        state.prune();

        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, keep);
        assert!(state.mirrors.is_empty());
        assert_eq!(state.prisms.len(), 1);
        assert!(state.move_marker.is_none());
    }
}
