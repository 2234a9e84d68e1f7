//! Headless demo driver
//!
//! Runs the simulation for a scripted half minute without a window: a
//! seeded RNG stands in for the player, issuing move orders and casts.
//! Run with `RUST_LOG=debug` for the per-event trace. An optional first
//! argument names a JSON config file overriding the default world.

use std::env;
use std::error::Error;
use std::fs;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use mirrorcast::consts::MAX_PROJECTILES;
use mirrorcast::sim::{AbilitySlot, Cast, Config, GameState, TickInput, tick};
use mirrorcast::view;

const DEMO_SEED: u64 = 0x5eed;
const DEMO_SECONDS: u32 = 30;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config: Config = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => Config::default(),
    };
    log::info!(
        "world {}x{} at {} ticks/s",
        config.width,
        config.height,
        config.tick_rate
    );

    let total_ticks = DEMO_SECONDS * config.tick_rate as u32;
    let move_every = config.secs_to_ticks(2.0).max(1);
    let cast_every = config.secs_to_ticks(0.5).max(1);
    let report_every = (config.tick_rate as u32).max(1);

    let mut state = GameState::new(config);
    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);

    for t in 0..total_ticks {
        let mut input = TickInput::default();

        // A fresh move order every two seconds.
        if t % move_every == 0 {
            input.move_to = Some(random_point(&mut rng, &state.config));
        }
        // Fire something every half second; the ability gates silently
        // swallow whatever is not ready.
        if t % cast_every == 0 {
            let slot = match rng.random_range(0..4) {
                0 => AbilitySlot::Primary,
                1 => AbilitySlot::Secondary,
                2 => AbilitySlot::Tertiary,
                _ => AbilitySlot::Ultimate,
            };
            input.casts.push(Cast {
                slot,
                target: random_point(&mut rng, &state.config),
            });
        }

        tick(&mut state, &input);
        assert!(
            state.projectiles.len() <= MAX_PROJECTILES + 2,
            "population cap breached"
        );

        if t % report_every == 0 {
            log::info!(
                "t={}s player=({:.0},{:.0}) projectiles={} mirrors={} prisms={}",
                t / report_every,
                state.player.motion.pos.x,
                state.player.motion.pos.y,
                state.projectiles.len(),
                state.mirrors.len(),
                state.prisms.len()
            );
        }
    }

    let scene = view::scene(&state);
    println!(
        "demo complete after {} ticks: {} projectiles, {} mirrors, {} prisms on screen",
        state.tick_count,
        scene.projectiles.len(),
        scene.mirrors.len(),
        scene.prisms.len()
    );
    println!(
        "HUD [{} | {} | {} | {}]",
        view::slot_text(&state, AbilitySlot::Primary),
        view::slot_text(&state, AbilitySlot::Secondary),
        view::slot_text(&state, AbilitySlot::Tertiary),
        view::slot_text(&state, AbilitySlot::Ultimate)
    );
    Ok(())
}

fn random_point(rng: &mut Pcg32, config: &Config) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..config.width),
        rng.random_range(0.0..config.height),
    )
}
