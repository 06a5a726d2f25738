//! Duo Pong headless driver
//!
//! Plays a session without a display: variable frame timing, a fixed sweep
//! pattern on both paddles, and a first-to-N win rule applied from outside the
//! simulation. Events are logged (set `RUST_LOG=info`) and the final frame is
//! printed as JSON.
//!
//! Usage: `duo-pong [settings.json] [first_to]`

use anyhow::{Context, Result, bail};

use duo_pong::Settings;
use duo_pong::sim::{Controls, GameEvent, GamePhase, GameState, Side, TickInput, tick};

/// Alternating frame lengths, roughly 60 Hz
const FRAME_MS: [f32; 3] = [16.0, 17.0, 17.0];
/// Give up after this much simulated time
const MAX_SESSION_MS: f64 = 10.0 * 60.0 * 1000.0;
const DEFAULT_FIRST_TO: u32 = 3;

fn load_settings(path: Option<&str>) -> Result<Settings> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {path}"))?;
            Settings::from_json(&json).with_context(|| format!("parsing settings in {path}"))
        }
        None => Ok(Settings::default()),
    }
}

/// Sweep pattern: each paddle alternates up and down, out of phase
fn sweep(clock_ms: f64, side: Side) -> Controls {
    let period = match side {
        Side::Left => 700.0,
        Side::Right => 1100.0,
    };
    let up = (clock_ms / period) as u64 % 2 == 0;
    Controls { up, down: !up }
}

/// The win rule lives out here; the simulation only knows how to end
fn winner(state: &GameState, first_to: u32) -> Option<Side> {
    Side::BOTH
        .into_iter()
        .find(|&side| state.paddle(side).score >= first_to)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = load_settings(args.first().map(String::as_str))?;
    let first_to = match args.get(1) {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("first_to must be a positive integer, got {raw:?}"))?,
        None => DEFAULT_FIRST_TO,
    };
    if first_to == 0 {
        bail!("first_to must be at least 1");
    }

    log::info!("Duo Pong (headless) starting, first to {first_to}");
    let mut state = GameState::new(settings);
    let mut frame = 0usize;
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    while state.clock_ms < MAX_SESSION_MS {
        input.left = sweep(state.clock_ms, Side::Left);
        input.right = sweep(state.clock_ms, Side::Right);

        let events = tick(&mut state, &input, FRAME_MS[frame % FRAME_MS.len()]);
        frame += 1;
        // Clear one-shot inputs after processing
        input.start = false;

        for event in &events {
            match event {
                GameEvent::Point { .. } | GameEvent::Won { .. } => {
                    log::info!("{}", serde_json::to_string(event)?)
                }
                _ => log::debug!("{}", serde_json::to_string(event)?),
            }
        }

        if let Some(side) = winner(&state, first_to) {
            state.win(format!("{} WINS", side.as_str().to_uppercase()));
            for event in state.take_events() {
                log::info!("{}", serde_json::to_string(&event)?);
            }
            break;
        }
    }

    if state.phase != GamePhase::Ended {
        log::warn!("No winner after {:.0}s", state.clock_ms / 1000.0);
    }

    let counters = state.counters;
    log::info!(
        "Finished after {frame} frames: {} hits, {} bounces",
        counters.total_hits,
        counters.total_bounces
    );
    println!("{}", serde_json::to_string_pretty(&state.frame())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a web front end; there is no wasm binary
}
