//! Headless driver for the Gravesite Plain.
//!
//! Loads a scenario, hands the player to the [`Autopilot`] and plays rounds
//! until the turn limit is reached or the player is knocked out, writing each
//! round's messages and the map to an output stream.

pub mod autopilot;
pub mod config;

pub use autopilot::Autopilot;
pub use config::ClientConfig;

use std::io::Write;

use anyhow::Result;
use gravesite_content::{ScenarioLoader, gravesite_plain};
use gravesite_core::{GameEngine, GameError, GameState, PcgRng};

/// How a headless run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds: u64,
    pub player_conscious: bool,
}

/// Builds the starting state from the configured scenario.
pub fn load_state(config: &ClientConfig) -> Result<GameState> {
    let map = match &config.scenario {
        Some(path) => ScenarioLoader::load_map(path)?,
        None => gravesite_plain().map_err(|e| {
            anyhow::anyhow!(
                "built-in Gravesite Plain is invalid: [{}] {}",
                e.error_code(),
                e
            )
        })?,
    };
    Ok(GameState::new(config.game.seed, map))
}

/// Plays a full run, writing the log to `out`.
pub fn run(config: &ClientConfig, out: &mut impl Write) -> Result<RunSummary> {
    let mut state = load_state(config)?;
    let rng = PcgRng;
    let mut autopilot = Autopilot::default();

    tracing::info!(
        map = state.map.name(),
        seed = config.game.seed,
        turn_limit = config.game.turn_limit,
        "starting run"
    );
    writeln!(out, "== {} ==", state.map.name())?;
    write!(out, "{}", state.map.render())?;

    let mut engine = GameEngine::new(&mut state, &rng);
    for _ in 0..config.game.turn_limit {
        if engine.is_over() {
            break;
        }
        let report = engine.play_round(&mut autopilot);
        writeln!(out, "\n-- Round {} --", report.round)?;
        write!(out, "{report}")?;
        write!(out, "{}", engine.state().map.render())?;
    }

    let summary = RunSummary {
        rounds: engine.state().turn.round,
        player_conscious: !engine.is_over(),
    };
    if !summary.player_conscious {
        writeln!(out, "\nYOU DIED")?;
    }
    tracing::info!(
        rounds = summary.rounds,
        player_conscious = summary.player_conscious,
        "run finished"
    );
    Ok(summary)
}
