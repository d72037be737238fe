//! Push Arena headless runner
//!
//! Runs a scripted duel through the controller and prints the final fighter
//! snapshots as JSON. Pass a tuning JSON file as the first argument to
//! override the defaults.

use anyhow::Context;

use push_arena::sim::{FighterState, MatchState, OPPONENT_ID, PLAYER_ID, tick};
use push_arena::{ButtonKind, Controller, Tuning};

/// Frames to simulate (10 seconds at the reference rate)
const RUN_FRAMES: u64 = 600;

/// One reference frame per tick
const DT: f32 = 1.0;

/// Scripted key events: (frame, key, pressed)
const SCRIPT: &[(u64, &str, bool)] = &[
    (10, "d", true),
    (80, "s", true),
    (84, "s", false),
    (200, "d", false),
    (240, "s", true),
    (241, "s", false),
    (300, "d", true),
    (420, "s", true),
    (470, "d", false),
    (480, "s", false),
];

fn load_tuning() -> anyhow::Result<Tuning> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            let tuning = Tuning::from_json(&json).with_context(|| format!("parsing {path}"))?;
            log::info!("Loaded tuning from {}", path);
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Push Arena (headless) starting...");

    let tuning = load_tuning()?;
    let mut state = MatchState::duel(&tuning).context("setting up the duel")?;

    let mut controller = Controller::default();
    controller.bind(ButtonKind::Move, PLAYER_ID, &state.arena)?;
    controller.bind(ButtonKind::Push, PLAYER_ID, &state.arena)?;

    let mut last_states: Vec<FighterState> = state.arena.fighters().map(|f| f.state()).collect();

    for frame in 0..RUN_FRAMES {
        for &(_, key, pressed) in SCRIPT.iter().filter(|(at, ..)| *at == frame) {
            if pressed {
                controller.key_down(key);
            } else {
                controller.key_up(key);
            }
            log::trace!("Frame {}: key {} {}", frame, key, if pressed { "down" } else { "up" });
        }

        let input = controller.poll();
        tick(&mut state, &input, DT);

        for (fighter, last) in state.arena.fighters().zip(last_states.iter_mut()) {
            if fighter.state() != *last {
                log::info!(
                    "Frame {}: fighter {} {:?} -> {:?}",
                    state.frame,
                    fighter.id,
                    last,
                    fighter.state()
                );
                *last = fighter.state();
            }
        }
    }

    log::info!("{}", state.timer.text().replace('\n', ", "));
    if let Some(opponent) = state.arena.get(OPPONENT_ID) {
        log::info!(
            "Opponent finished at ({:.1}, {:.1})",
            opponent.position().x,
            opponent.position().y
        );
    }

    let snapshot = serde_json::to_string_pretty(&state.arena.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
