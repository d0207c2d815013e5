use std::time::Instant;

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use crate::engine::{GameEngine, Response, TickOutcome};
use crate::highscore::HighScoreStore;
use crate::input::{map_key, KeyAction};
use crate::render::Renderer;

/// Runs the game until the player quits, then restores the terminal even if
/// the loop failed.
pub fn run<S: HighScoreStore, R: Rng>(engine: &mut GameEngine<S, R>, renderer: &mut Renderer) -> Result<()> {
    let res = renderer.setup().and_then(|_| game_loop(engine, renderer));
    let restored = renderer.restore();
    res.and(restored)
}

fn game_loop<S: HighScoreStore, R: Rng>(engine: &mut GameEngine<S, R>, renderer: &mut Renderer) -> Result<()> {
    loop {
        renderer.render(engine)?;

        // Wait out the delay first, the tick closes the iteration
        // Keys are applied while waiting out the delay, never during a tick
        let deadline = Instant::now() + engine.current_delay();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());

            for key_ev in renderer.term().read_key_events(remaining)? {
                match map_key(&key_ev) {
                    KeyAction::Interrupt => {
                        info!("Interrupted");
                        return Ok(());
                    }
                    KeyAction::Command(cmd) => {
                        if engine.handle_input(cmd) == Response::Quit {
                            info!("Quit with high score {}", engine.high_score());
                            return Ok(());
                        }
                    }
                    KeyAction::None => {}
                }
            }

            if Instant::now() >= deadline {
                break;
            }
        }

        if engine.tick() == TickOutcome::Ate {
            debug!("Score {}, delay now {:?}", engine.score(), engine.delay());
        }
    }
}
