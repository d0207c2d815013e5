use anyhow::{bail, Result};
use rand::Rng;

use crate::consts::*;
use crate::engine::{GameEngine, GameState};
use crate::highscore::HighScoreStore;
use crate::snake::{Position, Snake};
use crate::term::{Coords, TermInt, TermManager};

/// Each board cell is two columns wide so it looks roughly square.
const CELL_WIDTH: TermInt = 2;
const BOARD_SIZE: Coords = (BOARD_CELLS * CELL_WIDTH + 2, BOARD_CELLS + 2);

/// Draws the engine's state onto the terminal, touching only cells that changed.
pub struct Renderer {
    term: TermManager,
    frame: Vec<char>,
    score_line: String,
    shown_state: Option<GameState>,
}

impl Renderer {
    pub fn new(term: TermManager) -> Result<Self> {
        let (w, h) = term.size();
        if w < BOARD_SIZE.0 || h < BOARD_SIZE.1 + 1 {
            bail!(
                "Terminal is {}x{}, the board needs at least {}x{}",
                w,
                h,
                BOARD_SIZE.0,
                BOARD_SIZE.1 + 1
            );
        }

        let cells = BOARD_CELLS as usize * BOARD_CELLS as usize;
        Ok(Renderer { term, frame: vec![' '; cells], score_line: String::new(), shown_state: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.clear()?;
        self.term.draw_borders(BOARD_SIZE)?;
        self.term.flush()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    pub fn term(&self) -> &TermManager {
        &self.term
    }

    pub fn render<S: HighScoreStore, R: Rng>(&mut self, engine: &GameEngine<S, R>) -> Result<()> {
        let state = engine.state();
        let state_changed = self.shown_state != Some(state);

        if state_changed {
            self.term.hide_message()?;
        }

        let frame = compose(engine.snake(), engine.food(), state == GameState::GameOver);
        let previous = std::mem::take(&mut self.frame);
        for (idx, (&new, &old)) in frame.iter().zip(previous.iter()).enumerate() {
            if new != old {
                self.draw_cell(idx, new)?;
            }
        }
        self.frame = frame;

        let score_line = score_line(engine.score(), engine.high_score());
        if score_line != self.score_line {
            let padded = format!("{:<width$}", score_line, width = BOARD_SIZE.0 as usize);
            self.term.print_str_at((0, BOARD_SIZE.1), &padded)?;
            self.score_line = score_line;
        }

        if state_changed {
            self.show_overlay(state, engine.score())?;
            self.shown_state = Some(state);
        }

        self.term.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_cell(&mut self, idx: usize, ch: char) -> Result<()> {
        let cells = BOARD_CELLS as usize;
        let (col, row) = ((idx % cells) as TermInt, (idx / cells) as TermInt);
        let x = 1 + col * CELL_WIDTH;
        let y = 1 + row;

        let filler = if ch == SNAKE_BODY_CHAR { SNAKE_BODY_CHAR } else { ' ' };
        self.term.print_at((x, y), ch)?;
        self.term.print_at((x + 1, y), filler)
    }

    fn show_overlay(&mut self, state: GameState, score: u32) -> Result<()> {
        let center = (BOARD_SIZE.0 / 2, BOARD_SIZE.1 / 2);

        match state {
            GameState::Start => self.term.show_message(
                center,
                &["SNAKE GAME", "", "Press SPACE to Start", "Use Arrow Keys to Move", "Press P to Pause"],
            ),
            GameState::Paused => self.term.show_message(center, &["PAUSED", "Press P to Resume"]),
            GameState::GameOver => self.term.show_message(
                center,
                &[
                    "GAME OVER!",
                    &*format!("Final Score: {}", score),
                    "",
                    "Press SPACE to Play Again",
                    "Press Q to Quit",
                ],
            ),
            GameState::Playing => Ok(()),
        }
    }
}

pub fn score_line(score: u32, high_score: u32) -> String {
    format!("Score: {} | High Score: {}", score, high_score)
}

/// Column and row of the board cell holding `pos`, or None off the board.
fn cell_of(pos: Position) -> Option<(usize, usize)> {
    if pos.x.abs() > BOARD_LIMIT || pos.y.abs() > BOARD_LIMIT {
        return None;
    }

    // Round to the nearest cell
    let col = (pos.x + BOARD_LIMIT + MOVE_DISTANCE / 2) / MOVE_DISTANCE;
    let row = (BOARD_LIMIT - pos.y + MOVE_DISTANCE / 2) / MOVE_DISTANCE;
    Some((col as usize, row as usize))
}

/// One glyph per board cell, row-major from the top left.
fn compose(snake: &Snake, food: Position, dead: bool) -> Vec<char> {
    let cells = BOARD_CELLS as usize;
    let mut frame = vec![' '; cells * cells];

    let mut put = |pos: Position, ch: char| {
        if let Some((col, row)) = cell_of(pos) {
            frame[row * cells + col] = ch;
        }
    };

    put(food, FOOD_CHAR);

    for seg in snake.body().iter().rev() {
        put(*seg, if dead { DEAD_SNAKE_CHAR } else { SNAKE_BODY_CHAR });
    }
    put(snake.head(), if dead { DEAD_SNAKE_CHAR } else { snake.head_char() });

    frame
}
