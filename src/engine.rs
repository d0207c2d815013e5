use std::time::Duration;

use log::{debug, info, warn};
use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::consts::*;
use crate::highscore::HighScoreStore;
use crate::snake::{Direction, Position, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    TogglePause,
    Start,
    Quit,
}

/// What the engine made of a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Accepted,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing changed
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
}

pub struct GameEngine<S, R = ThreadRng> {
    state: GameState,
    snake: Snake,
    food: Position,
    pending_direction: Option<Direction>,
    score: u32,
    high_score: u32,
    // Last value written to (or read from) the store
    saved_high_score: u32,
    delay: Duration,
    store: S,
    rng: R,
}

impl<S: HighScoreStore> GameEngine<S, ThreadRng> {
    pub fn new(store: S) -> Self {
        GameEngine::with_rng(store, rand::thread_rng())
    }
}

impl<S: HighScoreStore, R: Rng> GameEngine<S, R> {
    pub fn with_rng(store: S, mut rng: R) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("Could not load high score, starting from 0: {:#}", e);
                0
            }
        };

        let snake = Snake::new(Position::ORIGIN);
        let food = spawn_food(&snake, &mut rng).unwrap_or(Position::new(MOVE_DISTANCE, 0));

        GameEngine {
            state: GameState::Start,
            snake,
            food,
            pending_direction: None,
            score: 0,
            high_score,
            saved_high_score: high_score,
            delay: INITIAL_DELAY,
            store,
            rng,
        }
    }

    pub fn handle_input(&mut self, command: Command) -> Response {
        use GameState::*;

        match (command, self.state) {
            (Command::Move(dir), Playing) => {
                if dir == Direction::Stop || self.snake.direction().is_opposite(dir) {
                    return Response::Ignored;
                }
                self.pending_direction = Some(dir);
                Response::Accepted
            }
            (Command::TogglePause, Playing) => {
                self.set_state(Paused);
                Response::Accepted
            }
            (Command::TogglePause, Paused) => {
                self.set_state(Playing);
                Response::Accepted
            }
            (Command::Start, Start) | (Command::Start, GameOver) => {
                self.reset();
                self.set_state(Playing);
                Response::Accepted
            }
            (Command::Quit, GameOver) => Response::Quit,
            _ => Response::Ignored,
        }
    }

    /// Advances the simulation by one step. Does nothing unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        if let Some(dir) = self.pending_direction.take() {
            self.snake.set_direction(dir);
        }

        self.snake.advance();

        let collision = if self.snake.head().out_of_bounds() {
            Some(Collision::Wall)
        } else if self.snake.head_hits_body() {
            Some(Collision::Body)
        } else {
            None
        };

        if let Some(collision) = collision {
            info!(
                "Crashed into {:?} at {:?}, length {}, score {}",
                collision,
                self.snake.head(),
                self.snake.len(),
                self.score
            );
            self.game_over();
            return TickOutcome::Crashed(collision);
        }

        if self.snake.head().touches(self.food) {
            self.eat();
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    /// How long the main loop should wait before the next iteration.
    pub fn current_delay(&self) -> Duration {
        match self.state {
            GameState::Playing => self.delay,
            _ => IDLE_DELAY,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_state(&mut self, state: GameState) {
        debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn reset(&mut self) {
        self.score = 0;
        self.delay = INITIAL_DELAY;
        self.pending_direction = None;
        self.snake = Snake::new(Position::ORIGIN);

        if let Some(food) = spawn_food(&self.snake, &mut self.rng) {
            self.food = food;
        }
    }

    fn eat(&mut self) {
        self.snake.grow();
        self.score += SCORE_INCREMENT;
        self.delay = self
            .delay
            .checked_sub(DELAY_STEP)
            .map_or(MIN_DELAY, |d| d.max(MIN_DELAY));

        if self.score > self.high_score {
            self.high_score = self.score;
        }

        match spawn_food(&self.snake, &mut self.rng) {
            Some(food) => self.food = food,
            None => warn!("No free cell left for food, it stays under the snake"),
        }
    }

    fn game_over(&mut self) {
        self.set_state(GameState::GameOver);

        if self.score > self.saved_high_score {
            self.high_score = self.high_score.max(self.score);
            info!("New high score: {}", self.score);

            match self.store.save(self.score) {
                Ok(()) => self.saved_high_score = self.score,
                Err(e) => warn!("Could not save high score: {:#}", e),
            }
        }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

/// Picks a random grid cell clear of the snake. Falls back to scanning the
/// board once random picks keep landing on the snake.
fn spawn_food<R: Rng>(snake: &Snake, rng: &mut R) -> Option<Position> {
    let half = BOARD_LIMIT / MOVE_DISTANCE;

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(-half..=half) * MOVE_DISTANCE,
            rng.gen_range(-half..=half) * MOVE_DISTANCE,
        );

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = board_cells().filter(|pos| !snake.occupies(*pos)).collect();
    free.choose(rng).copied()
}

fn board_cells() -> impl Iterator<Item = Position> {
    let half = BOARD_LIMIT / MOVE_DISTANCE;
    (-half..=half).flat_map(move |y| {
        (-half..=half).map(move |x| Position::new(x * MOVE_DISTANCE, y * MOVE_DISTANCE))
    })
}
