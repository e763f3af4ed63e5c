use std::time::Duration;

use crate::Cell;
use crate::config::GameConfig;
use crate::grid::{Grid, Position, FOOD};
use crate::snake::{Collision, Direction, MoveResult, Snake};
use crate::ticker::Ticker;

use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No free cell left for food
    Won,
    Lost(Collision),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// Built, timer not started yet
    Ready,
    Running,
    Ended(Outcome),
}

/// What a single tick did
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing happened because the game is not running
    Idle,
    Moved { ate_food: bool },
    Ended(Outcome),
}

/// Read-only view handed to the renderer after every tick
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub score: Cell,
    pub interval_ms: f64,
    pub food: Option<Position>,
    pub status: Status,
}

/// One game session: the board, the snake, the food and the tick timer.
///
/// Every mutation goes through `&mut self`, so the owner decides the order in
/// which timer ticks and steering commands are applied and no two of them
/// can overlap.
pub struct Engine<R = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    interval_ms: f64,
    status: Status,
    ticker: Ticker,
    rng: R,
}

impl Engine<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Engine::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let (grid, head) = Grid::with_snake(config.height, config.width, config.initial_length);
        let interval_ms = config.initial_interval_ms;

        Engine {
            grid,
            snake: Snake::new(head),
            food: None,
            interval_ms,
            status: Status::Ready,
            ticker: Ticker::new(interval_ms),
            rng,
            config,
        }
    }

    /// Starts the tick timer. Only does something the first time, from `Ready`.
    pub fn start(&mut self) -> bool {
        if self.status != Status::Ready {
            return false;
        }

        self.status = Status::Running;
        self.ticker.start();
        info!(
            "Session started on a {}x{} board, snake length {}, {}ms per tick",
            self.config.height, self.config.width, self.config.initial_length, self.interval_ms
        );
        true
    }

    /// Advances the game by one step: make sure there is food, then move.
    /// A no-op unless the game is running.
    pub fn tick(&mut self) -> Step {
        if self.status != Status::Running {
            return Step::Idle;
        }

        if self.place_food().is_none() {
            return self.end(Outcome::Won);
        }

        match self.snake.move_step(&mut self.grid) {
            MoveResult::Crashed(collision) => self.end(Outcome::Lost(collision)),
            MoveResult::Moved { new_head, old_head, ate_food } => {
                trace!("Head {:?} -> {:?} going {:?}", old_head, new_head, self.snake.get_direction());
                if ate_food {
                    self.food = None;
                    self.speed_up();
                }
                debug_assert_eq!(self.grid.max_value(), self.score());
                debug_assert!(self.grid.count(FOOD) <= 1);
                Step::Moved { ate_food }
            }
        }
    }

    /// The timer came due: tick and schedule the next one
    pub fn on_timer(&mut self) -> Step {
        let step = self.tick();
        self.ticker.reset();
        step
    }

    /// Player input: turn, move right away and restart the countdown so the
    /// next automatic tick is a full interval away
    pub fn steer(&mut self, direction: Direction) -> Step {
        if self.status != Status::Running {
            return Step::Idle;
        }

        self.snake.set_direction(direction);
        let step = self.tick();
        self.ticker.reset();
        step
    }

    /// Puts food on a random free cell unless some is already on the board.
    /// Returns where the food is, or `None` when the board is full.
    pub fn place_food(&mut self) -> Option<Position> {
        if self.food.is_some() {
            return self.food;
        }

        let choices = self.grid.free_cells();
        let food = choices.choose(&mut self.rng).copied()?;

        self.grid.set(food, FOOD);
        self.food = Some(food);
        debug!("Food placed at {:?}, {} free cells were left", food, choices.len());
        Some(food)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            score: self.score(),
            interval_ms: self.interval_ms,
            food: self.food,
            status: self.status,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The age of the head, which is also the length of the snake
    pub fn score(&self) -> Cell {
        self.grid.get(self.snake.head())
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// How long until the timer is due, `None` once it is stopped
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.ticker.remaining()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn end(&mut self, outcome: Outcome) -> Step {
        self.status = Status::Ended(outcome);
        self.ticker.stop();
        info!("Session ended: {:?}, score {}", outcome, self.score());
        Step::Ended(outcome)
    }

    fn speed_up(&mut self) {
        self.interval_ms = (self.interval_ms * self.config.speed_factor).max(self.config.min_interval_ms);
        self.ticker.set_interval(self.interval_ms);
        debug!("Food eaten, interval now {}ms", self.interval_ms);
    }
}
