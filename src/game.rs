use std::sync::mpsc::{Receiver, RecvTimeoutError};

use crate::config::GameConfig;
use crate::engine::{Engine, Outcome, Status};
use crate::input::Command;
use crate::render::{end_message, Frame};
use crate::term::TermManager;

use anyhow::{ensure, Result};
use crossterm::style::Color;
use log::info;

/// Owns the terminal and the command queue and runs sessions one after the
/// other until the player quits.
pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    commands: Receiver<Command>,
}

impl SnakeGame {
    pub fn new(config: GameConfig, commands: Receiver<Command>) -> Result<Self> {
        Ok(SnakeGame { config, term: TermManager::new()?, commands })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (w, h) = self.term.get_terminal_size();
        ensure!(
            w as usize >= self.config.width && h as usize >= self.config.height,
            "The terminal is {}x{} but the board needs {}x{}",
            w,
            h,
            self.config.width,
            self.config.height
        );

        self.term.setup()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Intro screen, then sessions until the player quits
    pub fn run(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        let mut sessions = 0;
        loop {
            sessions += 1;
            info!("Starting session #{}", sessions);
            if !self.play()? {
                break;
            }
        }

        Ok(())
    }

    fn show_intro(&mut self) -> Result<bool> {
        let lines = [
            "Arrow keys or WASD to move",
            "Esc or CTRL+C to quit",
            "",
            "Press any key to begin",
        ];
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        self.term.clear()?;
        self.term.show_message(&lines, Color::White)?;

        Ok(self.wait_for_key())
    }

    /// Plays one session. Timer ticks and key presses are both handled here,
    /// one at a time: the queue is waited on until the next tick is due, and
    /// running out of time is the tick. Returns whether to play again.
    fn play(&mut self) -> Result<bool> {
        let mut engine = Engine::new(self.config.clone());

        self.term.clear()?;
        engine.start();
        self.draw(&engine)?;

        while let Some(wait) = engine.next_tick_in() {
            match self.commands.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => engine.on_timer(),
                Ok(Command::Steer(direction)) => engine.steer(direction),
                Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => return Ok(false),
            };

            self.draw(&engine)?;
        }

        match engine.status() {
            Status::Ended(outcome) => self.game_over(outcome, &engine),
            _ => Ok(false),
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw(&mut self, engine: &Engine) -> Result<()> {
        self.term.draw_frame(&Frame::from_snapshot(&engine.snapshot()))
    }

    fn game_over(&mut self, outcome: Outcome, engine: &Engine) -> Result<bool> {
        info!(
            "Final length {} with the head at {:?}, last interval {:.1}ms",
            engine.grid().body_len(),
            engine.head(),
            engine.interval_ms()
        );

        let color = if outcome == Outcome::Won { Color::Green } else { Color::Red };
        self.term.show_message(&end_message(outcome, engine.score()), color)?;

        // Keys mashed during the last ticks shouldn't skip the end screen
        while self.commands.try_recv().is_ok() {}

        Ok(self.wait_for_key())
    }

    // true for any key except the quit ones
    fn wait_for_key(&mut self) -> bool {
        matches!(self.commands.recv(), Ok(Command::Steer(_)))
    }
}
