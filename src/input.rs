use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::snake::Direction::{self, *};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers};
use log::{error, trace};

/// Everything the session loop can be asked to do besides ticking
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

impl Command {
    /// Arrows and WASD steer, Esc and CTRL+C quit. Any other key still counts
    /// as a move, in the default direction.
    pub fn from_key(ev: &KeyEvent) -> Self {
        if is_ctrl_c(ev) {
            return Command::Quit;
        }

        match ev.code {
            KeyCode::Esc => Command::Quit,
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Steer(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Steer(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Steer(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Steer(Right),
            _ => Command::Steer(Direction::default()),
        }
    }
}

/// Reads key presses on a background thread and forwards them as commands.
/// The thread exits once the receiving end is gone.
pub fn spawn_listener(commands: Sender<Command>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        let ev = match read() {
            Ok(ev) => ev,
            Err(e) => {
                error!("Failed to read terminal event: {}", e);
                let _ = commands.send(Command::Quit);
                return;
            }
        };

        if let Event::Key(key_ev) = ev {
            let cmd = Command::from_key(&key_ev);
            trace!("{:?} -> {:?}", key_ev, cmd);
            if commands.send(cmd).is_err() {
                return;
            }
        }
    })
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
