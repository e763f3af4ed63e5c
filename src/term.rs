use crate::{Coords, TermInt};
use crate::render::{CellKind, Frame};
use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

const BORDER_CHAR: char = '┃';
const BODY_CHAR: char = '█';
const FOOD_CHAR: char = '╋';

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Draws the frame from the top left corner: header, one line per
    /// interior row framed by the side borders, footer.
    pub fn draw_frame(&mut self, frame: &Frame) -> Result<()> {
        self.print_line_at((0, 0), &frame.header, Color::White)?;

        for (i, row) in frame.rows.iter().enumerate() {
            let y = i as TermInt + 1;
            self.print_at((0, y), BORDER_CHAR, Color::White)?;

            for (j, kind) in row.iter().enumerate() {
                let (ch, color) = match kind {
                    CellKind::Empty => (' ', Color::White),
                    CellKind::Food => (FOOD_CHAR, Color::Red),
                    CellKind::Body => (BODY_CHAR, Color::Green),
                };
                self.print_at((j as TermInt + 1, y), ch, color)?;
            }

            self.print_at((row.len() as TermInt + 1, y), BORDER_CHAR, Color::White)?;
        }

        let footer_y = frame.rows.len() as TermInt + 1;
        self.print_line_at((0, footer_y), &frame.footer, Color::White)?;

        self.flush()
    }

    /// Centered box with one line per entry
    pub fn show_message(&mut self, lines: &[String], color: Color) -> Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        self.print_line_at(top_left, &blank, color)?;
        self.print_line_at((top_left.0, top_left.1 + msg_height - 1), &blank, color)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            self.print_line_at((top_left.0, y), &padded_line, color)?;
        }

        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char, color: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(ch)
        )
        .context("Error queueing output")?;
        Ok(())
    }

    fn print_line_at(&mut self, pos: Coords, line: &str, color: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(line)
        )
        .context("Error queueing output")?;
        Ok(())
    }
}
