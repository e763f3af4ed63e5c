use crate::Cell;
use crate::engine::{Outcome, Snapshot};
use crate::snake::Collision;

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '━';

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Food,
    Body,
}

impl CellKind {
    pub fn of(value: Cell) -> Self {
        match value {
            0 => CellKind::Empty,
            v if v > 0 => CellKind::Body,
            _ => CellKind::Food,
        }
    }
}

/// Everything that ends up on screen for one tick. The first and last grid
/// rows and columns are the border, so only the interior becomes `rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub header: String,
    pub rows: Vec<Vec<CellKind>>,
    pub footer: String,
}

impl Frame {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let width = snapshot.grid.width();
        let height = snapshot.grid.height();

        let header = border_line(
            &format!("{} Score: {} Speed: {:.0}ms ", TOP_LEFT, snapshot.score, snapshot.interval_ms),
            TOP_RIGHT,
            width,
        );

        let food = match snapshot.food {
            Some(pos) => format!("{} Food is at {}, {} ", BOTTOM_LEFT, pos.row, pos.col),
            None => format!("{} No food yet ", BOTTOM_LEFT),
        };
        let footer = border_line(&food, BOTTOM_RIGHT, width);

        let rows: Vec<Vec<CellKind>> = snapshot
            .grid
            .rows()
            .skip(1)
            .take(height.saturating_sub(2))
            .map(|row| row[1..width - 1].iter().map(|v| CellKind::of(*v)).collect::<Vec<_>>())
            .collect();

        Frame { header, rows, footer }
    }
}

/// Lines shown once the session is over
pub fn end_message(outcome: Outcome, score: Cell) -> Vec<String> {
    let headline = match outcome {
        Outcome::Won => "You won!",
        Outcome::Lost(Collision::Wall) => "Game over! You hit the wall.",
        Outcome::Lost(Collision::SelfCollision) => "Game over! You bit yourself.",
    };

    vec![
        headline.to_string(),
        format!("Final score: {}", score),
        String::new(),
        "Press any key to play again,".to_string(),
        "or Esc / CTRL+C to quit.".to_string(),
    ]
}

// Pads `text` with the border stroke so the line is exactly `width` chars
// wide, the last one being `corner`. Text that doesn't fit is cut.
fn border_line(text: &str, corner: char, width: usize) -> String {
    let inner = width.saturating_sub(1);
    let mut line: String = text.chars().take(inner).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(HORIZONTAL).take(inner - len));
    line.push(corner);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use crate::grid::{Grid, Position, FOOD};

    #[test]
    fn test_cell_classification() {
        assert_eq!(CellKind::of(0), CellKind::Empty);
        assert_eq!(CellKind::of(FOOD), CellKind::Food);
        assert_eq!(CellKind::of(1), CellKind::Body);
        assert_eq!(CellKind::of(42), CellKind::Body);
    }

    #[test]
    fn test_frame_layout() {
        let (mut grid, _) = Grid::with_snake(20, 50, 5);
        grid.set(Position::new(3, 7), FOOD);
        let snapshot = Snapshot {
            grid: &grid,
            score: 5,
            interval_ms: 180.0,
            food: Some(Position::new(3, 7)),
            status: Status::Running,
        };

        let frame = Frame::from_snapshot(&snapshot);

        assert!(frame.header.starts_with("╭ Score: 5 Speed: 180ms "));
        assert!(frame.header.ends_with('╮'));
        assert_eq!(frame.header.chars().count(), 50);
        assert!(frame.footer.starts_with("╰ Food is at 3, 7 "));
        assert!(frame.footer.ends_with('╯'));
        assert_eq!(frame.footer.chars().count(), 50);

        assert_eq!(frame.rows.len(), 18);
        assert!(frame.rows.iter().all(|row| row.len() == 48));
        // grid (r, c) lands at rows[r - 1][c - 1]
        assert_eq!(frame.rows[2][6], CellKind::Food);
        assert_eq!(frame.rows[9][24], CellKind::Body);
        assert_eq!(frame.rows[9][28], CellKind::Body);
        assert_eq!(frame.rows[9][29], CellKind::Empty);
    }

    #[test]
    fn test_long_header_is_cut() {
        let line = border_line("╭ Score: 123456 Speed: 200ms ", '╮', 10);
        assert_eq!(line.chars().count(), 10);
        assert!(line.ends_with('╮'));
    }

    #[test]
    fn test_end_message_has_score() {
        let lines = end_message(Outcome::Lost(Collision::Wall), 12);
        assert!(lines[0].starts_with("Game over!"));
        assert_eq!(lines[1], "Final score: 12");

        let lines = end_message(Outcome::Won, 896);
        assert_eq!(lines[0], "You won!");
    }
}
