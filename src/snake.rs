use crate::grid::{Grid, Position, FOOD};
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    // Until a key is pressed the snake crawls left, into its own trail
    #[default]
    Left,
    Right,
}

impl Direction {
    /// (row, column) offset of one step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Position, old_head: Position, ate_food: bool },
    Crashed(Collision),
}

/// The moving end of the snake. The rest of the body lives in the grid as
/// decaying ages, so all the snake itself has to remember is where its head
/// is and where it is heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake { head, direction: Direction::default() }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    // No reversal guard: turning back into the neck is a legal (fatal) move
    pub fn set_direction(&mut self, new_direction: Direction) {
        self.direction = new_direction;
    }

    /// Moves the head one cell. On a crash nothing on the grid changes.
    /// When the new cell held food the trail is left alone, so the snake
    /// ends the step one segment longer; otherwise the whole body decays.
    pub fn move_step(&mut self, grid: &mut Grid) -> MoveResult {
        let old_head = self.head;
        let new_head = old_head.step(self.direction);

        if !grid.is_interior(new_head) {
            return Crashed(Collision::Wall);
        }

        let target = grid.get(new_head);
        if target > 0 {
            return Crashed(Collision::SelfCollision);
        }

        let ate_food = target == FOOD;

        grid.set(new_head, grid.get(old_head) + 1);
        self.head = new_head;

        if !ate_food {
            grid.decay();
        }

        Moved { new_head, old_head, ate_food }
    }
}
