use crate::Cell;
use crate::snake::Direction;

/// Value of a cell nobody occupies
pub const EMPTY: Cell = 0;
/// Value of the cell holding the food
pub const FOOD: Cell = -1;

/// A (row, column) pair on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step towards `direction`
    pub fn step(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self::new(self.row + d_row, self.col + d_col)
    }
}

/// The whole board, borders included.
///
/// Positive cells are the snake's body: each value is the segment's age,
/// highest at the head and counting down towards the tail. Every tick in
/// which the snake doesn't eat, all of them are decremented, so the tail
/// recedes by one cell and the body behaves like a queue without storing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Grid { height, width, cells: vec![EMPTY; height * width] }
    }

    /// Builds a board with a snake of `length` laid out horizontally from the
    /// center: values `length, length - 1, ..., 0` going right. Returns the
    /// board together with the head, which holds `length`.
    pub fn with_snake(height: usize, width: usize, length: usize) -> (Self, Position) {
        let mut grid = Grid::new(height, width);
        let head = Position::new((height / 2) as i32, (width / 2) as i32);

        for i in 0..=length {
            let pos = Position::new(head.row, head.col + i as i32);
            grid.set(pos, (length - i) as Cell);
        }

        (grid, head)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `pos` lies strictly inside the border
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row >= 1
            && pos.col >= 1
            && (pos.row as usize) <= self.height - 2
            && (pos.col as usize) <= self.width - 2
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, value: Cell) {
        let i = self.index(pos);
        self.cells[i] = value;
    }

    /// Ages every body cell by one; cells reaching zero become empty
    pub fn decay(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c > 0) {
            *cell -= 1;
        }
    }

    /// Interior cells holding nothing, in row-major order
    pub fn free_cells(&self) -> Vec<Position> {
        let mut free = vec![];

        for row in 1..self.height.saturating_sub(1) {
            for col in 1..self.width.saturating_sub(1) {
                let pos = Position::new(row as i32, col as i32);
                if self.get(pos) == EMPTY {
                    free.push(pos);
                }
            }
        }

        free
    }

    /// Number of cells occupied by the snake
    pub fn body_len(&self) -> usize {
        self.cells.iter().filter(|c| **c > 0).count()
    }

    pub fn max_value(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|c| **c == value).count()
    }

    /// Rows top to bottom, each a slice of `width` cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Position) -> usize {
        debug_assert!(
            pos.row >= 0 && pos.col >= 0
                && (pos.row as usize) < self.height
                && (pos.col as usize) < self.width,
            "{:?} is off the board",
            pos
        );
        self.width * pos.row as usize + pos.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let (grid, head) = Grid::with_snake(20, 50, 5);

        assert_eq!(head, Position::new(10, 25));
        let expected = [5, 4, 3, 2, 1, 0];
        for (i, value) in expected.iter().enumerate() {
            assert_eq!(grid.get(Position::new(10, 25 + i as i32)), *value);
        }
        assert_eq!(grid.body_len(), 5);
        assert_eq!(grid.max_value(), 5);
        assert_eq!(grid.count(FOOD), 0);
    }

    #[test]
    fn test_decay_recedes_tail() {
        let (mut grid, _) = Grid::with_snake(20, 50, 5);
        grid.set(Position::new(3, 3), FOOD);

        grid.decay();

        assert_eq!(grid.get(Position::new(10, 25)), 4);
        assert_eq!(grid.get(Position::new(10, 29)), 0);
        assert_eq!(grid.body_len(), 4);
        // food is not a body cell and must survive decay
        assert_eq!(grid.get(Position::new(3, 3)), FOOD);
    }

    #[test]
    fn test_interior_bounds() {
        let grid = Grid::new(20, 50);

        assert!(grid.is_interior(Position::new(1, 1)));
        assert!(grid.is_interior(Position::new(18, 48)));
        assert!(!grid.is_interior(Position::new(0, 5)));
        assert!(!grid.is_interior(Position::new(19, 5)));
        assert!(!grid.is_interior(Position::new(5, 0)));
        assert!(!grid.is_interior(Position::new(5, 49)));
        assert!(!grid.is_interior(Position::new(-1, 5)));
    }

    #[test]
    fn test_free_cells_skip_border_and_body() {
        let (grid, _) = Grid::with_snake(5, 10, 2);

        // 3 x 8 interior minus two body cells
        let free = grid.free_cells();
        assert_eq!(free.len(), 3 * 8 - 2);
        assert!(free.iter().all(|p| grid.is_interior(*p)));
        assert!(!free.contains(&Position::new(2, 5)));
        assert!(!free.contains(&Position::new(2, 6)));
        assert!(free.contains(&Position::new(2, 7)));
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Up), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Down), Position::new(6, 5));
        assert_eq!(pos.step(Direction::Left), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Right), Position::new(5, 6));
    }
}
