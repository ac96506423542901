use super::direction::Direction;

/// A cell on the game grid, addressed as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// The snake, head-first. Invariant: no duplicate cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// A newly spawned snake is a single cell
    pub fn spawn(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Check whether a cell is occupied by any segment
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Standard locomotion: the new head is prepended and every other
    /// segment shifts to its predecessor's cell. Growing keeps the old
    /// tail in place instead of dropping it.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Engine constructed, no game started yet
    NotStarted,
    /// Tick loop active
    Playing,
    /// Hit a wall or itself; terminal until the next start
    Ended,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Candidate head left the grid
    Wall,
    /// Candidate head landed on the snake itself
    SelfCollision,
}

/// Classification of a grid cell for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// Complete simulation state, snapshotted for the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Absent until the first start
    pub food: Option<Cell>,
    pub direction: Direction,
    pub status: GameStatus,
    pub grid_size: usize,
}

impl GameState {
    /// The idle state an engine holds before any game has been started
    pub fn not_started(grid_size: usize) -> Self {
        Self {
            snake: Snake { body: Vec::new() },
            food: None,
            direction: Direction::Right,
            status: GameStatus::NotStarted,
            grid_size,
        }
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.row < self.grid_size as i32
            && cell.col >= 0
            && cell.col < self.grid_size as i32
    }

    /// Classify a cell for rendering
    pub fn tile(&self, cell: Cell) -> Tile {
        if !self.snake.is_empty() && self.snake.head() == cell {
            Tile::SnakeHead
        } else if self.snake.contains(cell) {
            Tile::SnakeBody
        } else if self.food == Some(cell) {
            Tile::Food
        } else {
            Tile::Empty
        }
    }
}
