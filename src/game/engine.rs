use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, CollisionKind, GameState, GameStatus, Snake},
};
use rand::Rng;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set when this tick ended the game
    pub collision: Option<CollisionKind>,
}

/// The game engine. Owns all simulation state; the rendering layer only
/// ever sees immutable snapshots via [`GameEngine::state`].
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    /// Latest direction requested since the previous tick (last write wins)
    pending_direction: Option<Direction>,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create an idle engine; no game is running until [`GameEngine::start`]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::not_started(config.grid_size);
        Self {
            config,
            state,
            pending_direction: None,
            rng: rand::thread_rng(),
        }
    }

    /// Immutable snapshot of the current simulation state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Record the direction to apply at the next tick. Overwrites any
    /// earlier request unconditionally; reversals are accepted (a
    /// length >= 2 snake reversing into itself dies by self-collision,
    /// which matches the board this is a port of).
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Begin a new game. A no-op while a game is already playing, so a
    /// repeated start cannot double-initialize mid-game.
    pub fn start(&mut self) {
        if self.state.status == GameStatus::Playing {
            return;
        }

        let center = (self.config.grid_size / 2) as i32;
        let snake = Snake::spawn(Cell::new(center, center));

        self.state.food = self.spawn_food(&snake);
        self.state.snake = snake;
        self.state.direction = Direction::Right;
        self.state.status = GameStatus::Playing;
        self.pending_direction = None;
    }

    /// Advance the simulation by one step. A no-op unless a game is
    /// playing, so stray timer fires after game over (or before the first
    /// start) never mutate state.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Playing {
            return TickOutcome::default();
        }

        if let Some(direction) = self.pending_direction.take() {
            self.state.direction = direction;
        }

        let candidate_head = self.state.snake.head().moved_in_direction(self.state.direction);

        // Collisions are judged against the pre-tick snake: moving into
        // the cell the tail is about to vacate still kills.
        if let Some(collision) = self.check_collision(candidate_head) {
            self.state.status = GameStatus::Ended;
            return TickOutcome {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = self.state.food == Some(candidate_head);
        self.state.snake.advance(candidate_head, ate_food);

        if ate_food {
            // Sample against the post-tick snake so the new food cell can
            // collide with neither the grown tail nor the new head.
            let snake = self.state.snake.clone();
            self.state.food = self.spawn_food(&snake);
        }

        TickOutcome {
            ate_food,
            collision: None,
        }
    }

    fn check_collision(&self, candidate_head: Cell) -> Option<CollisionKind> {
        if !self.state.is_in_bounds(candidate_head) {
            Some(CollisionKind::Wall)
        } else if self.state.snake.contains(candidate_head) {
            Some(CollisionKind::SelfCollision)
        } else {
            None
        }
    }

    /// Rejection sampling: draw uniform cells until one misses the snake.
    /// Returns `None` only when the snake covers the whole grid.
    fn spawn_food(&mut self, snake: &Snake) -> Option<Cell> {
        if snake.len() >= self.config.grid_size * self.config.grid_size {
            return None;
        }

        loop {
            let row = self.rng.gen_range(0..self.config.grid_size) as i32;
            let col = self.rng.gen_range(0..self.config.grid_size) as i32;
            let cell = Cell::new(row, col);

            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }
}
