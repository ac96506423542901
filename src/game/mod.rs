//! Core game logic module for Snake
//!
//! Everything here is pure state manipulation with no I/O or rendering
//! dependencies. The engine owns the simulation; callers feed it
//! direction changes and timer ticks and render the snapshots it hands
//! back.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{Cell, CollisionKind, GameState, GameStatus, Snake, Tile};
