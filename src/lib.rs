pub mod infra;
pub mod solver;
pub mod state;

// Re-export commonly used types for convenience
pub use infra::{Direction, Point};
pub use solver::{BlastConfig, Solver};
pub use state::{Board, Bomb, Element};
