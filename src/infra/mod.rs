mod frontier;
mod types;

pub use frontier::{Frontier, SearchOrder, Step, first_direction};
pub use types::{Direction, Point};
