mod board;
mod element;

pub use board::{Board, Bomb};
pub use element::Element;
