pub mod board;
pub mod words;

pub use board::{LayoutDto, LayoutParams, LayoutResponse, PlacementDto};
pub use words::{CheckWordParams, CheckWordResponse};
