pub mod app;
pub mod board;
pub mod metrics;
pub mod words;

pub use app::{health_check, index};
pub use board::{scrabble_board_image, scrabble_layout};
pub use metrics::metrics;
pub use words::check_word;
