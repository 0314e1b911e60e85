pub mod board;

pub use board::{Cell, Grid, Layout, Orientation, Placement};
