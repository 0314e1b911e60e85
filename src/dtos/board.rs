use crate::models::{Layout, Orientation, Placement};
use serde::{Deserialize, Serialize};

/// Character standing in for an empty cell in the serialized grid rows.
const EMPTY_CELL: char = '.';

#[derive(Debug, Deserialize)]
pub struct LayoutParams {
    /// Repeated query parameter: words=FIRST&words=SECOND&...
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: LayoutDto,
}

#[derive(Debug, Serialize)]
pub struct LayoutDto {
    pub rows: usize,
    pub cols: usize,
    /// One string per grid row; placed letters with '.' for empty cells.
    pub grid: Vec<String>,
    pub placements: Vec<PlacementDto>,
    pub unplaced: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PlacementDto {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl From<&Placement> for PlacementDto {
    fn from(placement: &Placement) -> Self {
        Self {
            word: placement.word.clone(),
            row: placement.row,
            col: placement.col,
            orientation: placement.orientation,
        }
    }
}

impl From<&Layout> for LayoutDto {
    fn from(layout: &Layout) -> Self {
        let grid = (0..layout.grid.rows())
            .map(|row| {
                (0..layout.grid.cols())
                    .map(|col| layout.grid.letter_at(row, col).unwrap_or(EMPTY_CELL))
                    .collect()
            })
            .collect();

        Self {
            rows: layout.grid.rows(),
            cols: layout.grid.cols(),
            grid,
            placements: layout.placements.iter().map(PlacementDto::from).collect(),
            unplaced: layout.unplaced.clone(),
        }
    }
}
