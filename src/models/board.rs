//! Board model for word placement.
//!
//! The grid is rows x cols cells in a flat row-major vector. A cell is either
//! empty or holds one letter plus the indices of every placement covering it
//! (crossing words share a cell only when their letters agree).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// Per-letter step as (row delta, col delta).
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

/// One word's realized position on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The cells this placement covers, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        self.word
            .chars()
            .enumerate()
            .map(move |(i, letter)| (row + i * dr, col + i * dc, letter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    /// Indices into the layout's placement list, in placement order.
    pub words: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The occupied cell at (row, col), or None when empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col)
            .and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col).map(|cell| cell.letter)
    }

    /// Write a letter for the given placement index. Crossing an occupied
    /// cell appends the placement index; the caller must have verified that
    /// the letters agree. Returns false when (row, col) is out of bounds.
    pub fn place(&mut self, row: usize, col: usize, letter: char, placement: usize) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                match &mut self.cells[idx] {
                    Some(cell) => {
                        debug_assert_eq!(cell.letter, letter);
                        cell.words.push(placement);
                    }
                    slot => {
                        *slot = Some(Cell {
                            letter,
                            words: vec![placement],
                        });
                    }
                }
                true
            }
            None => false,
        }
    }
}

/// Full board state plus all placements for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// Normalized words that could not be placed, in input order.
    pub unplaced: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_cells_follow_orientation() {
        let across = Placement {
            word: "CAT".to_string(),
            row: 7,
            col: 6,
            orientation: Orientation::Across,
        };
        let cells: Vec<_> = across.cells().collect();
        assert_eq!(cells, vec![(7, 6, 'C'), (7, 7, 'A'), (7, 8, 'T')]);

        let down = Placement {
            word: "AT".to_string(),
            row: 7,
            col: 7,
            orientation: Orientation::Down,
        };
        let cells: Vec<_> = down.cells().collect();
        assert_eq!(cells, vec![(7, 7, 'A'), (8, 7, 'T')]);
    }

    #[test]
    fn test_grid_place_and_lookup() {
        let mut grid = Grid::new(15, 15);
        assert!(grid.place(7, 6, 'C', 0));
        assert_eq!(grid.letter_at(7, 6), Some('C'));
        assert_eq!(grid.letter_at(7, 7), None);
        assert_eq!(grid.get(7, 6).unwrap().words, vec![0]);
    }

    #[test]
    fn test_grid_crossing_records_both_words() {
        let mut grid = Grid::new(15, 15);
        grid.place(7, 7, 'A', 0);
        grid.place(7, 7, 'A', 1);
        assert_eq!(grid.get(7, 7).unwrap().words, vec![0, 1]);
    }

    #[test]
    fn test_grid_out_of_bounds() {
        let mut grid = Grid::new(5, 5);
        assert!(!grid.place(5, 0, 'X', 0));
        assert!(grid.letter_at(9, 9).is_none());
    }
}
