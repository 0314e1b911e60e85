//! Layout planner: places an ordered list of words onto a bounded grid,
//! crossword style.
//!
//! Words are processed in input order. The first word anchors the board at
//! the center; every later word must cross an already-placed word at a cell
//! where both letters agree. Candidate positions are scanned in a fixed
//! order and the first valid one wins, so identical input always yields an
//! identical layout.
//!
//! Placement rules, in full:
//! - every covered cell stays inside the grid;
//! - a covered cell is either empty or already holds the same letter;
//! - at least one covered cell is newly written (a word may not merely
//!   overlay letters that are all on the board, which also rejects exact
//!   duplicates);
//! - the cells hugging the word's two ends along its axis are empty, so the
//!   word never extends an existing run of letters;
//! - every newly written cell has empty perpendicular neighbors, so words
//!   never run directly alongside each other; contact is only legal at a
//!   crossing.
//!
//! Words that fail every candidate are reported as unplaced; one unplaceable
//! word never aborts the rest of the request.

use crate::config::BoardConfig;
use crate::models::{Grid, Layout, Orientation, Placement};
use crate::services::lexicon::normalize;

pub struct LayoutPlanner {
    rows: usize,
    cols: usize,
}

impl LayoutPlanner {
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            rows: board.rows,
            cols: board.cols,
        }
    }

    /// Place `words` in order and return the resulting layout. Pure: every
    /// call works on a fresh grid.
    pub fn plan(&self, words: &[String]) -> Layout {
        let mut grid = Grid::new(self.rows, self.cols);
        let mut placements: Vec<Placement> = Vec::new();
        let mut unplaced: Vec<String> = Vec::new();

        for raw in words {
            let word = normalize(raw);

            let candidate = if word.is_empty() {
                None
            } else if placements.is_empty() {
                self.anchor_placement(&word)
            } else {
                self.crossing_placement(&grid, &placements, &word)
            };

            match candidate {
                Some(placement) => {
                    let index = placements.len();
                    for (row, col, letter) in placement.cells() {
                        grid.place(row, col, letter, index);
                    }
                    placements.push(placement);
                }
                None => unplaced.push(word),
            }
        }

        Layout {
            grid,
            placements,
            unplaced,
        }
    }

    /// The first word goes through the board center: horizontally when it
    /// fits the width, vertically when it only fits the height.
    fn anchor_placement(&self, word: &str) -> Option<Placement> {
        let len = word.chars().count();
        if len <= self.cols {
            return Some(Placement {
                word: word.to_string(),
                row: self.rows / 2,
                col: (self.cols - len) / 2,
                orientation: Orientation::Across,
            });
        }
        if len <= self.rows {
            return Some(Placement {
                word: word.to_string(),
                row: (self.rows - len) / 2,
                col: self.cols / 2,
                orientation: Orientation::Down,
            });
        }
        None
    }

    /// First valid crossing in scan order: placed words in placement order,
    /// their cells in word order, the candidate's letters in word order,
    /// across before down.
    fn crossing_placement(
        &self,
        grid: &Grid,
        placements: &[Placement],
        word: &str,
    ) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();

        for placed in placements {
            for (row, col, board_letter) in placed.cells() {
                for (offset, &letter) in letters.iter().enumerate() {
                    if letter != board_letter {
                        continue;
                    }
                    for orientation in [Orientation::Across, Orientation::Down] {
                        if let Some(candidate) =
                            self.candidate_at(word, letters.len(), row, col, offset, orientation)
                        {
                            if self.fits(grid, &candidate) {
                                return Some(candidate);
                            }
                        }
                    }
                }
            }
        }

        None
    }

    /// Position `word` so that its letter at `offset` lands on the crossing
    /// cell; None when the span would leave the grid.
    fn candidate_at(
        &self,
        word: &str,
        len: usize,
        cross_row: usize,
        cross_col: usize,
        offset: usize,
        orientation: Orientation,
    ) -> Option<Placement> {
        let (row, col) = match orientation {
            Orientation::Across => {
                let col = cross_col.checked_sub(offset)?;
                if col + len > self.cols {
                    return None;
                }
                (cross_row, col)
            }
            Orientation::Down => {
                let row = cross_row.checked_sub(offset)?;
                if row + len > self.rows {
                    return None;
                }
                (row, cross_col)
            }
        };

        Some(Placement {
            word: word.to_string(),
            row,
            col,
            orientation,
        })
    }

    /// Check a candidate (already known to be in bounds) against the grid.
    fn fits(&self, grid: &Grid, candidate: &Placement) -> bool {
        let len = candidate.len() as isize;
        let (dr, dc) = candidate.orientation.step();
        let (dr, dc) = (dr as isize, dc as isize);
        let (row, col) = (candidate.row as isize, candidate.col as isize);

        // A neighbor letter at either end would merge the word into a longer run.
        if occupied(grid, row - dr, col - dc) || occupied(grid, row + dr * len, col + dc * len) {
            return false;
        }

        let mut wrote_new = false;
        for (r, c, letter) in candidate.cells() {
            match grid.letter_at(r, c) {
                Some(existing) if existing == letter => continue,
                Some(_) => return false,
                None => {
                    wrote_new = true;
                    let (r, c) = (r as isize, c as isize);
                    // Perpendicular contact is only legal at a crossing.
                    if occupied(grid, r - dc, c - dr) || occupied(grid, r + dc, c + dr) {
                        return false;
                    }
                }
            }
        }

        // Pure overlays contribute nothing and are rejected.
        wrote_new
    }
}

fn occupied(grid: &Grid, row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && grid.letter_at(row as usize, col as usize).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> LayoutPlanner {
        LayoutPlanner::new(&BoardConfig {
            rows: 15,
            cols: 15,
            cell_size: 32,
        })
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_first_word_centered_across() {
        let layout = planner().plan(&words(&["CAT"]));
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(
            layout.placements[0],
            Placement {
                word: "CAT".to_string(),
                row: 7,
                col: 6,
                orientation: Orientation::Across,
            }
        );
        assert!(layout.unplaced.is_empty());
    }

    #[test]
    fn test_first_word_falls_back_to_down() {
        let tall = LayoutPlanner::new(&BoardConfig {
            rows: 20,
            cols: 10,
            cell_size: 32,
        });
        let layout = tall.plan(&words(&["ABRACADABRAS"]));
        assert_eq!(layout.placements.len(), 1);
        let placement = &layout.placements[0];
        assert_eq!(placement.orientation, Orientation::Down);
        assert_eq!(placement.row, 4);
        assert_eq!(placement.col, 5);
    }

    #[test]
    fn test_word_longer_than_board_unplaced() {
        let layout = planner().plan(&words(&["AAAAAAAAAAAAAAAA", "CAT"]));
        assert_eq!(layout.unplaced, vec!["AAAAAAAAAAAAAAAA".to_string()]);
        // The next word still anchors the board.
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].word, "CAT");
    }

    #[test]
    fn test_crossing_at_shared_letter() {
        let layout = planner().plan(&words(&["CAT", "AT"]));
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(
            layout.placements[1],
            Placement {
                word: "AT".to_string(),
                row: 7,
                col: 7,
                orientation: Orientation::Down,
            }
        );
        assert!(layout.unplaced.is_empty());
    }

    #[test]
    fn test_placed_letters_match_grid() {
        let layout = planner().plan(&words(&["HELLO", "WORLD", "LOW"]));
        assert!(layout.placements.len() >= 2);
        for placement in &layout.placements {
            for (row, col, letter) in placement.cells() {
                assert_eq!(layout.grid.letter_at(row, col), Some(letter));
            }
        }
    }

    #[test]
    fn test_crossings_record_every_covering_word() {
        let layout = planner().plan(&words(&["CAT", "AT"]));
        // The shared A cell belongs to both placements.
        let cell = layout.grid.get(7, 7).unwrap();
        assert_eq!(cell.words, vec![0, 1]);
    }

    #[test]
    fn test_no_shared_letter_unplaced() {
        let layout = planner().plan(&words(&["CAT", "XYZ"]));
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.unplaced, vec!["XYZ".to_string()]);
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let layout = planner().plan(&words(&["CAT", "CAT"]));
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.unplaced, vec!["CAT".to_string()]);
    }

    #[test]
    fn test_sub_word_overlay_rejected() {
        // AT overlays the tail of CAT without contributing a letter; the
        // only legal AT is a fresh crossing.
        let layout = planner().plan(&words(&["CAT", "AT"]));
        assert_eq!(layout.placements[1].orientation, Orientation::Down);
    }

    #[test]
    fn test_parallel_contact_rejected() {
        // COB hangs off the C; ON would have to sit flush under CAT and is
        // refused even though its crossing letter agrees.
        let layout = planner().plan(&words(&["CAT", "COB", "ON"]));
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.unplaced, vec!["ON".to_string()]);
    }

    #[test]
    fn test_empty_and_blank_words_unplaced() {
        let layout = planner().plan(&words(&["", "   ", "CAT"]));
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.unplaced, vec!["".to_string(), "".to_string()]);
    }

    #[test]
    fn test_input_normalized_before_placement() {
        let layout = planner().plan(&words(&[" cat ", "at"]));
        assert_eq!(layout.placements[0].word, "CAT");
        assert_eq!(layout.placements[1].word, "AT");
    }

    #[test]
    fn test_plan_is_deterministic() {
        let input = words(&["HELLO", "WORLD", "LOW", "DRIP", "CAT"]);
        let first = planner().plan(&input);
        let second = planner().plan(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_does_not_consult_lexicon() {
        // Placement is purely geometric; made-up words are fine.
        let layout = planner().plan(&words(&["ZZZZ"]));
        assert_eq!(layout.placements.len(), 1);
    }
}
