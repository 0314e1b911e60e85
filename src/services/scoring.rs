use crate::services::lexicon::{normalize, Lexicon};

/// Tile point values indexed by offset from 'A'.
const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Point value of a single normalized letter; anything outside A-Z scores 0.
pub fn letter_score(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        LETTER_SCORES[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Score of `word`: 0 unless the word is in the lexicon, otherwise the sum
/// of its letter values.
pub fn score_word(lexicon: &Lexicon, word: &str) -> u32 {
    if !lexicon.contains(word) {
        return 0;
    }
    normalize(word).chars().map(letter_score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["CAT", "AT", "QUIZ", "JAZZ"])
    }

    #[test]
    fn test_score_known_word() {
        // C=3, A=1, T=1
        assert_eq!(score_word(&lexicon(), "cat"), 5);
        // A=1, T=1
        assert_eq!(score_word(&lexicon(), "AT"), 2);
        // Q=10, U=1, I=1, Z=10
        assert_eq!(score_word(&lexicon(), "quiz"), 22);
        // J=8, A=1, Z=10, Z=10
        assert_eq!(score_word(&lexicon(), "Jazz"), 29);
    }

    #[test]
    fn test_unknown_word_scores_zero() {
        assert_eq!(score_word(&lexicon(), "dog"), 0);
        assert_eq!(score_word(&lexicon(), ""), 0);
    }

    #[test]
    fn test_score_ignores_surrounding_whitespace() {
        assert_eq!(score_word(&lexicon(), " cat "), 5);
    }

    #[test]
    fn test_letter_score_table() {
        assert_eq!(letter_score('A'), 1);
        assert_eq!(letter_score('D'), 2);
        assert_eq!(letter_score('K'), 5);
        assert_eq!(letter_score('Q'), 10);
        assert_eq!(letter_score('Z'), 10);
        // Not normalized or not a letter: contributes nothing.
        assert_eq!(letter_score('a'), 0);
        assert_eq!(letter_score('-'), 0);
        assert_eq!(letter_score('7'), 0);
    }
}
