//! Word-boundary scans for Ctrl-arrow navigation and word deletes.
//!
//! The delimiter is a single space; a word is a maximal run of non-space
//! characters. Both scans are total: out-of-range inputs clamp to the
//! buffer edges rather than erroring.

use crate::LineBuffer;

fn is_space(buf: &LineBuffer, index: usize) -> bool {
    buf.char_at(index) == Some(' ')
}

/// Index of the start of the previous word: skip any space run immediately
/// left of `index`, then walk left until the character to the left is a
/// space (or the buffer start). `previous_word_index(_, 0) == 0`.
pub fn previous_word_index(buf: &LineBuffer, index: usize) -> usize {
    let mut i = index.min(buf.len());
    while i > 0 && is_space(buf, i - 1) {
        i -= 1;
    }
    while i > 0 && !is_space(buf, i - 1) {
        i -= 1;
    }
    i
}

/// Index of the start of the next word: skip the remainder of the current
/// word, then any following space run. Returns `buf.len()` when no word
/// remains; `next_word_index(_, len) == len`.
pub fn next_word_index(buf: &LineBuffer, index: usize) -> usize {
    let len = buf.len();
    let mut i = index.min(len);
    while i < len && !is_space(buf, i) {
        i += 1;
    }
    while i < len && is_space(buf, i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(s: &str) -> LineBuffer {
        LineBuffer::from_str(s)
    }

    #[test]
    fn word_jumps_across_foo_bar() {
        let b = buf("foo bar");
        assert_eq!(previous_word_index(&b, 7), 4);
        assert_eq!(previous_word_index(&b, 4), 0);
        assert_eq!(next_word_index(&b, 0), 4);
        assert_eq!(next_word_index(&b, 4), 7);
    }

    #[test]
    fn edges_are_no_ops() {
        let b = buf("foo bar");
        assert_eq!(previous_word_index(&b, 0), 0);
        assert_eq!(next_word_index(&b, b.len()), b.len());
        let empty = buf("");
        assert_eq!(previous_word_index(&empty, 0), 0);
        assert_eq!(next_word_index(&empty, 0), 0);
    }

    #[test]
    fn multiple_spaces_are_one_gap() {
        let b = buf("a   bb   c");
        assert_eq!(next_word_index(&b, 0), 4);
        assert_eq!(next_word_index(&b, 4), 9);
        assert_eq!(previous_word_index(&b, 9), 4);
        assert_eq!(previous_word_index(&b, 4), 0);
    }

    #[test]
    fn mid_word_scans() {
        let b = buf("alpha beta");
        // From inside "beta": back to its start is not a stop; previous word
        // start is "beta"'s own start when spaces intervene behind.
        assert_eq!(previous_word_index(&b, 8), 6);
        assert_eq!(next_word_index(&b, 2), 6);
    }

    #[test]
    fn leading_and_trailing_spaces() {
        let b = buf("  hi  ");
        assert_eq!(previous_word_index(&b, 2), 0);
        assert_eq!(previous_word_index(&b, b.len()), 2);
        // From inside the leading gap the scan lands on the word start.
        assert_eq!(next_word_index(&b, 0), 2);
        assert_eq!(next_word_index(&b, 2), b.len());
    }

    #[test]
    fn out_of_range_input_clamps() {
        let b = buf("xy");
        assert_eq!(previous_word_index(&b, 99), 0);
        assert_eq!(next_word_index(&b, 99), 2);
    }
}
