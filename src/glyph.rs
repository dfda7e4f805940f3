// src/glyph.rs

//! Glyphs used when printing the grid.
//!
//! A cell's glyph depends on its `CellState` and on whether the render is
//! reversed. Reversal swaps which state gets which glyph; the glyph set
//! itself is always the two characters below.

use crate::grid::CellState;

/// Glyph of a filled cell in normal mode.
pub const FILLED_GLYPH: char = '*';
/// Glyph of an empty cell in normal mode.
pub const EMPTY_GLYPH: char = ' ';

// Indexed by [reversed][state].
const GLYPH_TABLE: [[char; 2]; 2] = [
    [FILLED_GLYPH, EMPTY_GLYPH],
    [EMPTY_GLYPH, FILLED_GLYPH],
];

/// Looks up the glyph for `state`.
pub fn glyph_for(state: CellState, reversed: bool) -> char {
    let column = match state {
        CellState::Filled => 0,
        CellState::Empty => 1,
    };
    GLYPH_TABLE[reversed as usize][column]
}

/// Maps one glyph to the other. Used to compare reversed and normal output.
pub fn swap_glyph(c: char) -> char {
    match c {
        FILLED_GLYPH => EMPTY_GLYPH,
        EMPTY_GLYPH => FILLED_GLYPH,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn normal_mode_glyphs() {
        assert_eq!(glyph_for(CellState::Filled, false), '*');
        assert_eq!(glyph_for(CellState::Empty, false), ' ');
    }

    #[test_log::test]
    fn reversed_mode_glyphs() {
        assert_eq!(glyph_for(CellState::Filled, true), ' ');
        assert_eq!(glyph_for(CellState::Empty, true), '*');
    }

    #[test_log::test]
    fn swap_leaves_other_characters_alone() {
        assert_eq!(swap_glyph('*'), ' ');
        assert_eq!(swap_glyph(' '), '*');
        assert_eq!(swap_glyph('\n'), '\n');
    }
}
