// src/grid.rs

//! The cell grid the spiral is drawn into.
//!
//! Cells are addressed `[x][y]` with `0 <= x < width` and `0 <= y < height`.
//! When printed, each `x` becomes one line of output and `y` runs along it.

use std::ops::Index;

/// Status of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Filled,
    #[default]
    Empty,
}

/// A fixed-size grid of `CellState`s, created fully `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![vec![CellState::Empty; height]; width],
        }
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the state at `(x, y)`, or `None` if outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.cells.get(x).and_then(|row| row.get(y)).copied()
    }

    /// Marks `(x, y)` as filled. Out-of-range coordinates are ignored and
    /// reported by returning `false`.
    pub fn fill(&mut self, x: usize, y: usize) -> bool {
        match self.cells.get_mut(x).and_then(|row| row.get_mut(y)) {
            Some(cell) => {
                *cell = CellState::Filled;
                true
            }
            None => false,
        }
    }

    /// Iterates the grid one first-dimension index at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellState::Filled)
            .count()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellState;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[x][y]
    }
}
