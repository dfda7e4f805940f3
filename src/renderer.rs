// src/renderer.rs

//! This module defines the `SpiralRenderer`.
//!
//! The renderer owns the cell grid. It drives a point source (normally a
//! [`Spiral`]) through the recentering transform, marks every accepted cell,
//! and stops the walk at the first point that falls outside the grid's
//! interior. Afterwards it serializes the grid as text, one line per
//! first-dimension index.

use crate::config::{Config, SpiralConfig};
use crate::glyph::glyph_for;
use crate::grid::Grid;
use crate::point::{ContinuousPoint, GridPoint};
use crate::spiral::Spiral;

use anyhow::{Context, Result};
use log::{debug, trace};
use std::io::Write;

/// Outcome of a fill pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    /// Number of points that were written into the grid.
    pub accepted: usize,
    /// The first point that failed the bounds check and ended the walk.
    /// `None` only if the point source ran dry first.
    pub stopped_at: Option<GridPoint>,
}

/// Draws a spiral into a grid and prints it.
pub struct SpiralRenderer {
    grid: Grid,
    spiral: SpiralConfig,
    reversed: bool,
}

impl SpiralRenderer {
    /// Creates a renderer with an all-`Empty` grid sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.grid.width, config.grid.height),
            spiral: config.spiral,
            reversed: config.render.reversed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Swaps the glyph mapping used by `render`. Grid contents are untouched.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Maps `point` onto the grid and fills its cell if it lies strictly
    /// inside the grid frame. Returns whether the point was accepted.
    pub fn mark(&mut self, point: ContinuousPoint) -> bool {
        let (width, height) = self.grid.dimensions();
        let target = point.to_grid(width, height);
        if !target.is_within(width, height) {
            return false;
        }
        let Some((x, y)) = target.as_index() else {
            return false;
        };
        trace!("SpiralRenderer: filling ({}, {})", x, y);
        self.grid.fill(x, y)
    }

    /// Feeds `points` through `mark` until the first rejected point.
    ///
    /// The walk does not skip points that fall outside; the first one ends it,
    /// so the drawn shape is always a prefix of the curve.
    pub fn fill<I>(&mut self, points: I) -> FillReport
    where
        I: IntoIterator<Item = ContinuousPoint>,
    {
        let (width, height) = self.grid.dimensions();
        let mut accepted = 0;
        for point in points {
            if !self.mark(point) {
                let stopped_at = point.to_grid(width, height);
                debug!(
                    "SpiralRenderer: walk left the grid at {:?} after {} points",
                    stopped_at, accepted
                );
                return FillReport {
                    accepted,
                    stopped_at: Some(stopped_at),
                };
            }
            accepted += 1;
        }
        debug!("SpiralRenderer: point source exhausted after {} points", accepted);
        FillReport {
            accepted,
            stopped_at: None,
        }
    }

    /// Walks the configured spiral from the given start angle and radius.
    pub fn calculate(&mut self, start_angle: f64, start_radius: f64) -> FillReport {
        let spiral = Spiral::starting_at(&self.spiral, start_angle, start_radius);
        self.fill(spiral)
    }

    /// Walks the configured spiral from its configured start.
    pub fn fill_from_config(&mut self) -> FillReport {
        self.calculate(self.spiral.start_angle, self.spiral.start_radius)
    }

    /// Writes the grid to `out`: one line per first-dimension index, cells
    /// concatenated without separators, each line ending in `\n`.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let (_, height) = self.grid.dimensions();
        let mut line = String::with_capacity(height + 1);
        for (x, row) in self.grid.rows().enumerate() {
            line.clear();
            line.extend(row.iter().map(|&cell| glyph_for(cell, self.reversed)));
            line.push('\n');
            out.write_all(line.as_bytes())
                .with_context(|| format!("Failed to write grid line {}", x))?;
        }
        out.flush().context("Failed to flush rendered grid")?;
        Ok(())
    }

    /// Serializes the grid into a `String`, exactly as `render` writes it.
    pub fn to_text(&self) -> String {
        let (width, height) = self.grid.dimensions();
        let mut text = String::with_capacity(width * (height + 1));
        for row in self.grid.rows() {
            text.extend(row.iter().map(|&cell| glyph_for(cell, self.reversed)));
            text.push('\n');
        }
        text
    }
}
