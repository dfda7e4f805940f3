// src/config.rs

//! Defines the configuration structures for `console-spiral`.
//!
//! The values here are the program's fixed constants: grid dimensions, the
//! spiral's step sizes and starting position, and the glyph reversal flag.
//! They are grouped into serde-derivable sections so the effective settings
//! can be dumped for diagnostics, but nothing is read from disk.

use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default configuration, shared read-only by the whole program.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration of the spiral renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Spiral walk parameters.
    pub spiral: SpiralConfig,
    /// Serialization settings.
    pub render: RenderConfig,
}

impl Config {
    /// Checks that the settings describe a walk that can run and terminate.
    ///
    /// The shipped defaults always pass.
    pub fn validate(&self) -> Result<()> {
        // The bounds check is strict on both sides, so anything narrower than
        // three cells has no interior to draw into.
        ensure!(
            self.grid.width >= 3 && self.grid.height >= 3,
            "grid must be at least 3x3, got {}x{}",
            self.grid.width,
            self.grid.height
        );

        let s = &self.spiral;
        ensure!(
            [s.angle_step, s.radius_step, s.start_angle, s.start_radius]
                .iter()
                .all(|v| v.is_finite()),
            "spiral parameters must be finite: {:?}",
            s
        );
        ensure!(
            s.start_radius >= 0.0,
            "start radius must be non-negative, got {}",
            s.start_radius
        );
        ensure!(
            s.radius_step > 0.0,
            "radius step must be positive or the walk never leaves the grid, got {}",
            s.radius_step
        );
        Ok(())
    }
}

// --- Grid Configuration ---

/// Dimensions of the cell grid. The first dimension is the row count of the
/// printed output, the second its column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 90,
            height: 140,
        }
    }
}

// --- Spiral Configuration ---

/// Parameters of the Archimedean walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Angle added per step, in radians.
    pub angle_step: f64,
    /// Radius added per step, in continuous units.
    pub radius_step: f64,
    pub start_angle: f64,
    pub start_radius: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        SpiralConfig {
            angle_step: 0.009,
            radius_step: 0.02,
            start_angle: 0.0,
            start_radius: 0.0,
        }
    }
}

// --- Render Configuration ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Swap which glyph stands for filled and empty cells.
    pub reversed: bool,
}
