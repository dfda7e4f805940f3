// src/point.rs

//! Points on the spiral before and after mapping onto the grid.

/// A position on the parametric curve, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousPoint {
    pub x: f64,
    pub y: f64,
}

/// Integer grid coordinates. May lie outside the grid; see [`GridPoint::is_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl ContinuousPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Applies the recentering transform for a `width` x `height` grid.
    ///
    /// Each coordinate is rounded half away from zero, offset by the grid
    /// dimension and halved (floor), so the origin lands on
    /// `(width / 2, height / 2)`. Non-finite coordinates saturate, which
    /// always fails the bounds check.
    pub fn to_grid(self, width: usize, height: usize) -> GridPoint {
        GridPoint {
            x: recenter(self.x, width),
            y: recenter(self.y, height),
        }
    }
}

fn recenter(coord: f64, dimension: usize) -> i64 {
    ((coord.round() + dimension as f64) / 2.0).floor() as i64
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// True iff the point lies strictly inside the grid frame: after
    /// `(0, 0)` and before `(width - 1, height - 1)` under [`precedes`].
    /// The outermost ring of cells is therefore never accepted.
    pub fn is_within(self, width: usize, height: usize) -> bool {
        let origin = GridPoint::new(0, 0);
        let far_corner = GridPoint::new(width as i64 - 1, height as i64 - 1);
        precedes(origin, self) && precedes(self, far_corner)
    }

    /// Converts to `usize` indices. Only meaningful for points that passed
    /// [`GridPoint::is_within`].
    pub fn as_index(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.x).ok()?, usize::try_from(self.y).ok()?))
    }
}

/// Component-wise strict ordering: `a` precedes `b` only when both of its
/// coordinates are smaller. Not a total order; distinct points can be
/// mutually incomparable.
pub fn precedes(a: GridPoint, b: GridPoint) -> bool {
    a.x < b.x && a.y < b.y
}
