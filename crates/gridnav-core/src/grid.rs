//! A walkability grid with world-coordinate mapping.
//!
//! [`WalkGrid`] is the map snapshot a search runs against: one boolean per
//! cell (walkable or blocked) over a rectangular [`Range`], plus the
//! continuous-to-cell conversions callers need when translating clicks or
//! agent positions into grid cells.

use crate::geom::{Point, Range};

/// Per-cell walkability over a rectangular grid.
///
/// World coordinates are anchored at the grid's `min` corner: cell
/// `(min.x, min.y)` covers the world square `[0, cell_size) × [0, cell_size)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkGrid {
    rng: Range,
    width: usize,
    cells: Vec<bool>,
    cell_size: f32,
}

impl WalkGrid {
    /// Create a `width` × `height` grid with every cell walkable.
    ///
    /// `cell_size` is the world-space edge length of one cell and must be
    /// positive.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self::with_range(Range::new(0, 0, width, height), cell_size)
    }

    /// Create an all-walkable grid over an arbitrary range.
    pub fn with_range(rng: Range, cell_size: f32) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            cells: vec![true; rng.len()],
            cell_size,
        }
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// World-space edge length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether `p` is a walkable cell. Out-of-range points are not walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Mark a single cell walkable or blocked. Out-of-range points are
    /// ignored.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = walkable;
        }
    }

    /// Repaint the whole grid from a predicate (true = walkable).
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> bool) {
        for p in self.rng.iter() {
            if let Some(i) = self.idx(p) {
                self.cells[i] = f(p);
            }
        }
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    /// The cell owning a continuous world coordinate.
    ///
    /// Points outside the grid's world extent are clamped to the nearest
    /// cell, so every input maps to a valid cell. The out-of-bounds policy
    /// lives here, not in the search.
    pub fn cell_from_world(&self, wx: f32, wy: f32) -> Point {
        let extent_x = self.rng.width() as f32 * self.cell_size;
        let extent_y = self.rng.height() as f32 * self.cell_size;
        let px = (wx / extent_x).clamp(0.0, 1.0);
        let py = (wy / extent_y).clamp(0.0, 1.0);
        let x = ((self.rng.width() - 1) as f32 * px).round() as i32;
        let y = ((self.rng.height() - 1) as f32 * py).round() as i32;
        Point::new(self.rng.min.x + x, self.rng.min.y + y)
    }

    /// World coordinate of the center of cell `p`.
    pub fn world_center(&self, p: Point) -> (f32, f32) {
        (
            ((p.x - self.rng.min.x) as f32 + 0.5) * self.cell_size,
            ((p.y - self.rng.min.y) as f32 + 0.5) * self.cell_size,
        )
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn walkgrid_round_trip() {
        let mut g = WalkGrid::new(3, 3, 1.5);
        g.set_walkable(Point::new(1, 1), false);
        let json = serde_json::to_string(&g).unwrap();
        let back: WalkGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
