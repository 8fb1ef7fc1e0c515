use gridnav_core::{Point, WalkGrid};

use crate::distance::octile;

/// Grid geometry as the search sees it: walkability and adjacency.
///
/// `neighbors` enumerates adjacency only; it must not filter by
/// walkability. The search applies the walkability rule itself, which also
/// lets a search start on a blocked cell and still path out of it.
pub trait GridView {
    /// Whether `p` is a cell a path may pass through.
    fn walkable(&self, p: Point) -> bool;

    /// Append the in-bounds cells adjacent to `p` (up to 8) into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Grid with weighted (positive-cost) moves between adjacent cells.
pub trait WeightedGrid: GridView {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn step_cost(&self, from: Point, to: Point) -> i32;
}

/// Grid with an admissible distance estimate, enabling A*.
pub trait AstarGrid: WeightedGrid {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

// ---------------------------------------------------------------------------
// WalkGrid: 8-way movement with octile costs
// ---------------------------------------------------------------------------

impl GridView for WalkGrid {
    fn walkable(&self, p: Point) -> bool {
        self.is_walkable(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let rng = self.range();
        for n in p.neighbors_8() {
            if rng.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedGrid for WalkGrid {
    fn step_cost(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

impl AstarGrid for WalkGrid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkgrid_neighbors_exclude_out_of_bounds() {
        let g = WalkGrid::new(3, 3, 1.0);
        let mut buf = Vec::new();

        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);

        buf.clear();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);

        buf.clear();
        g.neighbors(Point::new(1, 0), &mut buf);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn walkgrid_neighbors_keep_blocked_cells() {
        // Walkability filtering belongs to the search, not adjacency.
        let mut g = WalkGrid::new(3, 3, 1.0);
        g.set_walkable(Point::new(1, 0), false);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert!(buf.contains(&Point::new(1, 0)));
    }

    #[test]
    fn walkgrid_costs_are_octile() {
        let g = WalkGrid::new(3, 3, 1.0);
        let c = Point::new(1, 1);
        assert_eq!(g.step_cost(c, Point::new(2, 1)), 10);
        assert_eq!(g.step_cost(c, Point::new(2, 2)), 14);
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(2, 1)), 24);
    }
}
