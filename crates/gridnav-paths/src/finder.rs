use gridnav_core::{Point, Range};

/// A cell with an associated cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostedCell {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel cost meaning "not reached" in Dijkstra maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

/// Search-local scratch state for one cell.
///
/// Lives in the finder's flat node array, never on the grid, so a shared
/// grid snapshot is read-only during a search. `generation` tags which
/// search last touched the node; anything from an older generation is
/// stale and treated as untouched.
#[derive(Clone)]
pub(crate) struct SearchNode {
    /// Cost of the cheapest known path from the start to this cell.
    pub(crate) g: i32,
    /// Heuristic estimate from this cell to the goal, computed when the
    /// cell is touched for the current search.
    pub(crate) h: i32,
    /// Flat index of the predecessor that produced `g`; `usize::MAX` for
    /// the start. Identity relation only, used for reconstruction.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// True while the node sits in the frontier; false once finalized.
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered so `BinaryHeap` (a max-heap) pops the lowest
/// total cost first, ties broken by the lowest heuristic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct FrontierRef {
    pub(crate) idx: usize,
    /// Total cost g + h at push time.
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Coordinator for shortest-path queries over a grid rectangle.
///
/// `PathFinder` owns all per-search state (node costs, parent links, the
/// frontier, Dijkstra maps), so the grid it searches is only ever borrowed
/// immutably: several finders may query the same grid concurrently, and
/// repeated queries on one finder reuse its buffers. State is invalidated
/// between searches by a generation counter rather than a full reset.
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    /// Upper bound on node expansions per `find_path` call; `None` means
    /// unbounded.
    pub(crate) max_expansions: Option<usize>,
    // Dijkstra caches
    pub(crate) dist_map: Vec<i32>,
    pub(crate) dist_results: Vec<CostedCell>,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![SearchNode::default(); len],
            generation: 0,
            max_expansions: None,
            dist_map: vec![UNREACHABLE; len],
            dist_results: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Bound the number of node expansions per search, or lift the bound
    /// with `None` (the default). A search that exceeds the bound stops and
    /// reports no path.
    pub fn set_max_expansions(&mut self, limit: Option<usize>) {
        self.max_expansions = limit;
    }

    /// Replace the underlying rectangle.
    ///
    /// If the new size fits within existing capacity, buffers are kept and
    /// the generation counter is bumped so stale entries are ignored.
    /// Otherwise buffers are reallocated. Either way the last Dijkstra map
    /// is invalidated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            // The flat Dijkstra map is indexed by the new geometry; old
            // entries would be read back against the wrong cells.
            for v in self.dist_map.iter_mut() {
                *v = UNREACHABLE;
            }
            self.dist_results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, SearchNode::default());
        self.generation = 0;

        self.dist_map.clear();
        self.dist_map.resize(new_len, UNREACHABLE);
        self.dist_results.clear();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_f_then_h() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(FrontierRef { idx: 0, f: 30, h: 10 });
        heap.push(FrontierRef { idx: 1, f: 20, h: 15 });
        heap.push(FrontierRef { idx: 2, f: 20, h: 5 });
        // Lowest f first; within equal f, lowest h first.
        assert_eq!(heap.pop().unwrap().idx, 2);
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }

    #[test]
    fn idx_point_round_trip() {
        let pf = PathFinder::new(Range::new(2, 3, 7, 9));
        for p in pf.range().iter() {
            let i = pf.idx(p).unwrap();
            assert_eq!(pf.point(i), p);
        }
        assert_eq!(pf.idx(Point::new(7, 3)), None);
        assert_eq!(pf.idx(Point::new(2, 2)), None);
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(Range::new(0, 0, 20, 20));
        let cap = pf.nodes.len(); // 400
        let gen_before = pf.generation;

        pf.set_range(Range::new(0, 0, 5, 5));
        assert_eq!(pf.range(), Range::new(0, 0, 5, 5));
        assert_eq!(pf.nodes.len(), cap);
        assert_eq!(pf.width, 5);
        // Generation bumped so stale entries are ignored.
        assert_eq!(pf.generation, gen_before.wrapping_add(1));
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut pf = PathFinder::new(Range::new(0, 0, 5, 5));
        assert_eq!(pf.nodes.len(), 25);

        pf.set_range(Range::new(0, 0, 20, 20));
        assert_eq!(pf.nodes.len(), 400);
        assert_eq!(pf.dist_map.len(), 400);
    }

    #[test]
    fn set_range_same_size_shifted_preserves() {
        let mut pf = PathFinder::new(Range::new(0, 0, 10, 10));
        let cap = pf.nodes.len();
        pf.set_range(Range::new(5, 5, 15, 15));
        assert_eq!(pf.nodes.len(), cap);
        assert_eq!(pf.range(), Range::new(5, 5, 15, 15));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn costed_cell_round_trip() {
        let cell = CostedCell {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&cell).unwrap();
        let back: CostedCell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
