use std::collections::BinaryHeap;

use gridnav_core::Point;

use crate::PathFinder;
use crate::finder::{CostedCell, FrontierRef, UNREACHABLE};
use crate::traits::WeightedGrid;

impl PathFinder {
    /// Compute a multi-source Dijkstra distance map over walkable cells.
    ///
    /// Every source starts at cost 0. Expansion stops once the cumulative
    /// cost would exceed `max_cost`. Returns all reached cells with their
    /// exact costs; [`dijkstra_at`](PathFinder::dijkstra_at) queries the
    /// map afterwards. As with A*, sources themselves are not required to
    /// be walkable.
    pub fn dijkstra_map<G: WeightedGrid>(
        &mut self,
        grid: &G,
        sources: &[Point],
        max_cost: i32,
    ) -> &[CostedCell] {
        // Reset the flat cost map.
        for v in self.dist_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.dist_results.clear();

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                let n = &mut self.nodes[si];
                n.g = 0;
                n.h = 0;
                n.parent = usize::MAX;
                n.generation = cur_gen;
                n.open = true;
                open.push(FrontierRef { idx: si, f: 0, h: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            let cp = self.point(ci);
            self.dist_map[ci] = current_g;
            self.dist_results.push(CostedCell {
                pos: cp,
                cost: current_g,
            });

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !grid.walkable(np) {
                    continue;
                }
                let tentative = current_g + grid.step_cost(cp, np);
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.h = 0;
                n.parent = ci;
                n.open = true;
                open.push(FrontierRef {
                    idx: ni,
                    f: tentative,
                    h: 0,
                });
            }
        }

        self.nbuf = nbuf;
        &self.dist_results
    }

    /// Query the cost at `p` in the last computed Dijkstra map.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached.
    pub fn dijkstra_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist_map[i],
            None => UNREACHABLE,
        }
    }
}
