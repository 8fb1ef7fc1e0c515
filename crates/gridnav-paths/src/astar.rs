use std::collections::BinaryHeap;

use gridnav_core::Point;
use log::{debug, trace};

use crate::PathFinder;
use crate::finder::FrontierRef;
use crate::traits::AstarGrid;

impl PathFinder {
    /// Compute the cheapest walkable route from `start` to `goal` using A*.
    ///
    /// Returns the route in **goal-to-start order with `start` excluded**;
    /// callers that want to walk it forward reverse it. `Some(vec![])` when
    /// `start == goal`. Returns `None` when either endpoint is outside the
    /// finder's range, when the goal cell is not walkable, when no route
    /// exists, or when the expansion bound
    /// ([`set_max_expansions`](PathFinder::set_max_expansions)) is hit.
    ///
    /// The start cell's walkability is deliberately not checked, so a
    /// search can leave a blocked cell.
    pub fn find_path<G: AstarGrid>(
        &mut self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(start)?;
        let goal_idx = self.idx(goal)?;

        if !grid.walkable(goal) {
            return None;
        }
        if start_idx == goal_idx {
            return Some(Vec::new());
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = grid.estimate(start, goal);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
        let start_h = self.nodes[start_idx].h;
        open.push(FrontierRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries superseded by a cheaper push.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                found = true;
                break;
            }

            if let Some(limit) = self.max_expansions {
                if expanded >= limit {
                    debug!("find_path {start} -> {goal}: stopped at expansion bound {limit}");
                    break;
                }
            }
            expanded += 1;

            // Finalize: cheapest cost to this cell is now known.
            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            grid.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !grid.walkable(np) {
                    continue;
                }

                let tentative = current_g + grid.step_cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Already finalized this search.
                        continue;
                    }
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.h = grid.estimate(np, goal);
                n.parent = ci;
                n.open = true;

                open.push(FrontierRef {
                    idx: ni,
                    f: tentative + n.h,
                    h: n.h,
                });
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        let path = self.reconstruct(start_idx, goal_idx)?;
        trace!(
            "find_path {start} -> {goal}: cost {}, {} cells, {expanded} expanded",
            self.nodes[goal_idx].g,
            path.len(),
        );
        Some(path)
    }

    /// Walk parent links from the goal back to the start, emitting the
    /// route in goal-to-start order with the start excluded.
    ///
    /// The walk is bounded by the cell count; a longer chain means a broken
    /// parent link, reported as `None` rather than looping forever.
    fn reconstruct(&self, start_idx: usize, goal_idx: usize) -> Option<Vec<Point>> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            if ci == usize::MAX || path.len() >= self.nodes.len() {
                return None;
            }
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        Some(path)
    }
}
