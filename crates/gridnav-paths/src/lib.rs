//! Shortest-path search on uniform 2D grids.
//!
//! This crate answers "what is the walkable route from A to B" on a grid
//! whose cells may be blocked:
//!
//! - **A\*** shortest-path search ([`PathFinder::find_path`]) with the
//!   integer octile metric (10 per orthogonal step, 14 per diagonal step)
//! - **Dijkstra** multi-source distance maps ([`PathFinder::dijkstra_map`])
//!
//! All queries go through [`PathFinder`], which owns the per-search scratch
//! state (costs, parent links, the frontier) so the grid itself is never
//! mutated: a grid snapshot can be shared by several finders, and repeated
//! queries reuse the finder's buffers instead of reallocating.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`GridView`] | neighbor + walkability queries |
//! | [`WeightedGrid`] : [`GridView`] | Dijkstra |
//! | [`AstarGrid`] : [`WeightedGrid`] | A* |
//!
//! [`gridnav_core::WalkGrid`] implements all three with 8-way movement and
//! octile costs.

mod astar;
mod dijkstra;
mod distance;
mod finder;
mod traits;

pub use distance::{chebyshev, manhattan, octile};
pub use finder::{CostedCell, PathFinder, UNREACHABLE};
pub use traits::{AstarGrid, GridView, WeightedGrid};
