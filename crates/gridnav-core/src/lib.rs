//! **gridnav-core** — foundational types for grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! walkability grid ([`WalkGrid`]) that the `gridnav-paths` search engine
//! operates on.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::WalkGrid;
