//! **gridpath-core** — Grid editor pathfinding core (grid and geometry types).
//!
//! This crate provides the foundational types shared across the *gridpath*
//! workspace: pixel-space geometry for hit testing, grid-step coordinates
//! for movement math, and the [`Grid`] of cells with its walkability map.

pub mod geom;
pub mod grid;

pub use geom::{Coord, Point, Rect};
pub use grid::{Cell, CellId, Grid};
