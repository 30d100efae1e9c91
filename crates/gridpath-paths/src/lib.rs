//! Pathfinding for the gridpath editor.
//!
//! This crate implements the editor's A* search over a
//! [`Grid`](gridpath_core::Grid):
//!
//! - [`octile`] — integer-scaled octile step cost and heuristic
//! - [`Neighbors`] — exact 8-connected adjacency
//! - [`PathFinder`] — reusable search state (node arena + scratch buffers)
//! - [`find_path`] — one-shot search
//!
//! Per-search cost/parent bindings are held in the finder's arena, keyed by
//! cell id and stamped with a generation counter, so repeated queries incur
//! no allocations after warm-up and the grid's cells are never aliased by
//! search state.

mod astar;
mod cost;
mod error;
mod neighbors;
mod nodes;

pub use astar::find_path;
pub use cost::{DIAG_COST, ORTHO_COST, octile};
pub use error::PathError;
pub use neighbors::Neighbors;
pub use nodes::PathFinder;
