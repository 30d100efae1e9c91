//! **gridpath-editor** — the editor-facing session layer.
//!
//! Sits between the rendering/input shell and the pathfinding core:
//! consumes discrete [`EditMsg`] events (obstacle painting, endpoint
//! selection, clear) and serves route plans memoized by the grid's obstacle
//! version, so planning can be polled every frame without redundant
//! searches.

pub mod msg;
pub mod session;

pub use msg::EditMsg;
pub use session::{EditorSession, PlanOutcome};
