//! Search error taxonomy.
//!
//! "No path" is not an error: an exhausted frontier is a normal outcome and
//! surfaces as `Ok(None)` from the search.

use gridpath_core::CellId;

/// Failure modes of a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// An endpoint id does not exist in the grid or refers to an unwalkable
    /// cell. Rejected before the search starts.
    #[error("invalid endpoint: cell {0} is unknown or unwalkable")]
    InvalidEndpoint(CellId),

    /// The parent-chain walk during reconstruction exceeded the grid's cell
    /// count. Indicates a logic defect in the search, never a property of
    /// the input.
    #[error("parent chain exceeded the grid's cell count")]
    ParentChainCycle,
}
