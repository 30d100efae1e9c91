//! Edit events delivered to the session.

use gridpath_core::CellId;

/// A discrete edit event, already mapped to a cell and deduplicated by the
/// input layer (mouse handling and hit testing happen outside this crate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditMsg {
    /// The user painted or erased an obstacle on a cell.
    ObstacleToggled(CellId),
    /// The user picked the route's start cell.
    StartSelected(CellId),
    /// The user picked the route's target cell.
    TargetSelected(CellId),
    /// Reset: erase all obstacles and drop both endpoint selections.
    Clear,
}
