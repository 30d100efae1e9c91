//! Octile movement costs on grid-step coordinates.

use gridpath_core::Coord;

/// Cost of one orthogonal step.
pub const ORTHO_COST: i32 = 10;

/// Cost of one diagonal step (≈ `ORTHO_COST`·√2).
pub const DIAG_COST: i32 = 14;

/// Octile distance between two grid-step coordinates.
///
/// This is simultaneously the step cost between adjacent cells and the A*
/// heuristic: for 8-connected movement the octile distance equals the true
/// cost of an unobstructed route, so the heuristic is admissible and
/// consistent.
#[inline]
pub fn octile(a: Coord, b: Coord) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAG_COST * lo + ORTHO_COST * (hi - lo)
}
