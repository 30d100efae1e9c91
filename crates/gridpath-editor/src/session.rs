//! The [`EditorSession`]: edit-event handling and memoized replanning.
//!
//! Edits apply strictly between searches, so every search sees a consistent
//! walkability snapshot. Planning is memoized by a fingerprint of
//! `(start, target, obstacle version)`: a caller may invoke [`plan`] every
//! frame and the search only reruns when one of those actually changed.
//!
//! [`plan`]: EditorSession::plan

use gridpath_core::{CellId, Grid};
use gridpath_paths::{PathError, PathFinder};
use log::{debug, trace};

use crate::msg::EditMsg;

// ---------------------------------------------------------------------------
// PlanOutcome
// ---------------------------------------------------------------------------

/// The result of planning with the session's current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A route exists; ordered start→target, both endpoints included.
    Path(Vec<CellId>),
    /// Both endpoints are selected but obstacles separate them. A normal
    /// outcome; the renderer decides what (if anything) to draw.
    NoPath,
    /// Fewer than two endpoints are selected; nothing to search yet.
    Incomplete,
}

// ---------------------------------------------------------------------------
// EditorSession
// ---------------------------------------------------------------------------

/// Search-input fingerprint for plan memoization.
#[derive(Copy, Clone, PartialEq, Eq)]
struct Fingerprint {
    start: Option<CellId>,
    target: Option<CellId>,
    version: u64,
}

struct Memo {
    fingerprint: Fingerprint,
    outcome: PlanOutcome,
}

/// Owns the grid, the endpoint selection and the path finder, and applies
/// the editor's edit events.
pub struct EditorSession {
    grid: Grid,
    start: Option<CellId>,
    target: Option<CellId>,
    finder: PathFinder,
    memo: Option<Memo>,
}

impl EditorSession {
    /// Create a session around an existing grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            target: None,
            finder: PathFinder::new(),
            memo: None,
        }
    }

    /// Create a session with a fresh grid covering a `width` × `height`
    /// scene with square cells of `cell_size` pixels.
    pub fn with_scene(width: i32, height: i32, cell_size: i32) -> Self {
        Self::new(Grid::new(width, height, cell_size))
    }

    /// The session's grid. Hit testing for incoming mouse events goes
    /// through this (`session.grid().cell_at(point)`).
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The selected start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// The selected target cell, if any.
    #[inline]
    pub fn target(&self) -> Option<CellId> {
        self.target
    }

    /// Apply one edit event.
    ///
    /// Painting an obstacle over a selected endpoint drops that selection,
    /// so a later [`plan`](EditorSession::plan) never sees an unwalkable
    /// endpoint. Selecting an unknown or unwalkable cell is ignored.
    pub fn update(&mut self, msg: EditMsg) {
        match msg {
            EditMsg::ObstacleToggled(id) => {
                if !self.grid.contains_id(id) {
                    debug!("ignoring obstacle toggle on unknown cell {id}");
                    return;
                }
                let now_walkable = !self.grid.is_walkable(id);
                self.grid.set_walkable(id, now_walkable);
                trace!("cell {id} is now {}", if now_walkable { "walkable" } else { "blocked" });
                if !now_walkable {
                    if self.start == Some(id) {
                        debug!("obstacle painted over start cell {id}; selection dropped");
                        self.start = None;
                    }
                    if self.target == Some(id) {
                        debug!("obstacle painted over target cell {id}; selection dropped");
                        self.target = None;
                    }
                }
            }
            EditMsg::StartSelected(id) => {
                if self.grid.contains_id(id) && self.grid.is_walkable(id) {
                    self.start = Some(id);
                } else {
                    debug!("ignoring start selection on unknown or blocked cell {id}");
                }
            }
            EditMsg::TargetSelected(id) => {
                if self.grid.contains_id(id) && self.grid.is_walkable(id) {
                    self.target = Some(id);
                } else {
                    debug!("ignoring target selection on unknown or blocked cell {id}");
                }
            }
            EditMsg::Clear => {
                self.grid.clear_obstacles();
                self.start = None;
                self.target = None;
            }
        }
    }

    /// Plan a route with the current endpoints and obstacle state.
    ///
    /// Memoized: the search reruns only when the start, target or obstacle
    /// set changed since the previous call, so this is safe to invoke once
    /// per rendered frame.
    pub fn plan(&mut self) -> Result<PlanOutcome, PathError> {
        let fingerprint = Fingerprint {
            start: self.start,
            target: self.target,
            version: self.grid.version(),
        };
        if let Some(memo) = &self.memo {
            if memo.fingerprint == fingerprint {
                trace!("plan unchanged; serving memoized outcome");
                return Ok(memo.outcome.clone());
            }
        }

        let outcome = match (self.start, self.target) {
            (Some(start), Some(target)) => {
                debug!(
                    "replanning {start} -> {target} (grid v{})",
                    self.grid.version()
                );
                match self.finder.find_path(&self.grid, start, target)? {
                    Some(path) => PlanOutcome::Path(path),
                    None => PlanOutcome::NoPath,
                }
            }
            _ => PlanOutcome::Incomplete,
        };

        self.memo = Some(Memo {
            fingerprint,
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Coord;

    fn id(session: &EditorSession, x: i32, y: i32) -> CellId {
        session.grid().id_at(Coord::new(x, y)).unwrap()
    }

    fn session_10x10() -> EditorSession {
        EditorSession::with_scene(10, 10, 1)
    }

    #[test]
    fn plan_is_incomplete_until_both_endpoints_selected() {
        let mut s = session_10x10();
        assert_eq!(s.plan().unwrap(), PlanOutcome::Incomplete);

        let start = id(&s, 0, 0);
        s.update(EditMsg::StartSelected(start));
        assert_eq!(s.plan().unwrap(), PlanOutcome::Incomplete);

        let target = id(&s, 9, 9);
        s.update(EditMsg::TargetSelected(target));
        match s.plan().unwrap() {
            PlanOutcome::Path(path) => {
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&target));
                assert_eq!(path.len(), 10);
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn obstacles_reroute_the_plan() {
        let mut s = session_10x10();
        s.update(EditMsg::StartSelected(id(&s, 0, 0)));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        let open = s.plan().unwrap();

        for x in 0..10 {
            if x != 3 {
                let cell = id(&s, x, 5);
                s.update(EditMsg::ObstacleToggled(cell));
            }
        }
        let walled = s.plan().unwrap();
        assert_ne!(open, walled);
        match walled {
            PlanOutcome::Path(path) => assert!(path.contains(&id(&s, 3, 5))),
            other => panic!("expected a detour path, got {other:?}"),
        }
    }

    #[test]
    fn fully_separating_wall_yields_no_path() {
        let mut s = session_10x10();
        s.update(EditMsg::StartSelected(id(&s, 0, 0)));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        for x in 0..10 {
            let cell = id(&s, x, 5);
            s.update(EditMsg::ObstacleToggled(cell));
        }
        assert_eq!(s.plan().unwrap(), PlanOutcome::NoPath);
    }

    #[test]
    fn toggling_twice_restores_the_route() {
        let mut s = session_10x10();
        s.update(EditMsg::StartSelected(id(&s, 0, 0)));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        let before = s.plan().unwrap();

        let cell = id(&s, 4, 4);
        s.update(EditMsg::ObstacleToggled(cell));
        assert!(!s.grid().is_walkable(cell));
        s.update(EditMsg::ObstacleToggled(cell));
        assert!(s.grid().is_walkable(cell));

        assert_eq!(s.plan().unwrap(), before);
    }

    #[test]
    fn painting_over_an_endpoint_drops_the_selection() {
        let mut s = session_10x10();
        let start = id(&s, 0, 0);
        s.update(EditMsg::StartSelected(start));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        s.update(EditMsg::ObstacleToggled(start));
        assert_eq!(s.start(), None);
        assert_eq!(s.plan().unwrap(), PlanOutcome::Incomplete);
    }

    #[test]
    fn selecting_a_blocked_cell_is_ignored() {
        let mut s = session_10x10();
        let cell = id(&s, 4, 4);
        s.update(EditMsg::ObstacleToggled(cell));
        s.update(EditMsg::StartSelected(cell));
        assert_eq!(s.start(), None);
        s.update(EditMsg::StartSelected(CellId(10_000)));
        assert_eq!(s.start(), None);
    }

    #[test]
    fn clear_resets_obstacles_and_selection() {
        let mut s = session_10x10();
        s.update(EditMsg::StartSelected(id(&s, 0, 0)));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        let cell = id(&s, 5, 5);
        s.update(EditMsg::ObstacleToggled(cell));

        s.update(EditMsg::Clear);
        assert!(s.grid().is_walkable(cell));
        assert_eq!(s.start(), None);
        assert_eq!(s.target(), None);
        assert_eq!(s.plan().unwrap(), PlanOutcome::Incomplete);
    }

    #[test]
    fn plan_is_stable_across_repeated_calls() {
        let mut s = session_10x10();
        s.update(EditMsg::StartSelected(id(&s, 0, 0)));
        s.update(EditMsg::TargetSelected(id(&s, 9, 9)));
        let first = s.plan().unwrap();
        // No edits in between: served from the memo, identical outcome.
        let second = s.plan().unwrap();
        let third = s.plan().unwrap();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
