//! A* shortest-path search over a [`Grid`].

use std::collections::BinaryHeap;

use gridpath_core::{CellId, Grid};
use log::{debug, trace};

use crate::cost::octile;
use crate::error::PathError;
use crate::nodes::{NO_PARENT, OpenEntry, PathFinder};

impl PathFinder {
    /// Compute the least-cost walkable route from `start` to `target`.
    ///
    /// Returns the full path (both endpoints included, start first) or
    /// `Ok(None)` when obstacles separate the endpoints. Endpoint ids that
    /// are unknown or unwalkable are rejected up front with
    /// [`PathError::InvalidEndpoint`].
    ///
    /// The grid is never mutated; all cost/parent bindings live in this
    /// finder's arena and are valid only for the duration of the call.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: CellId,
        target: CellId,
    ) -> Result<Option<Vec<CellId>>, PathError> {
        for id in [start, target] {
            if !grid.contains_id(id) || !grid.is_walkable(id) {
                debug!("rejecting search: endpoint {id} is unknown or unwalkable");
                return Err(PathError::InvalidEndpoint(id));
            }
        }
        if start == target {
            return Ok(Some(vec![start]));
        }

        trace!("searching {start} -> {target} (grid v{})", grid.version());

        self.ensure_len(grid.len());
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start_idx = start.index();
        let target_idx = target.index();
        let target_coord = grid.coord_of(target);

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = octile(grid.coord_of(start), target_coord);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let h0 = self.nodes[start_idx].h;
        open.push(OpenEntry {
            idx: start_idx as u32,
            f: h0,
            h: h0,
        });

        let mut expanded = 0usize;
        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let ci = current.idx as usize;

            // Skip heap entries superseded by a cheaper binding.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == target_idx {
                break true;
            }

            // Move `current` from the open set into the closed set.
            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_coord = grid.coord_of(CellId(ci as u32));

            let neighbors = self
                .neighbors
                .all(current_coord, |c| grid.contains_coord(c));
            for &nc in neighbors {
                let Some(nid) = grid.id_at(nc) else {
                    continue;
                };
                if !grid.is_walkable(nid) {
                    continue;
                }
                let ni = nid.index();
                let tentative_g = current_g + octile(current_coord, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Already expanded this search.
                        continue;
                    }
                    if tentative_g >= n.g {
                        continue;
                    }
                }

                n.generation = cur_gen;
                n.g = tentative_g;
                n.h = octile(nc, target_coord);
                n.parent = ci as u32;
                n.open = true;
                open.push(OpenEntry {
                    idx: ni as u32,
                    f: tentative_g + n.h,
                    h: n.h,
                });
            }
        };

        if !found {
            debug!("no path from {start} to {target} after expanding {expanded} cells");
            return Ok(None);
        }

        trace!("reached {target} after expanding {expanded} cells");
        self.reconstruct(grid, target).map(Some)
    }

    /// Walk parent links from `target` back to the start and return the
    /// route in start→target order.
    ///
    /// The walk is bounded by the grid's cell count; exceeding it means the
    /// parent bindings are cyclic, which the search's invariants rule out.
    fn reconstruct(&self, grid: &Grid, target: CellId) -> Result<Vec<CellId>, PathError> {
        let mut path = Vec::new();
        let mut idx = target.index() as u32;
        while idx != NO_PARENT {
            if path.len() >= grid.len() {
                debug_assert!(false, "parent chain longer than the grid's cell count");
                return Err(PathError::ParentChainCycle);
            }
            path.push(CellId(idx));
            idx = self.nodes[idx as usize].parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Find the least-cost walkable route from `start` to `target` on `grid`.
///
/// One-shot convenience over [`PathFinder::find_path`]; callers issuing
/// repeated searches should hold on to a [`PathFinder`] to reuse its arena.
pub fn find_path(
    grid: &Grid,
    start: CellId,
    target: CellId,
) -> Result<Option<Vec<CellId>>, PathError> {
    PathFinder::new().find_path(grid, start, target)
}
