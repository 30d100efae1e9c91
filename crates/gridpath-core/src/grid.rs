//! The [`Grid`] type — a fixed set of cells with a mutable walkability map.
//!
//! Cell identity (id, rectangle, center) is immutable once the grid is
//! constructed. The only mutable state is the per-cell walkability flag,
//! which the editor toggles when the user paints or erases obstacles.
//! Per-search state (costs, parent links) never lives here; the search layer
//! keeps it in its own arena, keyed by [`CellId`].

use std::fmt;

use crate::geom::{Coord, Point, Rect};

// ---------------------------------------------------------------------------
// CellId
// ---------------------------------------------------------------------------

/// A stable cell identifier, assigned row-major at grid construction.
///
/// Ids double as indices into the grid's cell storage and into any
/// search-side table keyed by cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u32);

impl CellId {
    /// The id as a flat storage index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A cell's immutable identity and geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    id: CellId,
    rect: Rect,
    center: Point,
}

impl Cell {
    /// The cell's stable id.
    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The cell's pixel rectangle (half-open).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The cell's center point in scene coordinates, derived once from the
    /// rectangle. Used only by the renderer for line drawing.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed grid of square cells covering a `width` × `height` pixel scene.
///
/// The cell count is `ceil(width / cell_size) × ceil(height / cell_size)`
/// and never changes after construction. Cells on the right/bottom edge may
/// overhang the scene when the dimensions are not multiples of `cell_size`;
/// hit testing is against the cell rectangles, matching that overhang.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: i32,
    rows: i32,
    cell_size: i32,
    cells: Vec<Cell>,
    walkable: Vec<bool>,
    version: u64,
}

impl Grid {
    /// Create a grid covering a `width` × `height` scene with square cells
    /// of `cell_size` pixels. All cells start walkable.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        let cols = (width.max(0) + cell_size - 1) / cell_size;
        let rows = (height.max(0) + cell_size - 1) / cell_size;
        let len = (cols as usize) * (rows as usize);

        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                let x0 = col * cell_size;
                let y0 = row * cell_size;
                let rect = Rect::new(x0, y0, x0 + cell_size, y0 + cell_size);
                cells.push(Cell {
                    id: CellId(cells.len() as u32),
                    rect,
                    center: rect.center(),
                });
            }
        }

        Self {
            cols,
            rows,
            cell_size,
            cells,
            walkable: vec![true; len],
            version: 0,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Cell edge length in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `id` names a cell of this grid.
    #[inline]
    pub fn contains_id(&self, id: CellId) -> bool {
        id.index() < self.cells.len()
    }

    /// Whether `c` is inside the grid's column/row bounds.
    #[inline]
    pub fn contains_coord(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.cols && c.y >= 0 && c.y < self.rows
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The cell whose rectangle contains `p`, or `None` if `p` falls outside
    /// every cell. Out-of-range points are a normal "no match", never an
    /// error.
    pub fn cell_at(&self, p: Point) -> Option<CellId> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let c = Coord::new(p.x / self.cell_size, p.y / self.cell_size);
        self.id_at(c)
    }

    /// The cell at grid-step coordinate `c`, or `None` if out of bounds.
    #[inline]
    pub fn id_at(&self, c: Coord) -> Option<CellId> {
        if !self.contains_coord(c) {
            return None;
        }
        Some(CellId((c.y * self.cols + c.x) as u32))
    }

    /// The grid-step coordinate of `id`.
    ///
    /// Meaningful only for ids of this grid; callers validate foreign ids at
    /// the boundary via [`contains_id`](Grid::contains_id).
    #[inline]
    pub fn coord_of(&self, id: CellId) -> Coord {
        let idx = id.index() as i32;
        Coord::new(idx % self.cols, idx / self.cols)
    }

    /// The cell for `id`, or `None` if `id` is out of range.
    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Row-major iterator over all cells.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Walkability
    // -----------------------------------------------------------------------

    /// Whether `id` names a walkable cell. Unknown ids count as unwalkable.
    #[inline]
    pub fn is_walkable(&self, id: CellId) -> bool {
        self.walkable.get(id.index()).copied().unwrap_or(false)
    }

    /// Set the walkability of a cell. Idempotent: the version counter only
    /// advances when the flag actually changes. No-op for unknown ids.
    pub fn set_walkable(&mut self, id: CellId, walkable: bool) {
        if let Some(slot) = self.walkable.get_mut(id.index()) {
            if *slot != walkable {
                *slot = walkable;
                self.version += 1;
            }
        }
    }

    /// Make every cell walkable again (the editor's "clear" action).
    pub fn clear_obstacles(&mut self) {
        if self.walkable.iter().any(|w| !w) {
            self.walkable.fill(true);
            self.version += 1;
        }
    }

    /// Obstacle-set version counter. Advances exactly when some cell's
    /// walkability changes, so `(start, target, version)` fingerprints a
    /// search's full input.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_id_round_trip() {
        let id = CellId(123);
        let json = serde_json::to_string(&id).unwrap();
        let back: CellId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
