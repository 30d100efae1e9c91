//! 8-connected neighbor enumeration.

use gridpath_core::Coord;

/// Cached neighbor computation helper.
///
/// Enumerates the eight grid-adjacent coordinates of a cell (row/column
/// offsets of ±1), filtered by a predicate. Adjacency is exact grid-step
/// geometry; pixel distances play no part.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-connected neighbors of `c` for which `keep` returns
    /// `true`, in row-major offset order (stable across calls).
    pub fn all(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = c.shift(dx, dy);
                if keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight() {
        let mut nb = Neighbors::new();
        let got = nb.all(Coord::new(5, 5), |_| true);
        assert_eq!(got.len(), 8);
        assert!(!got.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn corner_cell_has_three_in_bounds() {
        let in_bounds = |c: Coord| c.x >= 0 && c.x < 10 && c.y >= 0 && c.y < 10;
        let mut nb = Neighbors::new();
        let got: Vec<Coord> = nb.all(Coord::new(0, 0), in_bounds).to_vec();
        assert_eq!(
            got,
            vec![Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn edge_cell_has_five_in_bounds() {
        let in_bounds = |c: Coord| c.x >= 0 && c.x < 10 && c.y >= 0 && c.y < 10;
        let mut nb = Neighbors::new();
        assert_eq!(nb.all(Coord::new(5, 0), in_bounds).len(), 5);
        assert_eq!(nb.all(Coord::new(0, 5), in_bounds).len(), 5);
        assert_eq!(nb.all(Coord::new(9, 9), in_bounds).len(), 3);
    }

    #[test]
    fn order_is_row_major_and_stable() {
        let mut nb = Neighbors::new();
        let first: Vec<Coord> = nb.all(Coord::new(3, 3), |_| true).to_vec();
        let expected = vec![
            Coord::new(2, 2),
            Coord::new(3, 2),
            Coord::new(4, 2),
            Coord::new(2, 3),
            Coord::new(4, 3),
            Coord::new(2, 4),
            Coord::new(3, 4),
            Coord::new(4, 4),
        ];
        assert_eq!(first, expected);
        let second: Vec<Coord> = nb.all(Coord::new(3, 3), |_| true).to_vec();
        assert_eq!(first, second);
    }
}
