//! Multi-source 8-connected BFS distance transform.

use beeclust_core::cell::Terrain;
use beeclust_core::Grid;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// The eight `(row_offset, col_offset)` steps of the 8-neighborhood:
/// the four cardinals plus the four diagonals. Diagonals count as a
/// single hop, yielding Chebyshev distance in open space.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The in-bounds 8-neighbors of `(r, c)`, at most eight, so a stack-backed
/// `SmallVec` avoids a heap allocation per BFS pop.
fn neighbours_8(grid: &Grid, r: usize, c: usize) -> SmallVec<[(usize, usize); 8]> {
    let mut out = SmallVec::new();
    for (dr, dc) in OFFSETS_8 {
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if grid.in_bounds(nr, nc) {
            out.push((nr as usize, nc as usize));
        }
    }
    out
}

/// A grid of BFS hop-counts from every cell of a given source kind.
///
/// `0` marks a source cell, positive values mark hop counts, and `-1`
/// marks a cell unreachable from any source of that kind (walls are
/// always unreachable, since they are never enqueued).
#[derive(Clone, Debug)]
pub struct DistanceField {
    rows: usize,
    cols: usize,
    distances: Vec<i64>,
}

impl DistanceField {
    /// Run the BFS from every cell equal to `source` in `grid`.
    ///
    /// Walls block propagation: a wall cell is never enqueued and never
    /// updated, but every other cell kind (empty, bee, the other source
    /// kind) is traversed as an ordinary passable cell.
    pub fn compute(grid: &Grid, source: Terrain) -> DistanceField {
        let (rows, cols) = grid.shape();
        let mut distances = vec![-1i64; rows * cols];
        let mut visited = vec![false; rows * cols];
        let idx = |r: usize, c: usize| r * cols + c;

        let mut queue: VecDeque<(usize, usize, i64)> = VecDeque::new();
        for (r, c) in grid.coords() {
            if grid.is_source(r, c, source) {
                distances[idx(r, c)] = 0;
                visited[idx(r, c)] = true;
                queue.push_back((r, c, 0));
            }
        }

        while let Some((r, c, d)) = queue.pop_front() {
            let nd = d + 1;
            for (nr, nc) in neighbours_8(grid, r, c) {
                if grid.is_wall(nr, nc) {
                    continue;
                }
                if !visited[idx(nr, nc)] {
                    visited[idx(nr, nc)] = true;
                    distances[idx(nr, nc)] = nd;
                    queue.push_back((nr, nc, nd));
                }
            }
        }

        DistanceField {
            rows,
            cols,
            distances,
        }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The hop count at `(r, c)`: `0` for a source, positive for a
    /// reachable non-source cell, `-1` if unreachable (including walls).
    pub fn get(&self, r: usize, c: usize) -> i64 {
        self.distances[r * self.cols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_core::cell::Terrain;
    use proptest::prelude::*;

    #[test]
    fn sources_are_zero() {
        let grid = Grid::from_rows(vec![vec![6, 0, 0], vec![0, 0, 0], vec![0, 0, 7]]).unwrap();
        let dh = DistanceField::compute(&grid, Terrain::Heater);
        let dc = DistanceField::compute(&grid, Terrain::Cooler);
        assert_eq!(dh.get(0, 0), 0);
        assert_eq!(dc.get(2, 2), 0);
    }

    #[test]
    fn diagonal_is_one_hop() {
        let grid = Grid::from_rows(vec![vec![6, 0], vec![0, 0]]).unwrap();
        let d = DistanceField::compute(&grid, Terrain::Heater);
        assert_eq!(d.get(1, 1), 1);
        assert_eq!(d.get(0, 1), 1);
        assert_eq!(d.get(1, 0), 1);
    }

    #[test]
    fn walls_block_propagation() {
        // Heater column 0, wall column 1, empty column 2: column 2 must be
        // entirely unreachable.
        let grid = Grid::from_rows(vec![vec![6, 5, 0], vec![6, 5, 0], vec![6, 5, 0]]).unwrap();
        let d = DistanceField::compute(&grid, Terrain::Heater);
        for r in 0..3 {
            assert_eq!(d.get(r, 2), -1);
            // Wall cells themselves are never updated.
            assert_eq!(d.get(r, 1), -1);
        }
    }

    #[test]
    fn no_sources_all_unreachable() {
        let grid = Grid::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let d = DistanceField::compute(&grid, Terrain::Heater);
        for (r, c) in grid.coords() {
            assert_eq!(d.get(r, c), -1);
        }
    }

    proptest! {
        #[test]
        fn distances_are_monotonic_with_manhattan_lower_bound(
            rows in 2usize..8, cols in 2usize..8,
        ) {
            let mut data = vec![vec![0i32; cols]; rows];
            data[0][0] = 6;
            let grid = Grid::from_rows(data).unwrap();
            let d = DistanceField::compute(&grid, Terrain::Heater);
            for (r, c) in grid.coords() {
                let dist = d.get(r, c);
                prop_assert!(dist >= 0, "open grid with a source must reach every cell");
                prop_assert!(dist <= (r as i64 + c as i64));
            }
        }
    }
}
