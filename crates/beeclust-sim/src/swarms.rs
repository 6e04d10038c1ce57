//! 4-connected swarm decomposition.

use beeclust_core::Grid;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// The four cardinal `(row_offset, col_offset)` steps used for swarm
/// connectivity. Diagonals do **not** connect bees, even though heat
/// uses 8-connectivity.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The in-bounds 4-neighbors of `(r, c)`, at most four.
fn neighbours_4(grid: &Grid, r: usize, c: usize) -> SmallVec<[(usize, usize); 4]> {
    let mut out = SmallVec::new();
    for (dr, dc) in OFFSETS_4 {
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if grid.in_bounds(nr, nc) {
            out.push((nr as usize, nc as usize));
        }
    }
    out
}

/// Partition every bee cell in `grid` into maximal 4-connected components.
///
/// Neither outer nor inner ordering is contractually specified; callers
/// that need a canonical order should sort.
pub fn swarms(grid: &Grid) -> Vec<Vec<(usize, usize)>> {
    let (rows, cols) = grid.shape();
    let mut visited = vec![false; rows * cols];
    let idx = |r: usize, c: usize| r * cols + c;
    let mut result = Vec::new();

    for (r, c) in grid.coords() {
        if visited[idx(r, c)] || !grid.is_bee(r, c) {
            continue;
        }
        let mut swarm = Vec::new();
        let mut queue = VecDeque::new();
        visited[idx(r, c)] = true;
        queue.push_back((r, c));
        swarm.push((r, c));

        while let Some((cr, cc)) = queue.pop_front() {
            for (nr, nc) in neighbours_4(grid, cr, cc) {
                if !visited[idx(nr, nc)] && grid.is_bee(nr, nc) {
                    visited[idx(nr, nc)] = true;
                    swarm.push((nr, nc));
                    queue.push_back((nr, nc));
                }
            }
        }

        result.push(swarm);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_core::Grid;

    fn sorted(mut swarms: Vec<Vec<(usize, usize)>>) -> Vec<Vec<(usize, usize)>> {
        for s in &mut swarms {
            s.sort();
        }
        swarms.sort();
        swarms
    }

    #[test]
    fn diagonal_bees_do_not_connect() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let s = swarms(&grid);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn orthogonal_bees_connect() {
        let grid = Grid::from_rows(vec![vec![1, 1], vec![0, 0]]).unwrap();
        let s = swarms(&grid);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].len(), 2);
    }

    #[test]
    fn walls_and_sources_never_appear() {
        let grid = Grid::from_rows(vec![vec![1, 5, 6, 7]]).unwrap();
        let s = swarms(&grid);
        assert_eq!(sorted(s), vec![vec![(0, 0)]]);
    }

    #[test]
    fn partitions_bees_exactly() {
        let grid = Grid::from_rows(vec![vec![1, 1, 0, 2], vec![0, 0, 0, -5]]).unwrap();
        let mut flattened: Vec<(usize, usize)> =
            swarms(&grid).into_iter().flatten().collect();
        flattened.sort();
        let mut bees = grid.bees();
        bees.sort();
        assert_eq!(flattened, bees);
    }

    #[test]
    fn waiting_bees_participate() {
        let grid = Grid::from_rows(vec![vec![-3, -4]]).unwrap();
        let s = swarms(&grid);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].len(), 2);
    }
}
