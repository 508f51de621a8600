//! Grids of random digits, traversed as 4-connected graphs.

use errors::*;
use random::randint;

use rand::Rng;

use std::collections::VecDeque;
use std::fmt;

/// A grid coordinate, `(row, col)`. Signed, because depth-first search pushes
/// neighbors that may lie off the edge of the grid.
pub type Position = (isize, isize);

/// Neighbor offsets, in the order both traversals explore them: down a row,
/// right a column, up a row, left a column.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The largest value a generated cell may hold.
pub const MAX_CELL: u8 = 9;

/// A `rows`✕`cols` grid of digits. A cell's neighbors are those above, below,
/// and to the left and right of it; diagonal cells are not neighbors.
///
/// Cells are stored in row-major order. A grid never changes size or contents
/// after construction; traversals only read it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>
}

impl Grid {
    /// Construct a `rows`✕`cols` grid, drawing each cell independently and
    /// uniformly from `0 ..= MAX_CELL` using `rng`.
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
        let len = checked_area(rows, cols)?;
        let mut cells = Vec::with_capacity(len);
        for _ in 0..len {
            cells.push(randint(rng, 0, MAX_CELL as i64, true)? as u8);
        }
        debug!(rows, cols, "generated grid");
        Ok(Grid { rows, cols, cells })
    }

    /// Construct a grid holding exactly the given rows of values.
    ///
    /// Every row must have the same, non-zero, length, and every value must be
    /// at most `MAX_CELL`.
    pub fn from_rows(values: Vec<Vec<u8>>) -> Result<Grid> {
        let rows = values.len();
        let cols = values.first().map_or(0, |row| row.len());
        let len = checked_area(rows, cols)?;

        let mut cells = Vec::with_capacity(len);
        for (r, row) in values.into_iter().enumerate() {
            if row.len() != cols {
                bail!(ErrorKind::InvalidArgument(
                    format!("row {} has {} cells, expected {}", r, row.len(), cols)));
            }
            if let Some(&bad) = row.iter().find(|&&v| v > MAX_CELL) {
                bail!(ErrorKind::InvalidArgument(
                    format!("row {} holds {}, cells must be at most {}", r, bad, MAX_CELL)));
            }
            cells.extend(row);
        }

        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    /// Return true if `(row, col)` lies within the grid.
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    /// Return the value at `(row, col)`, or `None` if that is off the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Return the cells of row `row`.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start .. start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over the grid's rows, top to bottom.
    pub fn iter_rows(&self) -> ::std::slice::Chunks<u8> {
        self.cells.chunks(self.cols)
    }

    /// Return the index into `cells` of `(row, col)`, if it is on the grid.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    fn checked_index(&self, (row, col): Position) -> Result<usize> {
        match self.index(row, col) {
            Some(i) => Ok(i),
            None => Err(ErrorKind::PositionOutOfRange(row, col, self.rows, self.cols).into())
        }
    }

    /// Return the positions reachable from `start` in breadth-first order.
    ///
    /// A cell is marked visited when it is enqueued, so no cell enters the
    /// queue twice. `start` itself comes first.
    pub fn bfs_positions(&self, start: Position) -> Result<Vec<(usize, usize)>> {
        let start_index = self.checked_index(start)?;

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        let mut order = vec![unsigned(start)];

        visited[start_index] = true;
        queue.push_back(start);

        while let Some((row, col)) = queue.pop_front() {
            for &(dr, dc) in DIRECTIONS.iter() {
                let next = (row + dr, col + dc);
                if let Some(i) = self.index(next.0, next.1) {
                    if !visited[i] {
                        visited[i] = true;
                        queue.push_back(next);
                        order.push(unsigned(next));
                    }
                }
            }
        }

        debug!(?start, visited = order.len(), "grid breadth-first traversal");
        Ok(order)
    }

    /// Return the positions reachable from `start` in depth-first order.
    ///
    /// Unlike `bfs_positions`, this pushes all four neighbors of each accepted
    /// cell without looking at them, and discards off-grid or already visited
    /// positions only when they are popped. Since the last neighbor pushed is
    /// the first explored, siblings are visited in the reverse of
    /// `DIRECTIONS` order.
    pub fn dfs_positions(&self, start: Position) -> Result<Vec<(usize, usize)>> {
        self.checked_index(start)?;

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some((row, col)) = stack.pop() {
            let i = match self.index(row, col) {
                Some(i) if !visited[i] => i,
                _ => continue
            };
            visited[i] = true;
            order.push(unsigned((row, col)));

            for &(dr, dc) in DIRECTIONS.iter() {
                stack.push((row + dr, col + dc));
            }
        }

        debug!(?start, visited = order.len(), "grid depth-first traversal");
        Ok(order)
    }

    /// Return the values of the cells reachable from `start`, in breadth-first
    /// order.
    pub fn bfs(&self, start: Position) -> Result<Vec<u8>> {
        Ok(self.values_at(&self.bfs_positions(start)?))
    }

    /// Return the values of the cells reachable from `start`, in depth-first
    /// order.
    pub fn dfs(&self, start: Position) -> Result<Vec<u8>> {
        Ok(self.values_at(&self.dfs_positions(start)?))
    }

    fn values_at(&self, positions: &[(usize, usize)]) -> Vec<u8> {
        positions.iter()
            .map(|&(row, col)| self.cells[row * self.cols + col])
            .collect()
    }
}

/// Return `rows * cols`, insisting that both are positive and that the
/// product is small enough to allocate: a `Vec` holds at most `isize::MAX`
/// bytes.
fn checked_area(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        bail!(ErrorKind::InvalidArgument(
            format!("grid dimensions must be positive, got {}x{}", rows, cols)));
    }
    match rows.checked_mul(cols) {
        Some(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(ErrorKind::InvalidArgument(
            format!("a {}x{} grid has too many cells", rows, cols)).into())
    }
}

/// Convert a position already known to be on the grid.
fn unsigned((row, col): Position) -> (usize, usize) {
    (row as usize, col as usize)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            let line = row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}



#[cfg(test)]
mod grid_properties {
    use proptest::prelude::*;
    use super::{Grid, MAX_CELL};
    use xorshift::XorShift128Plus;

    proptest! {
        #[test]
        fn generated_shape_and_range(rows in 1usize..16, cols in 1usize..16, seed in any::<u64>()) {
            let grid = Grid::new(rows, cols, &mut XorShift128Plus::from_u64(seed)).unwrap();
            prop_assert_eq!(grid.rows(), rows);
            prop_assert_eq!(grid.cols(), cols);
            prop_assert_eq!(grid.iter_rows().count(), rows);
            for row in grid.iter_rows() {
                prop_assert_eq!(row.len(), cols);
                prop_assert!(row.iter().all(|&v| v <= MAX_CELL));
            }
        }

        #[test]
        fn traversals_cover_grid(rows in 1usize..10, cols in 1usize..10,
                                 r in 0usize..10, c in 0usize..10, seed in any::<u64>()) {
            let grid = Grid::new(rows, cols, &mut XorShift128Plus::from_u64(seed)).unwrap();
            let start = ((r % rows) as isize, (c % cols) as isize);

            let bfs = grid.bfs_positions(start).unwrap();
            let mut dfs = grid.dfs_positions(start).unwrap();
            prop_assert_eq!(bfs.len(), rows * cols);
            prop_assert_eq!(dfs.len(), rows * cols);

            let first = grid.get(start.0, start.1).unwrap();
            prop_assert_eq!(grid.bfs(start).unwrap()[0], first);
            prop_assert_eq!(grid.dfs(start).unwrap()[0], first);

            let mut sorted_bfs = bfs.clone();
            sorted_bfs.sort();
            dfs.sort();
            sorted_bfs.dedup();
            prop_assert_eq!(sorted_bfs.len(), rows * cols);
            prop_assert_eq!(sorted_bfs, dfs);
        }
    }
}
