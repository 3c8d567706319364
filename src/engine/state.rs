use std::fmt;

use rand::Rng;

use super::{ops, spawn};

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Unit offset toward the target edge, as `(dx, dy)`.
    #[inline]
    pub(crate) fn step(self) -> (isize, isize) {
        match self {
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Up => (0, -1),
            Move::Down => (0, 1),
        }
    }
}

/// Errors from board construction.
///
/// Cell values are `u32`, so the negative-value case is unrepresentable;
/// out-of-bounds coordinates are a caller contract violation and panic
/// (see the `# Panics` sections on the accessors).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimension must be at least 2, got {0}")]
    InvalidDimension(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NonSquare { row: usize, len: usize, size: usize },
}

/// An N x N 2048 board backed by a row-major grid.
///
/// Cells hold `0` for empty, otherwise a power of two put there by the
/// spawner (2 or 4) or by doubling two equal tiles in a merge. The board
/// also owns one merge mark per cell: transient per-move state that stops
/// a cell from absorbing two merges in a single slide, reset at the start
/// of every move.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, both in
/// `[0, size)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
    merged: Vec<bool>,
}

impl Board {
    /// Create an all-empty board of the given dimension.
    ///
    /// ```
    /// use grid_2048::engine::{Board, BoardError};
    ///
    /// assert_eq!(Board::new(1), Err(BoardError::InvalidDimension(1)));
    /// let board = Board::new(4).unwrap();
    /// assert_eq!(board.size(), 4);
    /// assert_eq!(board.count_empty(), 16);
    /// ```
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::InvalidDimension(size));
        }
        Ok(Board {
            size,
            cells: vec![0; size * size],
            merged: vec![false; size * size],
        })
    }

    /// Build a board from literal rows, mostly for tests and drivers.
    ///
    /// The input must be square and at least 2 x 2.
    ///
    /// ```
    /// use grid_2048::engine::Board;
    ///
    /// let board = Board::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(board.value(0, 0), 2);
    /// assert_eq!(board.value(1, 1), 4);
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Board::new(size)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::NonSquare {
                    row: y,
                    len: row.len(),
                    size,
                });
            }
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * size + x] = v;
            }
        }
        Ok(board)
    }

    /// The board dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) out of bounds for {}x{} board",
            x,
            y,
            self.size,
            self.size
        );
        y * self.size + x
    }

    /// The value at `(x, y)`: 0 for empty, otherwise the tile value.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, size)`.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> u32 {
        self.cells[self.idx(x, y)]
    }

    /// Write `value` at `(x, y)`. Callers are responsible for passing 0
    /// or a power of two; the engine itself only ever writes those.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, size)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// Set `(x, y)` to empty.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, size)`.
    #[inline]
    pub fn clear(&mut self, x: usize, y: usize) {
        self.set(x, y, 0);
    }

    /// True if `(x, y)` holds no tile.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, size)`.
    #[inline]
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.value(x, y) == 0
    }

    /// True if `(x, y)` holds a tile.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `[0, size)`.
    #[inline]
    pub fn has_value(&self, x: usize, y: usize) -> bool {
        !self.is_empty(x, y)
    }

    #[inline]
    pub(crate) fn is_merged(&self, x: usize, y: usize) -> bool {
        self.merged[self.idx(x, y)]
    }

    #[inline]
    pub(crate) fn mark_merged(&mut self, x: usize, y: usize) {
        let idx = self.idx(x, y);
        self.merged[idx] = true;
    }

    /// Clear every merge mark. Runs at the start of each move, before any
    /// merge attempt for that move.
    pub(crate) fn reset_merge_marks(&mut self) {
        self.merged.fill(false);
    }

    /// Coordinates of every empty cell, in row-major order.
    ///
    /// The order carries no meaning but is deterministic for a given
    /// board state, so spawn outcomes reproduce under a fixed seed.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_empty(x, y) {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// The highest tile value present, or 0 on an empty board.
    #[inline]
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Set every cell to empty and clear the merge marks.
    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.reset_merge_marks();
    }

    /// Slide/merge tiles in the given direction. Returns whether any cell
    /// changed position or value.
    ///
    /// ```
    /// use grid_2048::engine::{Board, Move};
    ///
    /// let mut board = Board::from_rows(&[
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ])
    /// .unwrap();
    /// assert!(board.shift(Move::Left));
    /// assert_eq!(board.value(0, 0), 4);
    /// // A settled board yields no further change for the same direction.
    /// assert!(!board.shift(Move::Left));
    /// ```
    #[inline]
    pub fn shift(&mut self, dir: Move) -> bool {
        ops::shift(self, dir)
    }

    /// Perform a move then spawn a random tile if the move changed the
    /// board, using the provided RNG. Returns whether the move changed
    /// anything.
    ///
    /// ```
    /// use grid_2048::engine::{Board, Move};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut board = Board::from_rows(&[
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ])
    /// .unwrap();
    /// assert!(board.make_move(Move::Left, &mut rng));
    /// // The pair merged to one tile and one tile spawned.
    /// assert_eq!(board.count_empty(), 14);
    /// ```
    #[inline]
    pub fn make_move<R: Rng + ?Sized>(&mut self, dir: Move, rng: &mut R) -> bool {
        ops::make_move(self, dir, rng)
    }

    /// Spawn a random 2 or 4 on a uniformly chosen empty cell, using the
    /// provided RNG. Returns `None` when the board is full.
    #[inline]
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<spawn::Spawn> {
        spawn::spawn_tile(self, rng)
    }

    /// True iff no cell is empty and no two adjacent cells hold equal
    /// values.
    ///
    /// ```
    /// use grid_2048::engine::Board;
    ///
    /// let mut board = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
    /// assert!(board.is_game_over());
    /// board.reset();
    /// assert!(!board.is_game_over());
    /// ```
    #[inline]
    pub fn is_game_over(&self) -> bool {
        ops::is_game_over(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, {:?})", self.size, self.size, self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 8 - 1);
        writeln!(f)?;
        for y in 0..self.size {
            let row: Vec<String> = (0..self.size).map(|x| format_val(self.value(x, y))).collect();
            writeln!(f, "{}", row.join("|"))?;
            if y + 1 < self.size {
                writeln!(f, "{}", rule)?;
            }
        }
        Ok(())
    }
}

fn format_val(val: u32) -> String {
    if val == 0 {
        "       ".to_string()
    } else {
        format!("{:^7}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_undersized() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidDimension(0)));
        assert_eq!(Board::new(1), Err(BoardError::InvalidDimension(1)));
        assert!(Board::new(2).is_ok());
        assert!(Board::new(8).is_ok());
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.count_empty(), 25);
        assert_eq!(board.highest_tile(), 0);
    }

    #[test]
    fn from_rows_round_trip() {
        let board = Board::from_rows(&[[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 0, 0], [16, 0, 0, 2]])
            .unwrap();
        assert_eq!(board.value(0, 0), 2);
        assert_eq!(board.value(3, 0), 4);
        assert_eq!(board.value(1, 1), 8);
        assert_eq!(board.value(0, 3), 16);
        assert_eq!(board.value(3, 3), 2);
        assert_eq!(board.count_empty(), 11);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows: Vec<Vec<u32>> = vec![vec![2, 0], vec![0]];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::NonSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        let rows: Vec<Vec<u32>> = vec![vec![2]];
        assert_eq!(Board::from_rows(&rows), Err(BoardError::InvalidDimension(1)));
    }

    #[test]
    fn accessors() {
        let mut board = Board::new(3).unwrap();
        assert!(board.is_empty(1, 2));
        assert!(!board.has_value(1, 2));
        board.set(1, 2, 8);
        assert!(board.has_value(1, 2));
        assert_eq!(board.value(1, 2), 8);
        board.clear(1, 2);
        assert!(board.is_empty(1, 2));
        assert_eq!(board.value(1, 2), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn value_out_of_bounds_panics() {
        let board = Board::new(4).unwrap();
        board.value(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        let mut board = Board::new(4).unwrap();
        board.set(0, 4, 2);
    }

    #[test]
    fn empty_cells_row_major() {
        let mut board = Board::new(2).unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        board.set(1, 0, 2);
        assert_eq!(board.empty_cells(), vec![(0, 0), (0, 1), (1, 1)]);
        // Same state, same enumeration.
        assert_eq!(board.empty_cells(), board.empty_cells());
    }

    #[test]
    fn highest_tile_scans_whole_grid() {
        let board = Board::from_rows(&[[2, 0, 0, 0], [0, 64, 0, 0], [0, 0, 0, 0], [0, 0, 32, 0]])
            .unwrap();
        assert_eq!(board.highest_tile(), 64);
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Board::from_rows(&[[2, 2], [4, 8]]).unwrap();
        board.shift(Move::Left);
        board.reset();
        assert_eq!(board.count_empty(), 4);
        assert_eq!(board.empty_cells().len(), 4);
        assert!(!board.is_game_over());
    }

    #[test]
    fn display_lays_out_grid() {
        let board = Board::from_rows(&[[2, 0], [0, 16]]).unwrap();
        let text = format!("{}", board);
        assert!(text.contains("2"));
        assert!(text.contains("16"));
        assert!(text.contains("---"));
        // One row line per rank plus one rule between the two.
        assert_eq!(text.lines().filter(|l| l.contains('|')).count(), 2);
    }
}
