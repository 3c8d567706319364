use rand::Rng;

use super::spawn;
use super::state::{Board, Move};

/// Slide and merge every tile in `dir`. Returns whether any cell changed
/// position or value.
///
/// Each line perpendicular to the direction is resolved from the cell
/// nearest the target edge outward, so earlier-resolved tiles correctly
/// block or merge with later ones. A cell absorbs at most one merge per
/// move: the merge marks are cleared here, before any merge attempt.
pub fn shift(board: &mut Board, dir: Move) -> bool {
    board.reset_merge_marks();
    let n = board.size();
    let (dx, dy) = dir.step();
    let mut changed = false;
    for (x, y) in traversal(dir, n) {
        if board.is_empty(x, y) {
            continue;
        }
        // Walk the target position over empty cells toward the edge.
        let (mut tx, mut ty) = (x, y);
        while let Some((nx, ny)) = step_toward(n, tx, ty, dx, dy) {
            if board.has_value(nx, ny) {
                break;
            }
            tx = nx;
            ty = ny;
        }
        // The occupied cell one step beyond the target, if any, is the
        // merge candidate.
        if let Some((mx, my)) = step_toward(n, tx, ty, dx, dy) {
            if board.value(mx, my) == board.value(x, y) && !board.is_merged(mx, my) {
                let doubled = board.value(x, y) * 2;
                board.set(mx, my, doubled);
                board.mark_merged(mx, my);
                board.clear(x, y);
                changed = true;
                continue;
            }
        }
        if (tx, ty) != (x, y) {
            let v = board.value(x, y);
            board.clear(x, y);
            board.set(tx, ty, v);
            changed = true;
        }
    }
    changed
}

/// Cell visit order for one move: every line perpendicular to `dir`,
/// processed starting nearest the target edge and moving away from it.
fn traversal(dir: Move, n: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(n * (n - 1));
    match dir {
        Move::Left => {
            for y in 0..n {
                for x in 1..n {
                    order.push((x, y));
                }
            }
        }
        Move::Right => {
            for y in 0..n {
                for x in (0..n - 1).rev() {
                    order.push((x, y));
                }
            }
        }
        Move::Up => {
            for y in 1..n {
                for x in 0..n {
                    order.push((x, y));
                }
            }
        }
        Move::Down => {
            for y in (0..n - 1).rev() {
                for x in 0..n {
                    order.push((x, y));
                }
            }
        }
    }
    order
}

#[inline]
fn step_toward(n: usize, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    if nx < n && ny < n {
        Some((nx, ny))
    } else {
        None
    }
}

/// True iff no cell is empty and no two horizontally- or vertically-
/// adjacent cells hold equal values. Checking each cell against its right
/// and bottom neighbor covers every adjacent pair exactly once. Pure
/// query, mutates nothing.
pub fn is_game_over(board: &Board) -> bool {
    let n = board.size();
    for y in 0..n {
        for x in 0..n {
            if board.is_empty(x, y) {
                return false;
            }
            let v = board.value(x, y);
            if x + 1 < n && board.value(x + 1, y) == v {
                return false;
            }
            if y + 1 < n && board.value(x, y + 1) == v {
                return false;
            }
        }
    }
    true
}

/// Perform a move then spawn a random tile if the move changed the board,
/// using the provided RNG. Returns whether the move changed anything.
pub fn make_move<R: Rng + ?Sized>(board: &mut Board, dir: Move, rng: &mut R) -> bool {
    let changed = shift(board, dir);
    if changed {
        spawn::spawn_tile(board, rng);
    }
    changed
}

/// The value at `(x, y)`: 0 for empty, otherwise the tile value.
///
/// # Panics
///
/// Panics if `(x, y)` is outside `[0, size)`.
#[inline]
pub fn value_at(board: &Board, x: usize, y: usize) -> u32 {
    board.value(x, y)
}

/// Count the number of empty cells on the board.
#[inline]
pub fn count_empty(board: &Board) -> usize {
    board.count_empty()
}

/// The highest tile value present, or 0 on an empty board.
#[inline]
pub fn highest_tile(board: &Board) -> u32 {
    board.highest_tile()
}
