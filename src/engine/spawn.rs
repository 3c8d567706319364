use rand::Rng;

use super::state::Board;

/// A tile placed by the spawner: grid coordinates and the value placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

/// Place a random 2 or 4 (equal odds) on a uniformly chosen empty cell,
/// using the provided RNG. Returns `None` when the board has no empty
/// cell, without drawing from the RNG.
///
/// Deterministic example using a seeded RNG:
/// ```
/// use grid_2048::engine::{spawn_tile, Board};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(123);
/// let mut board = Board::new(4).unwrap();
/// let spawn = spawn_tile(&mut board, &mut rng).unwrap();
/// assert!(spawn.value == 2 || spawn.value == 4);
/// assert_eq!(board.value(spawn.x, spawn.y), spawn.value);
/// assert_eq!(board.count_empty(), 15);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawn> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let (x, y) = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    board.set(x, y, value);
    Some(Spawn { x, y, value })
}

/// Place a random 2 or 4 on a specific cell, only if that cell is empty.
/// Returns `None` when the cell is occupied.
///
/// ```
/// use grid_2048::engine::{place_tile, Board};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let mut board = Board::new(4).unwrap();
/// let spawn = place_tile(&mut board, 1, 2, &mut rng).unwrap();
/// assert_eq!((spawn.x, spawn.y), (1, 2));
/// // Occupied now, so a second placement is refused.
/// assert_eq!(place_tile(&mut board, 1, 2, &mut rng), None);
/// ```
///
/// # Panics
///
/// Panics if `(x, y)` is outside `[0, size)`.
pub fn place_tile<R: Rng + ?Sized>(
    board: &mut Board,
    x: usize,
    y: usize,
    rng: &mut R,
) -> Option<Spawn> {
    if board.has_value(x, y) {
        return None;
    }
    let value = random_tile_value(rng);
    board.set(x, y, value);
    Some(Spawn { x, y, value })
}

#[inline]
fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (rng.gen_range(0..2u32) + 1) * 2
}
