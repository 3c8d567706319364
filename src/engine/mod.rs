//! Engine module: N x N 2048 board state, slide/merge resolution, and
//! random tile spawning. Public API stays small and ergonomic.
//!
//! - `Board` owns the grid and the per-move merge marks.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - Slide/merge and spawn internals live in submodules to keep things tidy.

mod ops;
mod spawn;
pub mod state;

pub use state::{Board, BoardError, Move};

pub use ops::{count_empty, highest_tile, is_game_over, make_move, shift, value_at};
pub use spawn::{place_tile, spawn_tile, Spawn};
