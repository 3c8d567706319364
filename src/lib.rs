//! grid-2048: a deterministic N x N 2048 board engine
//!
//! This crate provides:
//! - A `Board` type over any N >= 2 grid with ergonomic methods
//!   (`shift`, `make_move`, `is_game_over`, ...)
//! - A spawner with injected randomness (`spawn_tile`, `place_tile`) so
//!   every run reproduces from a seed
//!
//! Rendering, input handling, and timers are the host application's
//! business; the engine is pure board state. The driver loop is: request
//! a move, and iff it changed any cell, spawn one tile and check
//! game-over.
//!
//! Quick start:
//! ```
//! use grid_2048::engine::{spawn_tile, Board, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut board = Board::new(4).unwrap();
//!
//! // Deterministic start: two spawned tiles
//! spawn_tile(&mut board, &mut rng);
//! spawn_tile(&mut board, &mut rng);
//! assert_eq!(board.count_empty(), 14);
//!
//! // One logical turn: move, then spawn iff the move changed anything
//! if board.shift(Move::Left) {
//!     spawn_tile(&mut board, &mut rng);
//! }
//! assert!(!board.is_game_over());
//! ```
//!
//! Note: For convenience, there are also free functions mirroring the
//! `Board` methods (e.g., `engine::shift`, `engine::is_game_over`).
//! Every source of randomness is a caller-supplied `rand::Rng`; prefer a
//! seeded `StdRng` when you need determinism.

pub mod engine;
