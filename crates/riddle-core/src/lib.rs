//! Core data structures for logic-grid riddles.
//!
//! This crate provides the board model shared by riddle generation and
//! rendering components.
//!
//! # Overview
//!
//! - [`kind`]: the riddle categories ([`Kind`]) and their labels
//! - [`catalog`]: static master lists of item names per kind, and the random
//!   draws that pick a riddle's kinds and items
//! - [`board`]: the [`Board`] of reveal counters, addressed by [`CellIndex`],
//!   and the computed [`Item`] view of a cell
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//! use riddle_core::Board;
//!
//! let mut rng = Pcg32::seed_from_u64(1);
//! let mut board = Board::random(5, 5, &mut rng)?;
//! assert_eq!(board.len(), 25);
//!
//! // Reveal the first person's item of the first kind
//! let idx = board.cell_index(0, 0);
//! board.increment(idx);
//! assert_eq!(board.missing_items().len(), 24);
//! # Ok::<(), riddle_core::catalog::CatalogError>(())
//! ```

pub mod board;
pub mod catalog;
pub mod kind;

// Re-export commonly used types
pub use self::{
    board::{Board, CellIndex, Item},
    kind::Kind,
};
