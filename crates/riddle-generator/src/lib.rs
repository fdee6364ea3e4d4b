//! Logic-grid riddle generation.
//!
//! This crate builds "Zebra Puzzle" style riddles: a board of kinds × people
//! is filled by revealing groups of cells, each group becomes one clue, and a
//! few cells are left unrevealed to become the riddle's questions.
//!
//! # Overview
//!
//! - [`RiddleOptions`] describes the riddle shape and is validated up front
//! - [`selector`] holds the three group selection policies
//! - [`Clue`] phrases a picked group as a sentence
//! - [`RiddleGenerator`] runs the fixed [`schedule`] of selectors, then checks
//!   that no two missing items share a kind
//!
//! All randomness comes from one PCG generator seeded by a [`RiddleSeed`], so
//! a seed and options reproduce a riddle exactly.
//!
//! # Examples
//!
//! ```
//! use riddle_generator::{RiddleGenerator, RiddleOptions};
//!
//! let generator = RiddleGenerator::new(RiddleOptions::default())?;
//! let riddle = loop {
//!     match generator.generate() {
//!         Ok(riddle) => break riddle,
//!         Err(err) if err.is_recoverable() => {}
//!         Err(err) => panic!("{err}"),
//!     }
//! };
//!
//! for fact in riddle.facts() {
//!     println!("- {fact}");
//! }
//! for question in riddle.questions() {
//!     println!("- {question}");
//! }
//! # Ok::<(), riddle_generator::ConfigError>(())
//! ```

pub use self::{
    clue::{Clue, question},
    error::*,
    generator::{GeneratedRiddle, Phase, Repeat, RiddleGenerator, check_missing_kinds, schedule},
    options::RiddleOptions,
    seed::{RiddleSeed, SeedParseError},
    selector::{PickedGroup, SelectionState},
};

mod clue;
mod error;
mod generator;
mod options;
mod seed;
pub mod selector;
