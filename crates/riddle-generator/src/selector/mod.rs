//! Group selection policies.
//!
//! A selector picks a group of cells to reveal together as one clue, bumps the
//! reveal counter of every picked cell by one, and appends the group to the
//! group log. Each selector implements the [`GroupSelector`] trait and works on
//! a [`SelectionState`].
//!
//! - [`SamePersonGroup`]: cells of one person across distinct kinds
//! - [`AvailableGroup`]: cells anywhere on the board at a given reveal count
//! - [`ItemAtExtremity`]: one cell at the far left, far right or middle

use std::fmt::Debug;

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use riddle_core::{Board, CellIndex};

pub use self::{
    available::AvailableGroup, extremity::ItemAtExtremity, same_person::SamePersonGroup,
};
use crate::{RiddleSeed, SelectionError};

mod available;
mod extremity;
mod same_person;

/// Cells revealed together as one clue, in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedGroup(Vec<CellIndex>);

impl PickedGroup {
    /// Creates a group from cell indices.
    #[must_use]
    pub fn new(cells: Vec<CellIndex>) -> Self {
        Self(cells)
    }

    /// Returns the cells of the group in pick order.
    #[must_use]
    pub fn cells(&self) -> &[CellIndex] {
        &self.0
    }

    /// Returns the number of cells in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the group has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CellIndex>> for PickedGroup {
    fn from(cells: Vec<CellIndex>) -> Self {
        Self(cells)
    }
}

/// Mutable state shared by selectors during one generation.
///
/// Owns the board, the single random source and the ordered log of picked
/// groups.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub(crate) board: Board,
    pub(crate) rng: Pcg64,
    group_size: usize,
    groups: Vec<PickedGroup>,
}

impl SelectionState {
    /// Creates a state around `board` with a random source seeded by `seed`.
    #[must_use]
    pub fn new(board: Board, group_size: usize, seed: RiddleSeed) -> Self {
        Self::with_rng(board, group_size, Pcg64::from_seed(seed.bytes()))
    }

    pub(crate) fn with_rng(board: Board, group_size: usize, rng: Pcg64) -> Self {
        Self {
            board,
            rng,
            group_size,
            groups: Vec::new(),
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of cells a multi-cell selector picks.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Returns the picked groups in pick order.
    #[must_use]
    pub fn groups(&self) -> &[PickedGroup] {
        &self.groups
    }

    /// Reveals every cell of `cells` once and logs them as a group.
    fn reveal_group(&mut self, cells: Vec<CellIndex>) -> PickedGroup {
        for &idx in &cells {
            self.board.increment(idx);
        }
        self.log_group(cells)
    }

    /// Logs already revealed cells as a group.
    fn log_group(&mut self, cells: Vec<CellIndex>) -> PickedGroup {
        let group = PickedGroup(cells);
        log::trace!("picked group {:?}", group.cells());
        self.groups.push(group.clone());
        group
    }

    pub(crate) fn into_parts(self) -> (Board, Pcg64, Vec<PickedGroup>) {
        (self.board, self.rng, self.groups)
    }
}

/// A policy choosing which cells to reveal together.
pub trait GroupSelector: Debug + Send + Sync {
    /// Returns the name of the selector.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the selector.
    fn clone_box(&self) -> BoxedSelector;

    /// Picks a group, reveals its cells and logs it.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if no suitable group was found within the
    /// selector's bounds. Cells revealed before the failure stay revealed.
    fn select(&self, state: &mut SelectionState) -> Result<PickedGroup, SelectionError>;
}

/// A boxed selector.
pub type BoxedSelector = Box<dyn GroupSelector>;

impl Clone for BoxedSelector {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
