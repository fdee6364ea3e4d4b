use rand::Rng as _;
use riddle_core::CellIndex;

use super::{BoxedSelector, GroupSelector, PickedGroup, SelectionState};
use crate::SelectionError;

const NAME: &str = "available group";

/// Picks `group_size` cells anywhere on the board that were revealed exactly
/// `max_level - 1` times.
///
/// Every slot draws a scan length `n` in `1..=board.len()`, then walks the
/// board cyclically from index 0 and takes the `n`-th cell at the wanted
/// reveal count. When few cells are eligible the walk wraps around several
/// times, so the pick is not uniform over eligible cells.
///
/// A picked cell is revealed before the next slot is scanned, so a group never
/// holds the same cell twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableGroup {
    max_level: u32,
}

impl AvailableGroup {
    /// Creates a selector picking cells revealed exactly `max_level - 1` times.
    #[must_use]
    pub const fn new(max_level: u32) -> Self {
        Self { max_level }
    }
}

impl GroupSelector for AvailableGroup {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSelector {
        Box::new(*self)
    }

    fn select(&self, state: &mut SelectionState) -> Result<PickedGroup, SelectionError> {
        let no_eligible = SelectionError::NoEligibleCell {
            selector: NAME,
            level: self.max_level.saturating_sub(1),
        };
        let Some(wanted) = self.max_level.checked_sub(1) else {
            return Err(no_eligible);
        };

        let len = state.board.len();
        let mut picked = Vec::with_capacity(state.group_size());
        for _ in 0..state.group_size() {
            if !state.board.counters().contains(&wanted) {
                return Err(no_eligible);
            }
            let scan = state.rng.random_range(1..=len);
            let board = &state.board;
            let idx = (0..len)
                .cycle()
                .map(CellIndex::new)
                .filter(|&idx| board.counter_at(idx) == wanted)
                .nth(scan - 1)
                .ok_or(no_eligible)?;
            state.board.increment(idx);
            picked.push(idx);
        }
        Ok(state.log_group(picked))
    }
}
