use rand::Rng as _;

use super::{BoxedSelector, GroupSelector, PickedGroup, SelectionState};
use crate::SelectionError;

const NAME: &str = "item at extremity";

/// Draws per reveal count before moving on to the next count.
const TRIES_PER_TARGET: usize = 100;

/// Reveal counts at or above this bound are never targeted.
const TARGET_LIMIT: u32 = 10;

/// A structural position a single-item clue can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremity {
    Left,
    Right,
    Middle,
}

impl Extremity {
    const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Returns the position of the extremity, or `None` for the middle of an
    /// even row.
    fn position(self, size: usize) -> Option<usize> {
        match self {
            Self::Left => Some(0),
            Self::Right => Some(size - 1),
            Self::Middle => (size % 2 == 1).then(|| (size - 1) / 2),
        }
    }
}

/// Picks a single cell at the far left, the far right or, on odd boards, the
/// middle of a random category.
///
/// The selector looks for a cell revealed exactly `target_counter` times. Each
/// try draws an extremity then a category; drawing the middle of an even board
/// wastes the try. After 100 failed tries the wanted count is raised by one,
/// up to a count of 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAtExtremity {
    target_counter: u32,
}

impl ItemAtExtremity {
    /// Creates a selector starting at reveal count `target_counter`.
    #[must_use]
    pub const fn new(target_counter: u32) -> Self {
        Self { target_counter }
    }
}

impl GroupSelector for ItemAtExtremity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSelector {
        Box::new(*self)
    }

    fn select(&self, state: &mut SelectionState) -> Result<PickedGroup, SelectionError> {
        let size = state.board.size();
        let categories = state.board.categories().len();

        let mut attempts = 0;
        for target in self.target_counter..TARGET_LIMIT {
            for _ in 0..TRIES_PER_TARGET {
                attempts += 1;
                let extremity = Extremity::ALL[state.rng.random_range(0..Extremity::ALL.len())];
                let kind_index = state.rng.random_range(0..categories);
                let Some(position) = extremity.position(size) else {
                    continue;
                };
                let idx = state.board.cell_index(kind_index, position);
                if state.board.counter_at(idx) == target {
                    return Ok(state.reveal_group(vec![idx]));
                }
            }
            log::trace!("{NAME}: no cell at reveal count {target}");
        }

        Err(SelectionError::Exhausted {
            selector: NAME,
            attempts,
        })
    }
}
