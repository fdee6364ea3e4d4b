use rand::{Rng as _, seq::SliceRandom as _};

use super::{BoxedSelector, GroupSelector, PickedGroup, SelectionState};
use crate::SelectionError;

const NAME: &str = "same person group";

/// Retry bound; failing this many draws in a row means the board is saturated.
const MAX_ATTEMPTS: usize = 42;

/// Picks `group_size` cells describing one person.
///
/// Each attempt draws a person and a random order of the board's kinds, then
/// collects that person's cells whose reveal counter is at most `max_level`,
/// in kind order, until the group is full. An attempt that cannot fill the
/// group is discarded and a new person is drawn.
///
/// The resulting clue reads "these items describe the same person".
///
/// # Examples
///
/// ```
/// use riddle_core::{Board, Kind};
/// use riddle_generator::{
///     RiddleSeed,
///     selector::{GroupSelector, SamePersonGroup, SelectionState},
/// };
///
/// let board = Board::new(
///     vec![Kind::Pet, Kind::Job],
///     vec![vec!["dog", "cat"], vec!["cop", "nurse"]],
/// );
/// let mut state = SelectionState::new(board, 2, RiddleSeed::from(1));
/// let group = SamePersonGroup::new(0).select(&mut state)?;
///
/// let [a, b] = group.cells() else { unreachable!() };
/// assert_eq!(a.index() % 2, b.index() % 2);
/// # Ok::<(), riddle_generator::SelectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamePersonGroup {
    max_level: u32,
}

impl SamePersonGroup {
    /// Creates a selector accepting cells revealed at most `max_level` times.
    #[must_use]
    pub const fn new(max_level: u32) -> Self {
        Self { max_level }
    }
}

impl GroupSelector for SamePersonGroup {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSelector {
        Box::new(*self)
    }

    fn select(&self, state: &mut SelectionState) -> Result<PickedGroup, SelectionError> {
        let size = state.board.size();
        let mut kinds: Vec<usize> = (0..state.board.categories().len()).collect();

        for _ in 0..MAX_ATTEMPTS {
            let person = state.rng.random_range(0..size);
            kinds.shuffle(&mut state.rng);

            let picked: Vec<_> = kinds
                .iter()
                .map(|&kind_index| state.board.cell_index(kind_index, person))
                .filter(|&idx| state.board.counter_at(idx) <= self.max_level)
                .take(state.group_size())
                .collect();
            if picked.len() == state.group_size() {
                return Ok(state.reveal_group(picked));
            }
        }

        Err(SelectionError::Exhausted {
            selector: NAME,
            attempts: MAX_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::testing;

    #[test]
    fn test_picks_distinct_kinds_of_one_person() {
        let mut state = testing::state(5, 3, 7);
        for _ in 0..4 {
            let group = SamePersonGroup::new(u32::MAX).select(&mut state).unwrap();
            assert_eq!(group.len(), 3);
            let items: Vec<_> = group
                .cells()
                .iter()
                .map(|&idx| state.board().item_at(idx))
                .collect();
            assert!(items.iter().all(|item| item.position == items[0].position));
            let mut kinds: Vec<_> = items.iter().map(|item| item.kind).collect();
            kinds.sort();
            kinds.dedup();
            assert_eq!(kinds.len(), 3);
        }
        assert_eq!(state.groups().len(), 4);
    }

    #[test]
    fn test_increments_each_picked_cell_once() {
        let mut state = testing::state(4, 2, 3);
        let group = SamePersonGroup::new(0).select(&mut state).unwrap();
        for idx in state.board().indices() {
            let expected = u32::from(group.cells().contains(&idx));
            assert_eq!(state.board().counter_at(idx), expected);
        }
        assert_eq!(state.groups(), std::slice::from_ref(&group));
    }

    #[test]
    fn test_respects_max_level() {
        let mut state = testing::state(3, 2, 11);
        // Reveal every cell of person 0 and person 1 once
        for kind_index in 0..3 {
            for person in 0..2 {
                let idx = state.board.cell_index(kind_index, person);
                state.board.increment(idx);
            }
        }
        let group = SamePersonGroup::new(0).select(&mut state).unwrap();
        for &idx in group.cells() {
            assert_eq!(state.board().item_at(idx).position, 2);
            assert_eq!(state.board().counter_at(idx), 1);
        }
    }

    #[test]
    fn test_exhausts_on_saturated_board() {
        let mut state = testing::state(5, 2, 1);
        testing::reveal_all(&mut state, 1);
        let before = state.board().counters().to_vec();

        let err = SamePersonGroup::new(0).select(&mut state).unwrap_err();
        assert_eq!(
            err,
            SelectionError::Exhausted {
                selector: "same person group",
                attempts: 42
            }
        );
        assert_eq!(state.board().counters(), before.as_slice());
        assert!(state.groups().is_empty());
    }
}
