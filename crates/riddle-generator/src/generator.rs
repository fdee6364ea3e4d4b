use std::collections::HashSet;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use riddle_core::{Board, Item};

use crate::{
    Clue, ConfigError, PickedGroup, RiddleError, RiddleOptions, RiddleSeed, SelectionError,
    clue,
    selector::{
        AvailableGroup, BoxedSelector, GroupSelector, ItemAtExtremity, SamePersonGroup,
        SelectionState,
    },
};

/// How many times a [`Phase`] runs its selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Run exactly this many times.
    Times(usize),
    /// Run while more than this many cells are missing.
    WhileMissingAbove(usize),
}

/// One step of the generation schedule.
#[derive(Debug, Clone)]
pub struct Phase {
    name: &'static str,
    selector: BoxedSelector,
    repeat: Repeat,
}

impl Phase {
    /// Creates a phase running `selector` as often as `repeat` says.
    #[must_use]
    pub fn new(name: &'static str, selector: BoxedSelector, repeat: Repeat) -> Self {
        Self {
            name,
            selector,
            repeat,
        }
    }

    /// Returns the name of the phase.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the selector the phase runs.
    #[must_use]
    pub fn selector(&self) -> &dyn GroupSelector {
        self.selector.as_ref()
    }

    /// Returns the repetition rule of the phase.
    #[must_use]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Runs the phase and returns the number of groups it picked.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectionError`] raised by the selector.
    pub fn run(&self, state: &mut SelectionState) -> Result<usize, SelectionError> {
        let mut picked = 0;
        match self.repeat {
            Repeat::Times(count) => {
                for _ in 0..count {
                    self.selector.select(state)?;
                    picked += 1;
                }
            }
            Repeat::WhileMissingAbove(threshold) => {
                while state.board().missing_count() > threshold {
                    self.selector.select(state)?;
                    picked += 1;
                }
            }
        }
        log::debug!(
            "phase {}: {picked} groups via {}, {} cells missing",
            self.name,
            self.selector.name(),
            state.board().missing_count()
        );
        Ok(picked)
    }
}

/// Returns the generation schedule for `options`.
///
/// 1. *seeding*: `same_person_groups` same-person groups among unrevealed cells
/// 2. *filling*: groups of unrevealed cells until at most `secrets + 1` are missing
/// 3. *anchoring*: single extremity cells until `secrets` are missing
/// 4. *topping up*: 3 groups of cells revealed once
/// 5. *extra anchoring*: 3 single extremity cells revealed once
#[must_use]
pub fn schedule(options: &RiddleOptions) -> Vec<Phase> {
    vec![
        Phase::new(
            "seeding",
            Box::new(SamePersonGroup::new(0)),
            Repeat::Times(options.same_person_groups()),
        ),
        Phase::new(
            "filling",
            Box::new(AvailableGroup::new(1)),
            Repeat::WhileMissingAbove(options.secrets + 1),
        ),
        Phase::new(
            "anchoring",
            Box::new(ItemAtExtremity::new(0)),
            Repeat::WhileMissingAbove(options.secrets),
        ),
        Phase::new(
            "topping up",
            Box::new(AvailableGroup::new(2)),
            Repeat::Times(3),
        ),
        Phase::new(
            "extra anchoring",
            Box::new(ItemAtExtremity::new(1)),
            Repeat::Times(3),
        ),
    ]
}

/// A generated riddle.
#[derive(Debug, Clone)]
pub struct GeneratedRiddle {
    /// The seed that reproduces this riddle with the same options.
    pub seed: RiddleSeed,
    /// The final board, counters included.
    pub board: Board,
    /// The picked groups in clue order.
    pub groups: Vec<PickedGroup>,
    /// One clue per picked group.
    pub clues: Vec<Clue>,
    /// The unrevealed items, in board order.
    pub missing: Vec<Item>,
}

impl GeneratedRiddle {
    /// Returns the clue sentences.
    #[must_use]
    pub fn facts(&self) -> Vec<String> {
        self.clues.iter().map(ToString::to_string).collect()
    }

    /// Returns one question per missing item.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.missing.iter().map(clue::question).collect()
    }
}

/// Generates riddles from validated options.
///
/// # Examples
///
/// ```
/// use riddle_generator::{RiddleGenerator, RiddleOptions, RiddleSeed};
///
/// let generator = RiddleGenerator::new(RiddleOptions::default())?;
/// let seed = RiddleSeed::from(1);
/// match generator.generate_with_seed(seed) {
///     Ok(riddle) => {
///         assert_eq!(riddle.missing.len(), 2);
///         assert_eq!(riddle.facts().len(), riddle.groups.len());
///     }
///     // Some seeds lead to an unusable riddle; try another one
///     Err(err) => assert!(err.is_recoverable()),
/// }
/// # Ok::<(), riddle_generator::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RiddleGenerator {
    options: RiddleOptions,
    schedule: Vec<Phase>,
}

impl RiddleGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the options are invalid.
    pub fn new(options: RiddleOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let schedule = schedule(&options);
        Ok(Self { options, schedule })
    }

    /// Returns the options the generator was built with.
    #[must_use]
    pub fn options(&self) -> &RiddleOptions {
        &self.options
    }

    /// Returns the generation schedule.
    #[must_use]
    pub fn schedule(&self) -> &[Phase] {
        &self.schedule
    }

    /// Generates a riddle with the configured seed, or a fresh one if none was set.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_seed`].
    pub fn generate(&self) -> Result<GeneratedRiddle, RiddleError> {
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        self.generate_with_seed(seed)
    }

    /// Generates a riddle deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`RiddleError::Selection`] if a selector gives up,
    /// [`RiddleError::Unsolvable`] if two missing items share a kind, and
    /// [`RiddleError::Clue`] if a group cannot be phrased. The first two are
    /// [recoverable](RiddleError::is_recoverable) with another seed.
    pub fn generate_with_seed(&self, seed: RiddleSeed) -> Result<GeneratedRiddle, RiddleError> {
        let mut rng = Pcg64::from_seed(seed.bytes());
        let board = Board::random(self.options.categories, self.options.size, &mut rng)?;
        let mut state = SelectionState::with_rng(board, self.options.group_size, rng);

        for phase in &self.schedule {
            phase.run(&mut state)?;
        }

        let (board, mut rng, groups) = state.into_parts();
        let missing = board.missing_items();
        check_missing_kinds(&missing)?;

        let clues = groups
            .iter()
            .map(|group| Clue::from_group(group, &board, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "riddle {seed}: {} clues, {} questions",
            clues.len(),
            missing.len()
        );

        Ok(GeneratedRiddle {
            seed,
            board,
            groups,
            clues,
            missing,
        })
    }
}

/// Checks that no two missing items share a kind.
///
/// # Errors
///
/// Returns [`RiddleError::Unsolvable`] naming the first repeated kind.
pub fn check_missing_kinds(missing: &[Item]) -> Result<(), RiddleError> {
    let mut seen = HashSet::with_capacity(missing.len());
    for item in missing {
        if !seen.insert(item.kind) {
            log::debug!("rejected riddle: several missing {} items", item.kind);
            return Err(RiddleError::Unsolvable { kind: item.kind });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use riddle_core::{CellIndex, Kind};

    use super::*;

    fn item(kind: Kind, position: usize) -> Item {
        Item {
            kind,
            value: "x",
            position,
            index: CellIndex::new(position),
        }
    }

    #[test]
    fn test_schedule_shape() {
        let options = RiddleOptions::default();
        let phases = schedule(&options);
        let summary: Vec<_> = phases
            .iter()
            .map(|phase| (phase.name(), phase.selector().name(), phase.repeat()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("seeding", "same person group", Repeat::Times(8)),
                ("filling", "available group", Repeat::WhileMissingAbove(3)),
                ("anchoring", "item at extremity", Repeat::WhileMissingAbove(2)),
                ("topping up", "available group", Repeat::Times(3)),
                ("extra anchoring", "item at extremity", Repeat::Times(3)),
            ]
        );
    }

    #[test]
    fn test_check_missing_kinds() {
        assert!(check_missing_kinds(&[]).is_ok());
        assert!(check_missing_kinds(&[item(Kind::Pet, 0), item(Kind::Job, 0)]).is_ok());
        assert_eq!(
            check_missing_kinds(&[item(Kind::Pet, 0), item(Kind::Job, 1), item(Kind::Pet, 3)]),
            Err(RiddleError::Unsolvable { kind: Kind::Pet })
        );
    }

    #[test]
    fn test_unsolvable_message() {
        let err = RiddleError::Unsolvable {
            kind: Kind::Beverage,
        };
        assert_eq!(
            err.to_string(),
            "invalid riddle: multiple missing items share the category beverage"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = RiddleOptions {
            size: 0,
            ..RiddleOptions::default()
        };
        assert!(matches!(
            RiddleGenerator::new(options),
            Err(ConfigError::InvalidSize { size: 0, .. })
        ));
    }

    #[test]
    fn test_new_rejects_unphrasable_group_sizes() {
        for (size, group_size) in [(5, 1), (5, 3), (8, 4)] {
            let options = RiddleOptions {
                size,
                group_size,
                ..RiddleOptions::default()
            };
            assert_eq!(
                RiddleGenerator::new(options).map(|_| ()),
                Err(ConfigError::UnsupportedGroupSize { group_size, size })
            );
        }
    }

    #[test]
    fn test_single_item_groups_on_small_board() {
        let generator = RiddleGenerator::new(RiddleOptions {
            size: 3,
            group_size: 1,
            ..RiddleOptions::default()
        })
        .unwrap();
        for seed in 0..20 {
            match generator.generate_with_seed(RiddleSeed::from(seed)) {
                Ok(riddle) => assert!(riddle.groups.iter().all(|group| group.len() == 1)),
                Err(err) => assert!(err.is_recoverable(), "seed {seed}: {err}"),
            }
        }
    }

    #[test]
    fn test_configured_seed_is_used() {
        let seed = RiddleSeed::from(5);
        let generator = RiddleGenerator::new(RiddleOptions {
            seed: Some(seed),
            ..RiddleOptions::default()
        })
        .unwrap();
        let first = generator.generate().map(|riddle| riddle.facts());
        let second = generator.generate_with_seed(seed).map(|riddle| riddle.facts());
        assert_eq!(first, second);
    }

    #[test]
    fn test_phase_run_counts_groups() {
        let board = Board::new(
            vec![Kind::Pet, Kind::Job],
            vec![vec!["dog", "cat", "fish"], vec!["cop", "nurse", "docker"]],
        );
        let mut state = SelectionState::new(board, 2, RiddleSeed::from(3));
        let phase = Phase::new(
            "test",
            Box::new(AvailableGroup::new(1)),
            Repeat::WhileMissingAbove(2),
        );
        assert_eq!(phase.run(&mut state), Ok(2));
        assert_eq!(state.board().missing_count(), 2);
        assert_eq!(state.groups().len(), 2);
    }
}
