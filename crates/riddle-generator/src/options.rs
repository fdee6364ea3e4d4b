use riddle_core::{Kind, catalog};

use crate::{ConfigError, RiddleSeed};

/// Largest board on which every position is the far left, far right or middle.
const MAX_SINGLE_ITEM_SIZE: usize = 3;

/// Options controlling the shape of a generated riddle.
///
/// # Examples
///
/// ```
/// use riddle_generator::RiddleOptions;
///
/// let options = RiddleOptions {
///     size: 4,
///     ..RiddleOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// assert_eq!(options.same_person_groups(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleOptions {
    /// Number of people, i.e. items per category.
    pub size: usize,
    /// Number of categories (kinds) on the board.
    pub categories: usize,
    /// Number of items revealed together by one clue.
    pub group_size: usize,
    /// Number of cells left unrevealed, one question each.
    pub secrets: usize,
    /// Number of same-person clue groups to seed the riddle with.
    ///
    /// `None` means `size * categories / 3`.
    pub same_person_groups: Option<usize>,
    /// Seed of the random source. `None` draws a fresh seed per generation.
    pub seed: Option<RiddleSeed>,
}

impl Default for RiddleOptions {
    fn default() -> Self {
        Self {
            size: 5,
            categories: 5,
            group_size: 2,
            secrets: 2,
            same_person_groups: None,
            seed: None,
        }
    }
}

impl RiddleOptions {
    /// Returns the number of board cells, `size * categories`.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.size * self.categories
    }

    /// Returns the effective number of same-person groups.
    #[must_use]
    pub fn same_person_groups(&self) -> usize {
        self.same_person_groups.unwrap_or(self.cells() / 3)
    }

    /// Checks that a board with these options can be built.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking size, categories,
    /// group size and secrets in that order.
    ///
    /// Only groups of 2, or of 1 on boards of at most 3 people, can always be
    /// phrased as clues; other group sizes are rejected with
    /// [`ConfigError::UnsupportedGroupSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_size = catalog::min_capacity();
        if self.size == 0 || self.size > max_size {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                max: max_size,
            });
        }
        if self.categories == 0 || self.categories > Kind::ALL.len() {
            return Err(ConfigError::InvalidCategories {
                categories: self.categories,
                max: Kind::ALL.len(),
            });
        }
        if self.group_size == 0 || self.group_size > self.categories {
            return Err(ConfigError::InvalidGroupSize {
                group_size: self.group_size,
                categories: self.categories,
            });
        }
        let supported = match self.group_size {
            1 => self.size <= MAX_SINGLE_ITEM_SIZE,
            2 => true,
            _ => false,
        };
        if !supported {
            return Err(ConfigError::UnsupportedGroupSize {
                group_size: self.group_size,
                size: self.size,
            });
        }
        if self.secrets >= self.cells() {
            return Err(ConfigError::TooManySecrets {
                secrets: self.secrets,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}
