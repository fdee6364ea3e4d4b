use riddle_core::{Kind, catalog::CatalogError};

/// Invalid riddle options, detected before any randomness is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The number of people is zero or exceeds what every kind can supply.
    #[display("size must be in 1..={max}, got {size}")]
    InvalidSize {
        /// Requested number of people.
        size: usize,
        /// Largest supported number of people.
        max: usize,
    },
    /// The number of categories is zero or exceeds the number of kinds.
    #[display("categories must be in 1..={max}, got {categories}")]
    InvalidCategories {
        /// Requested number of categories.
        categories: usize,
        /// Number of known kinds.
        max: usize,
    },
    /// A clue group cannot be empty or span more kinds than the board has.
    #[display("group size must be in 1..={categories}, got {group_size}")]
    InvalidGroupSize {
        /// Requested group size.
        group_size: usize,
        /// Number of categories on the board.
        categories: usize,
    },
    /// Clue groups of this size cannot all be phrased on a board of this size.
    ///
    /// Groups of unrelated cells are phrased as a relation between exactly two
    /// people, or as a single item at an extremity. Single items only always
    /// sit at an extremity on boards of at most 3 people.
    #[display("group size {group_size} is not supported with {size} people")]
    UnsupportedGroupSize {
        /// Requested group size.
        group_size: usize,
        /// Number of people on the board.
        size: usize,
    },
    /// More secrets were requested than the board has cells.
    #[display("secrets must be less than the {cells} board cells, got {secrets}")]
    TooManySecrets {
        /// Requested number of secrets.
        secrets: usize,
        /// Number of board cells.
        cells: usize,
    },
}

/// A selection policy could not find a group to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    /// The bounded retry loop ran out of attempts.
    #[display("{selector} exhausted after {attempts} attempts")]
    Exhausted {
        /// Name of the selector.
        selector: &'static str,
        /// Number of attempts made.
        attempts: usize,
    },
    /// No cell has the reveal count the selector scans for.
    #[display("{selector} found no cell with reveal count {level}")]
    NoEligibleCell {
        /// Name of the selector.
        selector: &'static str,
        /// Reveal count the selector was looking for.
        level: u32,
    },
}

/// A picked group has a shape no clue phrasing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClueError {
    /// A single-cell group is not at the far left, far right or middle.
    #[display("single item at position {position} is not at an extremity of {size} people")]
    NotAtExtremity {
        /// Position of the item.
        position: usize,
        /// Number of people on the board.
        size: usize,
    },
    /// The group mixes positions and has a length other than two.
    #[display("no clue phrasing for a group of {len} items on different people")]
    UnsupportedShape {
        /// Number of items in the group.
        len: usize,
    },
}

/// Errors that can occur while generating a riddle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RiddleError {
    /// The options are invalid.
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
    /// The catalog could not supply the board.
    #[display("catalog error: {_0}")]
    Catalog(CatalogError),
    /// A selection policy gave up.
    #[display("generation failed: {_0}")]
    Selection(SelectionError),
    /// A picked group could not be phrased as a clue.
    #[display("unsupported clue: {_0}")]
    Clue(ClueError),
    /// Two missing items share a kind, so the questions have no unique answer.
    #[display("invalid riddle: multiple missing items share the category {kind}")]
    #[from(skip)]
    Unsolvable {
        /// The kind shared by at least two missing items.
        kind: Kind,
    },
}

impl RiddleError {
    /// Returns `true` if generating again with another seed may succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Selection(_) | Self::Unsolvable { .. })
    }
}
