//! Riddle board state.
//!
//! A [`Board`] is a grid of `categories × size` cells. Row `k` holds the items
//! of the `k`-th selected [`Kind`], column `p` describes person `p`. Each cell
//! carries a reveal counter: how many clues reference it so far. A cell whose
//! counter is still zero is *missing* and becomes a riddle question.
//!
//! Cells are addressed by a linear [`CellIndex`] in category-major order:
//!
//! ```text
//! kind_index = index / size
//! position   = index % size
//! ```
//!
//! # Examples
//!
//! ```
//! use riddle_core::{Board, CellIndex, Kind};
//!
//! let mut board = Board::new(
//!     vec![Kind::Pet, Kind::Beverage],
//!     vec![vec!["dog", "cat", "fish"], vec!["beer", "wine", "water"]],
//! );
//! assert_eq!(board.len(), 6);
//!
//! let idx = board.cell_index(1, 2);
//! assert_eq!(idx, CellIndex::new(5));
//! assert_eq!(board.item_at(idx).to_string(), "beverage:water");
//!
//! board.increment(idx);
//! assert_eq!(board.counter_at(idx), 1);
//! assert_eq!(board.missing_items().len(), 5);
//! ```

use std::fmt::{self, Display};

use rand::Rng;

use crate::{
    Kind,
    catalog::{self, CatalogError},
};

/// Linear address of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Wraps a raw linear index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw linear index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<CellIndex> for usize {
    fn from(idx: CellIndex) -> usize {
        idx.0
    }
}

/// A resolved view of one board cell.
///
/// Items are never stored; [`Board::item_at`] computes them on demand.
/// The [`Display`] implementation renders the display name used in clues,
/// `"<kind-label>:<value>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Category of the item.
    pub kind: Kind,
    /// Catalog name of the item.
    pub value: &'static str,
    /// Person the item belongs to, in `0..size`.
    pub position: usize,
    /// Cell the item was derived from.
    pub index: CellIndex,
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// The grid of reveal counters for one riddle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Kind>,
    items: Vec<Vec<&'static str>>,
    size: usize,
    counters: Vec<u32>,
}

impl Board {
    /// Creates a board from selected kinds and their per-person item names.
    ///
    /// All counters start at zero.
    ///
    /// # Panics
    ///
    /// Panics if `items` does not hold one row per kind, or if the rows do not
    /// all have the same length.
    #[must_use]
    pub fn new(categories: Vec<Kind>, items: Vec<Vec<&'static str>>) -> Self {
        assert_eq!(categories.len(), items.len(), "one item row per kind");
        let size = items.first().map_or(0, Vec::len);
        assert!(
            items.iter().all(|row| row.len() == size),
            "item rows must have equal length"
        );
        let counters = vec![0; categories.len() * size];
        Self {
            categories,
            items,
            size,
            counters,
        }
    }

    /// Creates a board with `categories` random kinds and `size` random items per kind.
    ///
    /// Kinds are drawn first, then the items of each kind in board order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog cannot supply enough kinds or
    /// items.
    pub fn random<R>(categories: usize, size: usize, rng: &mut R) -> Result<Self, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let kinds = catalog::select_categories(categories, rng)?;
        let items = kinds
            .iter()
            .map(|&kind| catalog::build_items(kind, size, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let mut board = Self::new(kinds, items);
        // `new` infers the size from the rows, which fails for zero categories.
        board.size = size;
        Ok(board)
    }

    /// Returns the number of cells, `categories * size`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns `true` if the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns the number of people (columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the selected kinds in row order.
    #[must_use]
    pub fn categories(&self) -> &[Kind] {
        &self.categories
    }

    /// Returns the item names of the row at `kind_index`, in position order.
    #[must_use]
    pub fn items_of(&self, kind_index: usize) -> &[&'static str] {
        &self.items[kind_index]
    }

    /// Returns the index of the cell at (`kind_index`, `position`).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn cell_index(&self, kind_index: usize, position: usize) -> CellIndex {
        assert!(kind_index < self.categories.len(), "kind index out of range");
        assert!(position < self.size, "position out of range");
        CellIndex(kind_index * self.size + position)
    }

    /// Returns an iterator over all cell indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = CellIndex> + use<> {
        (0..self.len()).map(CellIndex)
    }

    /// Returns all reveal counters in index order.
    #[must_use]
    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    /// Returns the reveal counter of a cell.
    #[must_use]
    pub fn counter_at(&self, idx: CellIndex) -> u32 {
        self.counters[idx.0]
    }

    /// Adds one to the reveal counter of a cell.
    pub fn increment(&mut self, idx: CellIndex) {
        self.counters[idx.0] += 1;
    }

    /// Resolves a cell index into its item.
    #[must_use]
    pub fn item_at(&self, idx: CellIndex) -> Item {
        let kind_index = idx.0 / self.size;
        let position = idx.0 % self.size;
        Item {
            kind: self.categories[kind_index],
            value: self.items[kind_index][position],
            position,
            index: idx,
        }
    }

    /// Returns the number of cells whose counter is zero.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.counters.iter().filter(|&&counter| counter == 0).count()
    }

    /// Returns all items whose counter is zero, in ascending index order.
    #[must_use]
    pub fn missing_items(&self) -> Vec<Item> {
        self.indices()
            .filter(|&idx| self.counter_at(idx) == 0)
            .map(|idx| self.item_at(idx))
            .collect()
    }
}
