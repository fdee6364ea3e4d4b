//! Static item catalog.
//!
//! Each [`Kind`] owns a fixed master list of item names. A riddle draws a
//! shuffled subset of each list, one item per person. The tables are plain
//! `static` data, so concurrent generations never contend on them.

use rand::{Rng, seq::SliceRandom as _};

use crate::Kind;

const NATIONALITIES: &[&str] = &[
    "french",
    "english",
    "norvegian",
    "american",
    "portuguese",
    "spannish",
    "german",
    "scottish",
];

const HOUSE_COLORS: &[&str] = &[
    "red", "yellow", "pink", "orange", "purple", "magenta", "blue", "green",
];

const PETS: &[&str] = &[
    "dog", "cat", "horse", "poney", "fish", "whale", "beaver", "bird", "shark", "snake",
];

const JOBS: &[&str] = &[
    "teacher",
    "architect",
    "nurse",
    "scientist",
    "student",
    "cop",
    "designer",
    "docker",
];

const BEVERAGES: &[&str] = &[
    "beer",
    "wine",
    "water",
    "long-island-ice-tea",
    "coca-cola",
    "dr-pepper",
    "blue-lagoon",
    "fanta",
];

const WEAPONS: &[&str] = &[
    "sword",
    "gun",
    "bazooka",
    "grenade",
    "bomb",
    "assault-rifle",
    "shotgun",
    "knife",
    "lasergun",
];

const TRANSPORTS: &[&str] = &[
    "bus",
    "train",
    "car",
    "bike",
    "plane",
    "roller",
    "motorbike",
    "hoverboard",
];

const ROOMS: &[&str] = &[
    "kitchen",
    "bedroom",
    "lobby",
    "living-room",
    "veranda",
    "garden",
    "pool",
    "restroom",
    "bathroom",
];

/// Errors raised when a catalog request cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// More items were requested than the kind's master list holds.
    #[display("kind {kind} has only {capacity} items, {requested} requested")]
    NotEnoughItems {
        /// The kind whose list is too short.
        kind: Kind,
        /// Number of items requested.
        requested: usize,
        /// Length of the master list.
        capacity: usize,
    },
    /// More kinds were requested than exist.
    #[display("only {available} kinds exist, {requested} requested")]
    NotEnoughKinds {
        /// Number of kinds requested.
        requested: usize,
        /// Number of known kinds.
        available: usize,
    },
}

/// Returns the full master list of item names for `kind`.
#[must_use]
pub const fn master_list(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Nationality => NATIONALITIES,
        Kind::HouseColor => HOUSE_COLORS,
        Kind::Pet => PETS,
        Kind::Job => JOBS,
        Kind::Beverage => BEVERAGES,
        Kind::Weapon => WEAPONS,
        Kind::Transport => TRANSPORTS,
        Kind::Room => ROOMS,
    }
}

/// Returns how many distinct items `kind` can supply.
#[must_use]
pub const fn capacity(kind: Kind) -> usize {
    master_list(kind).len()
}

/// Returns the smallest capacity over all kinds.
///
/// A board size up to this value is valid whatever kinds get selected.
///
/// # Examples
///
/// ```
/// use riddle_core::catalog;
///
/// assert_eq!(catalog::min_capacity(), 8);
/// ```
#[must_use]
pub fn min_capacity() -> usize {
    Kind::ALL
        .into_iter()
        .map(capacity)
        .min()
        .unwrap_or_default()
}

/// Draws `size` distinct item names for `kind`.
///
/// The master list is shuffled uniformly, then truncated to its first `size`
/// entries.
///
/// # Errors
///
/// Returns [`CatalogError::NotEnoughItems`] if `size` exceeds the capacity of
/// `kind`.
pub fn build_items<R>(
    kind: Kind,
    size: usize,
    rng: &mut R,
) -> Result<Vec<&'static str>, CatalogError>
where
    R: Rng + ?Sized,
{
    let list = master_list(kind);
    if size > list.len() {
        return Err(CatalogError::NotEnoughItems {
            kind,
            requested: size,
            capacity: list.len(),
        });
    }
    let mut items = list.to_vec();
    items.shuffle(rng);
    items.truncate(size);
    Ok(items)
}

/// Draws `count` distinct kinds in random order.
///
/// # Errors
///
/// Returns [`CatalogError::NotEnoughKinds`] if `count` exceeds the number of
/// kinds.
pub fn select_categories<R>(count: usize, rng: &mut R) -> Result<Vec<Kind>, CatalogError>
where
    R: Rng + ?Sized,
{
    if count > Kind::ALL.len() {
        return Err(CatalogError::NotEnoughKinds {
            requested: count,
            available: Kind::ALL.len(),
        });
    }
    let mut kinds = Kind::ALL.to_vec();
    kinds.shuffle(rng);
    kinds.truncate(count);
    Ok(kinds)
}
