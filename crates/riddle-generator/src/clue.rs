//! Clue phrasing of picked groups.

use std::fmt::{self, Display};

use rand::Rng;
use riddle_core::{Board, Item};

use crate::{ClueError, PickedGroup};

/// A relational statement about the items of a picked group.
///
/// The [`Display`] implementation renders the clue sentence, naming items as
/// `"<kind-label>:<value>"`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use riddle_core::{Board, CellIndex, Kind};
/// use riddle_generator::{Clue, PickedGroup};
///
/// let board = Board::new(
///     vec![Kind::Pet, Kind::Job],
///     vec![vec!["dog", "cat", "fish"], vec!["cop", "nurse", "docker"]],
/// );
/// let mut rng = Pcg32::seed_from_u64(0);
///
/// let group = PickedGroup::new(vec![CellIndex::new(1), CellIndex::new(4)]);
/// let clue = Clue::from_group(&group, &board, &mut rng)?;
/// assert_eq!(clue.to_string(), "pet:cat == job:nurse");
///
/// let group = PickedGroup::new(vec![CellIndex::new(5)]);
/// let clue = Clue::from_group(&group, &board, &mut rng)?;
/// assert_eq!(clue.to_string(), "job:docker is on the far right");
/// # Ok::<(), riddle_generator::ClueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clue {
    /// The item belongs to the leftmost person.
    FarLeft(Item),
    /// The item belongs to the rightmost person.
    FarRight(Item),
    /// The item belongs to the middle person of an odd row.
    Middle(Item),
    /// All items belong to the same person.
    SamePerson(Vec<Item>),
    /// The two items belong to neighbors, side unspecified.
    SideOf(Item, Item),
    /// The first item's person is the left neighbor of the second's.
    DirectLeftOf(Item, Item),
    /// The first item's person is the right neighbor of the second's.
    DirectRightOf(Item, Item),
    /// The first item's person is somewhere left of the second's.
    LeftOf(Item, Item),
    /// The first item's person is somewhere right of the second's.
    RightOf(Item, Item),
}

impl Clue {
    /// Phrases a picked group as a clue.
    ///
    /// Rules, most specific first:
    ///
    /// 1. A single item is placed at the far left, the far right or the
    ///    middle, checked in that order.
    /// 2. Items of one person are stated equal, in group order.
    /// 3. A pair of neighbors flips a fair coin between the symmetric "on the
    ///    side of" and the directional "direct on the left/right of"; other
    ///    pairs are "on the left/right of".
    ///
    /// Only the neighbor rule draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::NotAtExtremity`] for a single item elsewhere, and
    /// [`ClueError::UnsupportedShape`] for a group that is empty or spans
    /// several people with other than two items.
    pub fn from_group<R>(group: &PickedGroup, board: &Board, rng: &mut R) -> Result<Self, ClueError>
    where
        R: Rng + ?Sized,
    {
        let items: Vec<Item> = group.cells().iter().map(|&idx| board.item_at(idx)).collect();
        let size = board.size();

        match items.as_slice() {
            [] => Err(ClueError::UnsupportedShape { len: 0 }),
            &[item] => {
                if item.position == 0 {
                    Ok(Self::FarLeft(item))
                } else if item.position == size - 1 {
                    Ok(Self::FarRight(item))
                } else if size % 2 == 1 && item.position == (size - 1) / 2 {
                    Ok(Self::Middle(item))
                } else {
                    Err(ClueError::NotAtExtremity {
                        position: item.position,
                        size,
                    })
                }
            }
            [first, rest @ ..] if rest.iter().all(|item| item.position == first.position) => {
                Ok(Self::SamePerson(items.clone()))
            }
            &[a, b] => {
                let adjacent = a.position.abs_diff(b.position) == 1;
                if adjacent && rng.random_bool(0.5) {
                    return Ok(Self::SideOf(a, b));
                }
                Ok(match (adjacent, a.position < b.position) {
                    (true, true) => Self::DirectLeftOf(a, b),
                    (true, false) => Self::DirectRightOf(a, b),
                    (false, true) => Self::LeftOf(a, b),
                    (false, false) => Self::RightOf(a, b),
                })
            }
            _ => Err(ClueError::UnsupportedShape { len: items.len() }),
        }
    }

    /// Returns the items the clue talks about, in group order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        match self {
            Self::FarLeft(item) | Self::FarRight(item) | Self::Middle(item) => vec![*item],
            Self::SamePerson(items) => items.clone(),
            Self::SideOf(a, b)
            | Self::DirectLeftOf(a, b)
            | Self::DirectRightOf(a, b)
            | Self::LeftOf(a, b)
            | Self::RightOf(a, b) => vec![*a, *b],
        }
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FarLeft(item) => write!(f, "{item} is on the far left"),
            Self::FarRight(item) => write!(f, "{item} is on the far right"),
            Self::Middle(item) => write!(f, "{item} is in the middle"),
            Self::SamePerson(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" == ")?;
                    }
                    Display::fmt(item, f)?;
                }
                Ok(())
            }
            Self::SideOf(a, b) => write!(f, "{a} is on the side of {b}"),
            Self::DirectLeftOf(a, b) => write!(f, "{a} is direct on the left of {b}"),
            Self::DirectRightOf(a, b) => write!(f, "{a} is direct on the right of {b}"),
            Self::LeftOf(a, b) => write!(f, "{a} is on the left of {b}"),
            Self::RightOf(a, b) => write!(f, "{a} is on the right of {b}"),
        }
    }
}

/// Phrases a missing item as a riddle question.
///
/// # Examples
///
/// ```
/// use riddle_core::{CellIndex, Item, Kind};
///
/// let item = Item {
///     kind: Kind::Pet,
///     value: "zebra",
///     position: 0,
///     index: CellIndex::new(0),
/// };
/// assert_eq!(riddle_generator::question(&item), "Where is pet:zebra ?");
/// ```
#[must_use]
pub fn question(item: &Item) -> String {
    format!("Where is {item} ?")
}
