//! Riddle category representation.

use std::fmt::{self, Display};

/// A riddle category.
///
/// Every row of a riddle board holds the items of one kind, one item per
/// person. The declaration order is the canonical order used by
/// [`Kind::ALL`].
///
/// # Examples
///
/// ```
/// use riddle_core::Kind;
///
/// assert_eq!(Kind::Pet.label(), "pet");
/// assert_eq!(Kind::HouseColor.to_string(), "house-color");
/// assert_eq!(Kind::ALL.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Nationality of the person.
    Nationality,
    /// Color of the person's house.
    HouseColor,
    /// The person's pet.
    Pet,
    /// The person's job.
    Job,
    /// The person's favorite beverage.
    Beverage,
    /// The person's weapon.
    Weapon,
    /// The person's means of transport.
    Transport,
    /// The person's favorite room.
    Room,
}

impl Kind {
    /// All kinds in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Nationality,
        Self::HouseColor,
        Self::Pet,
        Self::Job,
        Self::Beverage,
        Self::Weapon,
        Self::Transport,
        Self::Room,
    ];

    /// Returns the human-readable label used in clues and questions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nationality => "nationality",
            Self::HouseColor => "house-color",
            Self::Pet => "pet",
            Self::Job => "job",
            Self::Beverage => "beverage",
            Self::Weapon => "weapon",
            Self::Transport => "transport",
            Self::Room => "room",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
