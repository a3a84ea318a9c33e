use std::fmt;

use serde::{Deserialize, Serialize};

/// One symbol of a binary rule.
///
/// Condition positions may hold any of the three symbols; output positions
/// only ever hold [`Gene::Zero`] or [`Gene::One`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    Zero,
    One,
    Wildcard,
}

impl Gene {
    /// Symbols allowed at a condition position.
    pub const CONDITION_SYMBOLS: [Self; 3] = [Self::Zero, Self::One, Self::Wildcard];
    /// Symbols allowed at an output position.
    pub const OUTPUT_SYMBOLS: [Self; 2] = [Self::Zero, Self::One];

    #[must_use]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }

    /// Returns the bit this gene stands for, or `None` for the wildcard.
    #[must_use]
    pub fn as_bit(self) -> Option<bool> {
        match self {
            Self::Zero => Some(false),
            Self::One => Some(true),
            Self::Wildcard => None,
        }
    }

    /// Returns `true` if this gene accepts `bit`.
    #[must_use]
    pub fn matches(self, bit: bool) -> bool {
        self.as_bit().is_none_or(|b| b == bit)
    }

    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self == Self::Wildcard
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Wildcard => '#',
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
