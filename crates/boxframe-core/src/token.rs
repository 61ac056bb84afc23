#![forbid(unsafe_code)]

//! Named color tokens and rating tiers.
//!
//! The layout engine never assigns raw color values. Cells carry token
//! names that the host styling layer resolves; a DOM host maps them to CSS
//! custom properties, a terminal host to a theme palette.

/// One of the five discrete rating levels.
///
/// Each tier has a fixed brightness token. The set is closed, so every
/// `match` over it is checked for exhaustiveness at compile time; there is
/// no "unknown tier" at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tier {
    /// Score 1.
    Learning = 1,
    /// Score 2.
    Familiar = 2,
    /// Score 3.
    Comfortable = 3,
    /// Score 4.
    Proficient = 4,
    /// Score 5.
    Fluent = 5,
}

impl Tier {
    /// All tiers in ascending score order.
    pub const ALL: [Self; 5] = [
        Self::Learning,
        Self::Familiar,
        Self::Comfortable,
        Self::Proficient,
        Self::Fluent,
    ];

    /// Numeric score, 1 through 5.
    #[inline]
    pub const fn score(self) -> u8 {
        self as u8
    }

    /// Look up a tier by numeric score.
    #[inline]
    pub const fn from_score(score: u8) -> Option<Self> {
        match score {
            1 => Some(Self::Learning),
            2 => Some(Self::Familiar),
            3 => Some(Self::Comfortable),
            4 => Some(Self::Proficient),
            5 => Some(Self::Fluent),
            _ => None,
        }
    }

    /// The brightness token for this tier.
    #[inline]
    pub const fn token(self) -> ColorToken {
        ColorToken::Tier(self)
    }
}

/// A named color resolved by the host styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Primary frame color.
    Blue,
    /// High-contrast foreground.
    White,
    /// Tiered brightness level for a rating.
    Tier(Tier),
}

impl ColorToken {
    /// Stable token name for the host styling contract.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::White => "white",
            Self::Tier(Tier::Learning) => "tier-1",
            Self::Tier(Tier::Familiar) => "tier-2",
            Self::Tier(Tier::Comfortable) => "tier-3",
            Self::Tier(Tier::Proficient) => "tier-4",
            Self::Tier(Tier::Fluent) => "tier-5",
        }
    }
}
