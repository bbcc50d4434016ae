use std::fmt;
use std::str::FromStr;

use super::ParseKindError;

/// One of the three base characters a hero is forged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterKind {
    Warrior,
    Archer,
    Mage,
}

impl CharacterKind {
    /// Every kind, in menu order.
    pub const ALL: [CharacterKind; 3] = [Self::Warrior, Self::Archer, Self::Mage];

    /// Display label, glyph included.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warrior => "🏆 Warrior",
            Self::Archer => "🏹 Archer",
            Self::Mage => "🧝\u{fe0f} Mage",
        }
    }

    pub const fn base_power(self) -> u32 {
        match self {
            Self::Warrior => 100,
            Self::Archer => 80,
            Self::Mage => 70,
        }
    }

    /// Plain menu name without the glyph.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Archer => "Archer",
            Self::Mage => "Mage",
        }
    }

    /// Lower-case name used to build portrait file names.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Archer => "archer",
            Self::Mage => "mage",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterKind {
    type Err = ParseKindError;

    /// Parses a kind name case-insensitively ("warrior", "Archer", "MAGE").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.resource_name() == lower)
            .ok_or_else(|| ParseKindError::UnknownCharacter(s.to_string()))
    }
}
