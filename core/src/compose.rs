use std::fmt;

use herocraft_common::hero::{Character, CharacterKind, UpgradeKind, UpgradeSet};

use crate::catalog::base_character;

/// Stacks `upgrades` onto `base`, in the order given.
///
/// Every upgrade appends its suffix on a new line and adds its power delta.
/// Repeated entries are applied once per occurrence; power saturates at `u32::MAX`.
pub fn apply_upgrades(base: Character, upgrades: &[UpgradeKind]) -> Character {
    upgrades.iter().fold(base, |mut character, upgrade| {
        character.label.push('\n');
        character.label.push_str(upgrade.suffix());
        character.power = character.power.saturating_add(upgrade.power_delta());
        character
    })
}

/// A finished hero: the kind it was built from, the upgrades applied and the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedCharacter {
    pub kind: CharacterKind,
    pub upgrades: Vec<UpgradeKind>,
    pub character: Character,
}

impl ComposedCharacter {
    pub fn label(&self) -> &str {
        &self.character.label
    }

    pub fn power(&self) -> u32 {
        self.character.power
    }

    /// Description followed by the `Total Power: N` trailer.
    pub fn summary(&self) -> String {
        self.character.to_string()
    }
}

impl fmt::Display for ComposedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.character, f)
    }
}

/// Builds a hero from `kind`, applying the selected upgrades in canonical order.
pub fn compose(kind: CharacterKind, upgrades: &UpgradeSet) -> ComposedCharacter {
    let upgrades: Vec<UpgradeKind> = upgrades.to_vec();
    let character = apply_upgrades(base_character(kind), &upgrades);

    ComposedCharacter {
        kind,
        upgrades,
        character,
    }
}
