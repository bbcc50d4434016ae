use std::str::FromStr;

use super::ParseKindError;

/// An upgrade that can be stacked onto a character.
///
/// The declaration order is the canonical application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpgradeKind {
    Fire,
    Armor,
    Speed,
    Shield,
}

impl UpgradeKind {
    /// Every upgrade, in canonical application order.
    pub const ALL: [UpgradeKind; 4] = [Self::Fire, Self::Armor, Self::Speed, Self::Shield];

    /// The line appended to a character's description.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Fire => "Fire Enhanced 🔥",
            Self::Armor => "Armor Upgraded 🛡",
            Self::Speed => "Speed Boosted 💥",
            Self::Shield => "Magic Shield Equipped 🔮",
        }
    }

    pub const fn power_delta(self) -> u32 {
        match self {
            Self::Fire => 30,
            Self::Armor => 40,
            Self::Speed => 20,
            Self::Shield => 50,
        }
    }

    /// Title shown when offering the upgrade.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fire => "🔥 Fire Enchantment",
            Self::Armor => "🛡\u{fe0f} Armor Upgrade",
            Self::Speed => "💥 Speed Boost",
            Self::Shield => "🔮 Magic Shield",
        }
    }

    /// Lower-case name used to build portrait file names.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Armor => "armor",
            Self::Speed => "speed",
            Self::Shield => "shield",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl FromStr for UpgradeKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|upgrade| upgrade.resource_name() == lower)
            .ok_or_else(|| ParseKindError::UnknownUpgrade(s.to_string()))
    }
}

/// The on/off state of every upgrade flag.
///
/// Each upgrade is either selected or not, so a set never yields the same
/// upgrade twice, and [`UpgradeSet::ordered`] always walks the canonical order
/// no matter in which order the flags were switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpgradeSet {
    bits: u8,
}

impl UpgradeSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        UpgradeKind::ALL.into_iter().collect()
    }

    /// Builds a set from the four checkbox states.
    pub fn from_flags(fire: bool, armor: bool, speed: bool, shield: bool) -> Self {
        let mut set = Self::empty();
        set.set(UpgradeKind::Fire, fire);
        set.set(UpgradeKind::Armor, armor);
        set.set(UpgradeKind::Speed, speed);
        set.set(UpgradeKind::Shield, shield);
        set
    }

    pub fn insert(&mut self, upgrade: UpgradeKind) {
        self.bits |= upgrade.bit();
    }

    pub fn remove(&mut self, upgrade: UpgradeKind) {
        self.bits &= !upgrade.bit();
    }

    pub fn set(&mut self, upgrade: UpgradeKind, selected: bool) {
        if selected {
            self.insert(upgrade);
        } else {
            self.remove(upgrade);
        }
    }

    pub const fn contains(&self, upgrade: UpgradeKind) -> bool {
        self.bits & upgrade.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Selected upgrades in canonical order: Fire, Armor, Speed, Shield.
    pub fn ordered(&self) -> impl Iterator<Item = UpgradeKind> {
        let set: UpgradeSet = *self;
        UpgradeKind::ALL
            .into_iter()
            .filter(move |upgrade| set.contains(*upgrade))
    }

    pub fn to_vec(&self) -> Vec<UpgradeKind> {
        self.ordered().collect()
    }
}

impl FromIterator<UpgradeKind> for UpgradeSet {
    fn from_iter<I: IntoIterator<Item = UpgradeKind>>(iter: I) -> Self {
        let mut set = Self::empty();
        for upgrade in iter {
            set.insert(upgrade);
        }
        set
    }
}
