//! # Hero Models
//!
//! The closed vocabulary of the forge.
//!
//! * [`CharacterKind`]: the three base characters and their fixed power.
//! * [`UpgradeKind`]: the four upgrades, each adding a fixed power delta and
//!   one description line.
//! * [`UpgradeSet`]: which upgrades a caller has switched on.
//! * [`Character`]: the `(label, power)` value flowing through composition.

pub mod character;
pub mod kind;
pub mod upgrade;

pub use character::Character;
pub use kind::CharacterKind;
pub use upgrade::{UpgradeKind, UpgradeSet};

use thiserror::Error;

/// Returned when a name does not match any known kind or upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown character kind '{0}' (expected warrior, archer or mage)")]
    UnknownCharacter(String),
    #[error("unknown upgrade '{0}' (expected fire, armor, speed or shield)")]
    UnknownUpgrade(String),
}
