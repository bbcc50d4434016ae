use herocraft_common::config::Config;
use herocraft_common::hero::{CharacterKind, UpgradeKind};
use herocraft_core::catalog::base_character;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{format, print};

pub fn roster(cfg: &Config) {
    let key_width: usize = CharacterKind::ALL
        .iter()
        .map(|kind| kind.label().width())
        .chain(UpgradeKind::ALL.iter().map(|upgrade| upgrade.title().width()))
        .max()
        .unwrap_or(0);

    for kind in CharacterKind::ALL {
        let character = base_character(kind);
        print::aligned_line(&character.label, character.power.to_string(), key_width);
    }

    print::header("upgrades", cfg.quiet);
    for upgrade in UpgradeKind::ALL {
        print::aligned_line(upgrade.title(), format::power_delta(upgrade.power_delta()), key_width);
    }
}
