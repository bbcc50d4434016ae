#![cfg(test)]
use herocraft_common::hero::{Character, CharacterKind, UpgradeKind, UpgradeSet};
use herocraft_core::catalog::base_character;
use herocraft_core::compose::{apply_upgrades, compose};
use herocraft_core::forge::{ForgeRequest, forge};

/// A plain warrior, exactly as the catalog hands it out.
#[test]
fn warrior_base() {
    let warrior: Character = base_character(CharacterKind::Warrior);
    assert_eq!(warrior.label, "🏆 Warrior");
    assert_eq!(warrior.power, 100);
}

#[test]
fn warrior_with_fire() {
    let hero = apply_upgrades(Character::new("🏆 Warrior", 100), &[UpgradeKind::Fire]);
    assert_eq!(hero, Character::new("🏆 Warrior\nFire Enhanced 🔥", 130));
}

#[test]
fn archer_with_everything() {
    let hero = apply_upgrades(Character::new("🏹 Archer", 80), &UpgradeKind::ALL);

    assert_eq!(hero.power, 80 + 30 + 40 + 20 + 50);
    let appended: Vec<&str> = hero.lines().skip(1).collect();
    assert_eq!(
        appended,
        UpgradeKind::ALL.iter().map(|u| u.suffix()).collect::<Vec<_>>()
    );
}

#[test]
fn empty_upgrade_list_returns_base() {
    for kind in CharacterKind::ALL {
        let base = base_character(kind);
        assert_eq!(apply_upgrades(base.clone(), &[]), base);
    }
}

/// Checking the boxes in any order still applies Fire, Armor, Speed, Shield.
#[test]
fn selection_order_does_not_matter() {
    let clicked_backwards: UpgradeSet = UpgradeKind::ALL.into_iter().rev().collect();
    let clicked_forwards: UpgradeSet = UpgradeKind::ALL.into_iter().collect();

    let a = compose(CharacterKind::Mage, &clicked_backwards);
    let b = compose(CharacterKind::Mage, &clicked_forwards);

    assert_eq!(a, b);
    assert_eq!(a.upgrades, UpgradeKind::ALL.to_vec());
    assert_eq!(a.power(), 70 + 140);
}

#[test]
fn forging_is_repeatable() {
    let request = ForgeRequest::new(CharacterKind::Archer, UpgradeSet::from_flags(false, true, true, false));

    let first = forge(&request, None);
    let second = forge(&request, None);

    assert_eq!(first, second);
    assert_eq!(
        first.hero.summary(),
        "🏹 Archer\nArmor Upgraded 🛡\nSpeed Boosted 💥\nTotal Power: 140"
    );
}

#[test]
fn parsed_names_forge_the_same_hero() -> anyhow::Result<()> {
    let kind: CharacterKind = "mage".parse()?;
    let upgrades: UpgradeSet = ["shield", "fire"]
        .into_iter()
        .map(str::parse::<UpgradeKind>)
        .collect::<Result<_, _>>()?;

    let report = forge(&ForgeRequest::new(kind, upgrades), None);
    assert_eq!(report.hero.power(), 150);
    assert_eq!(
        report.portraits.iter().map(|p| p.file_name.as_str()).collect::<Vec<_>>(),
        vec!["mage_fire.png", "mage_shield.png"]
    );
    Ok(())
}
