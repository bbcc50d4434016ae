#![cfg(test)]
use std::fs;
use std::path::Path;

use herocraft_common::hero::{CharacterKind, UpgradeKind, UpgradeSet};
use herocraft_core::assets::{AssetError, AssetStore, BACKGROUND_FILE};
use herocraft_core::forge::{ForgeRequest, forge};

fn asset_dir(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for file in files {
        fs::write(dir.path().join(file), b"img").expect("write asset");
    }
    dir
}

fn available(dir: &Path, name: &str) -> Option<std::path::PathBuf> {
    Some(dir.join(name))
}

#[test]
fn startup_fails_without_background() {
    let dir = asset_dir(&["warrior_base.png"]);
    let result = AssetStore::open(dir.path());
    assert!(matches!(result, Err(AssetError::MissingBackground(_))));
}

#[test]
fn base_portrait_when_nothing_selected() {
    let dir = asset_dir(&[BACKGROUND_FILE, "warrior_base.png"]);
    let store = AssetStore::open(dir.path()).expect("assets");

    let report = forge(&ForgeRequest::new(CharacterKind::Warrior, UpgradeSet::empty()), Some(&store));

    assert_eq!(report.portraits.len(), 1);
    assert_eq!(report.portraits[0].file_name, "warrior_base.png");
    assert_eq!(report.portraits[0].path, available(dir.path(), "warrior_base.png"));
}

#[test]
fn missing_portraits_are_not_errors() {
    let dir = asset_dir(&[BACKGROUND_FILE, "archer_fire.png"]);
    let store = AssetStore::open(dir.path()).expect("assets");

    let upgrades: UpgradeSet = [UpgradeKind::Fire, UpgradeKind::Armor].into_iter().collect();
    let report = forge(&ForgeRequest::new(CharacterKind::Archer, upgrades), Some(&store));

    let resolved: Vec<bool> = report.portraits.iter().map(|p| p.is_available()).collect();
    assert_eq!(resolved, vec![true, false]);
    assert_eq!(report.hero.power(), 150);
}
