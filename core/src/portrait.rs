use herocraft_common::hero::{CharacterKind, UpgradeSet};

/// Suffix used when no upgrade is selected.
pub const BASE_PORTRAIT: &str = "base";

/// File name of one portrait: `<kind>_<part>.png`.
pub fn portrait_name(kind: CharacterKind, part: &str) -> String {
    format!("{}_{}.png", kind.resource_name(), part)
}

/// Portrait file names for a selection, one per upgrade in canonical order.
///
/// An empty selection maps to the single `<kind>_base.png` portrait.
pub fn portrait_names(kind: CharacterKind, upgrades: &UpgradeSet) -> Vec<String> {
    if upgrades.is_empty() {
        return vec![portrait_name(kind, BASE_PORTRAIT)];
    }

    upgrades
        .ordered()
        .map(|upgrade| portrait_name(kind, upgrade.resource_name()))
        .collect()
}
