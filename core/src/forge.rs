use std::path::PathBuf;

use herocraft_common::hero::{CharacterKind, UpgradeSet};
use tracing::debug;

use crate::assets::AssetStore;
use crate::compose::{ComposedCharacter, compose};
use crate::portrait::portrait_names;

/// What a front end asks for: a kind and the state of each upgrade flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForgeRequest {
    pub kind: CharacterKind,
    pub upgrades: UpgradeSet,
}

impl ForgeRequest {
    pub fn new(kind: CharacterKind, upgrades: UpgradeSet) -> Self {
        Self { kind, upgrades }
    }
}

/// One portrait slot. `path` is `None` when the image is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    pub file_name: String,
    pub path: Option<PathBuf>,
}

impl Portrait {
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeReport {
    pub hero: ComposedCharacter,
    pub portraits: Vec<Portrait>,
}

/// Composes the requested hero and resolves its portraits against `assets`.
pub fn forge(request: &ForgeRequest, assets: Option<&AssetStore>) -> ForgeReport {
    let hero = compose(request.kind, &request.upgrades);
    debug!(
        kind = %request.kind,
        upgrades = hero.upgrades.len(),
        power = hero.power(),
        "hero composed"
    );

    let portraits: Vec<Portrait> = portrait_names(request.kind, &request.upgrades)
        .into_iter()
        .map(|file_name| {
            let path = assets.and_then(|store| store.resolve(&file_name));
            Portrait { file_name, path }
        })
        .collect();

    ForgeReport { hero, portraits }
}
