mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Commands, forge, roster};
use herocraft_common::config::Config;
use herocraft_common::success;
use herocraft_core::assets::AssetStore;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging()?;

    let assets: Option<AssetStore> = load_assets(&cfg)?;

    print::banner(cfg.no_banner, cfg.quiet);
    if let Some(store) = assets.as_ref().filter(|_| cfg.quiet == 0) {
        success!("Assets loaded from {}", store.root().display());
    }

    match commands.command {
        Commands::Forge { kind, upgrades } => {
            print::header("forging hero", cfg.quiet);
            forge::forge(kind, upgrades.into(), assets.as_ref(), &cfg);
        }
        Commands::Roster => {
            print::header("roster", cfg.quiet);
            roster::roster(&cfg);
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

/// Opens the asset directory, if any. Runs before anything is printed.
fn load_assets(cfg: &Config) -> anyhow::Result<Option<AssetStore>> {
    cfg.assets
        .as_ref()
        .map(AssetStore::open)
        .transpose()
        .context("cannot load assets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use herocraft_core::assets::{AssetError, BACKGROUND_FILE};

    fn config_with(assets: Option<std::path::PathBuf>) -> Config {
        Config { assets, ..Config::default() }
    }

    #[test]
    fn no_asset_directory_is_fine() {
        assert!(load_assets(&config_with(None)).unwrap().is_none());
    }

    #[test]
    fn directory_without_background_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_assets(&config_with(Some(dir.path().to_path_buf()))).unwrap_err();

        assert_eq!(err.to_string(), "cannot load assets");
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::MissingBackground(_))
        ));
    }

    #[test]
    fn directory_with_background_opens() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BACKGROUND_FILE), b"jpg").unwrap();

        let store = load_assets(&config_with(Some(dir.path().to_path_buf()))).unwrap();
        assert_eq!(store.map(|s| s.root().to_path_buf()), Some(dir.path().to_path_buf()));
    }
}
