pub mod forge;
pub mod roster;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use herocraft_common::config::Config;
use herocraft_common::hero::{CharacterKind, UpgradeSet};

#[derive(Parser)]
#[command(name = "herocraft")]
#[command(about = "Forge a hero from a base character and stacked upgrades.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less; repeat for only the summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Directory with background.jpg and the <kind>_<upgrade>.png portraits
    #[arg(short, long, global = true)]
    pub assets: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a hero and show its description, power and portraits
    #[command(alias = "f")]
    Forge {
        /// warrior, archer or mage
        kind: CharacterKind,
        #[command(flatten)]
        upgrades: UpgradeFlags,
    },
    /// List the base characters and the available upgrades
    #[command(alias = "r")]
    Roster,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct UpgradeFlags {
    /// Fire Enchantment (+30)
    #[arg(long)]
    pub fire: bool,
    /// Armor Upgrade (+40)
    #[arg(long)]
    pub armor: bool,
    /// Speed Boost (+20)
    #[arg(long)]
    pub speed: bool,
    /// Magic Shield (+50)
    #[arg(long)]
    pub shield: bool,
}

impl From<UpgradeFlags> for UpgradeSet {
    fn from(flags: UpgradeFlags) -> Self {
        UpgradeSet::from_flags(flags.fire, flags.armor, flags.speed, flags.shield)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet.min(2),
            assets: self.assets.clone(),
        }
    }
}
