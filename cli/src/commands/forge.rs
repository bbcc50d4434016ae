use colored::*;

use crate::hprint;
use crate::terminal::{colors, format, print};
use herocraft_common::config::Config;
use herocraft_common::hero::{CharacterKind, UpgradeSet};
use herocraft_common::warn;
use herocraft_core::assets::AssetStore;
use herocraft_core::forge::{self, ForgeReport, ForgeRequest};

pub fn forge(kind: CharacterKind, upgrades: UpgradeSet, assets: Option<&AssetStore>, cfg: &Config) {
    let request = ForgeRequest::new(kind, upgrades);
    let report: ForgeReport = forge::forge(&request, assets);

    match cfg.quiet {
        0 => {
            print_description(&report);
            print_power(&report);
            print_portraits(&report, assets.is_some());
        }
        1 => {
            print_description(&report);
            print::print(&format!("{}", format::total_power(report.hero.power())));
        }
        _ => print::print(&report.hero.summary()),
    }
}

fn print_description(report: &ForgeReport) {
    let mut lines = report.hero.character.lines();

    if let Some(base) = lines.next() {
        print::print_status(format!("{}", base.color(colors::PRIMARY).bold()));
    }
    for line in lines {
        print::print_status(format!("  {}", line.color(colors::UPGRADE)));
    }
}

fn print_power(report: &ForgeReport) {
    print::fat_separator();
    print::centerln(&format!("{}", format::total_power(report.hero.power())));
    print::fat_separator();
}

fn print_portraits(report: &ForgeReport, has_assets: bool) {
    print::header("portraits", 0);

    if !has_assets {
        warn!("No asset directory given, portraits are placeholders");
    }

    for (idx, portrait) in report.portraits.iter().enumerate() {
        print::tree_head(idx + 1, &portrait.file_name);
        print::as_tree_one_level(format::portrait_to_key_value_pair(portrait));
        if idx + 1 != report.portraits.len() {
            hprint!();
        }
    }
}
