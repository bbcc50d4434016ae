use crate::terminal::colors;
use colored::*;
use herocraft_core::forge::Portrait;

pub const NO_IMAGE: &str = "No image";

pub fn power_delta(delta: u32) -> ColoredString {
    format!("+{delta}").color(colors::UPGRADE).bold()
}

pub fn total_power(power: u32) -> ColoredString {
    format!("Total Power: {power}").color(colors::POWER).bold()
}

pub fn portrait_to_key_value_pair(portrait: &Portrait) -> Vec<(String, ColoredString)> {
    let value: ColoredString = match &portrait.path {
        Some(path) => path.display().to_string().color(colors::TEXT_DEFAULT),
        None => NO_IMAGE.color(colors::MISSING),
    };
    vec![(String::from("image"), value)]
}
