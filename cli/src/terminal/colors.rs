use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const POWER: Color = Color::BrightRed;
pub const UPGRADE: Color = Color::BrightCyan;
pub const MISSING: Color = Color::Yellow;
