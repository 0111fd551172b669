use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const MALE: Color = Color::BrightBlue;
pub const FEMALE: Color = Color::BrightMagenta;
pub const MIXED: Color = Color::Yellow;
