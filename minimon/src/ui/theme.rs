//! Shared UI theme constants.

use ratatui::style::Color;

pub const BG: Color = Color::Rgb(0x0f, 0x11, 0x1a);
pub const FG: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
pub const SUB: Color = Color::Rgb(0xa9, 0xb1, 0xd6);
pub const WARN: Color = Color::Rgb(0xf7, 0x76, 0x8e);
pub const OK: Color = Color::Rgb(0x9e, 0xce, 0x6a);

pub const HOT_ICON: &str = "🔥";
