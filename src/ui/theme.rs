use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xc0, 0x8b, 0x3e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const CARD_SELECTED: Color = Color::Rgb(0xc0, 0x8b, 0x3e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
