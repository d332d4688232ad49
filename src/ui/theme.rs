use ratatui::style::Color;

pub const SHOWCASE_GOLD: Color = Color::Rgb(0xd9, 0xa4, 0x41);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SEGMENT_FILLED: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SEGMENT_EMPTY: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const PAGE_DOT_ACTIVE: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PAGE_DOT_INACTIVE: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PAUSED: Color = Color::Rgb(0xea, 0xb3, 0x08);
