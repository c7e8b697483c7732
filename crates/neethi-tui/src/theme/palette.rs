//! Color palette
//!
//! Navy and saffron from the Department of Justice branding; everything
//! else maps to named terminal colors.

use ratatui::style::Color;

// --- Brand ---
pub const NAVY: Color = Color::Rgb(26, 54, 93);
pub const SAFFRON: Color = Color::Rgb(249, 115, 22);

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = SAFFRON;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::LightBlue;

// --- Chat ---
pub const USER_BUBBLE: Color = Color::LightBlue;
pub const BOT_BUBBLE: Color = Color::White;
pub const LINK: Color = Color::Cyan;
