//! Shared colors for the purple-accented dashboard

use ratatui::style::Color;

/// Purple accent used for selection and highlights
pub const ACCENT: Color = Color::Indexed(141);
/// Darker purple for filled accents
pub const ACCENT_BG: Color = Color::Indexed(54);
/// Muted text
pub const DIM: Color = Color::Indexed(243);
/// Panel borders
pub const BORDER: Color = Color::Indexed(240);
/// Income bars
pub const BAR: Color = Color::Indexed(99);
/// Growth line
pub const GROWTH: Color = Color::Indexed(203);
/// Highlighted list row background
pub const ROW_HIGHLIGHT: Color = Color::Indexed(237);
