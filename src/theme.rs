use ratatui::style::Color;

// Centralized theme colors for the tab strip, window chrome and status line.

pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);

pub fn accent() -> Color {
    Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2)
}

// Tab strip
pub fn tabs_bg() -> Color {
    Color::DarkGray
}
pub fn tab_fg() -> Color {
    Color::Black
}
pub fn tab_active_bg() -> Color {
    Color::Gray
}
pub fn tab_active_fg() -> Color {
    Color::Black
}

// Chrome
pub fn chrome_header_bg() -> Color {
    Color::Blue
}
pub fn chrome_header_fg() -> Color {
    Color::White
}
pub fn chrome_button_fg() -> Color {
    Color::Yellow
}
pub fn chrome_border() -> Color {
    Color::DarkGray
}

// Status line
pub fn status_bg() -> Color {
    Color::Black
}
pub fn status_fg() -> Color {
    Color::Gray
}
