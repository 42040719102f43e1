use ratatui::style::Color;

// Centralized colors so the shell reads consistently; keep these as small
// helpers rather than a config surface.

pub fn desktop_bg() -> Color {
    Color::Black
}

pub fn window_bg() -> Color {
    Color::Reset
}

pub fn header_active_bg() -> Color {
    Color::Blue
}

pub fn header_active_fg() -> Color {
    Color::White
}

pub fn header_inactive_bg() -> Color {
    Color::DarkGray
}

pub fn header_inactive_fg() -> Color {
    Color::Gray
}

pub fn border() -> Color {
    Color::DarkGray
}

// Dock
pub fn dock_bg() -> Color {
    Color::DarkGray
}

pub fn dock_fg() -> Color {
    Color::White
}

pub fn dock_active_bg() -> Color {
    Color::Gray
}

pub fn dock_active_fg() -> Color {
    Color::Black
}

pub fn dock_running() -> Color {
    Color::Green
}

// Status bar
pub fn status_bg() -> Color {
    Color::DarkGray
}

pub fn status_fg() -> Color {
    Color::White
}
