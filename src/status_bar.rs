use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-line bar at the top of the frame: shell identity on the left,
/// active window title on the right.
#[derive(Debug, Default)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().bg(theme::status_bg()).fg(theme::status_fg());
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for x in bounds.x..bounds.x.saturating_add(bounds.width) {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }

        let width = area.width as usize;
        let left = truncate_to_width(&self.left, width);
        safe_set_string(buffer, bounds, area.x.saturating_add(1), area.y, &left, style);

        if !self.right.is_empty() {
            let right = truncate_to_width(&self.right, width.saturating_sub(left.len() + 3));
            let right_width = right.chars().count() as u16;
            if right_width > 0 && right_width + 1 < area.width {
                let start_x = area
                    .x
                    .saturating_add(area.width)
                    .saturating_sub(right_width + 1);
                safe_set_string(buffer, bounds, start_x, area.y, &right, style);
            }
        }
    }
}
