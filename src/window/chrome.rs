//! Window chrome: the frame the shell draws around hosted app content,
//! and the hit-testing that turns a pointer press into a chrome command.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::CellRect;
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// Region of a window's frame hit by a pointer press. Each variant other
/// than `Content` maps 1:1 onto a window-manager operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Title,
    Minimize,
    Maximize,
    Close,
    Resize,
    Content,
}

const MINIMIZE_GLYPH: &str = "─";
const MAXIMIZE_GLYPH: &str = "□";
const CLOSE_GLYPH: &str = "×";
const RESIZE_GLYPH: &str = "◢";

// Button columns measured from the right edge of the title row.
const CLOSE_OFFSET: i32 = 1;
const MAXIMIZE_OFFSET: i32 = 3;
const MINIMIZE_OFFSET: i32 = 5;

// Below this width the title row has no room for buttons.
const MIN_BUTTON_WIDTH: u16 = 10;

/// Draws a window frame and classifies pointer presses against it.
///
/// `rect` is the full window rectangle in signed cell space; implementations
/// must clip against `bounds` themselves.
pub trait WindowDecorator: std::fmt::Debug {
    fn render(
        &self,
        frame: &mut UiFrame<'_>,
        rect: CellRect,
        bounds: Rect,
        title: &str,
        icon: char,
        focused: bool,
        resizable: bool,
    );

    fn hit_test(&self, rect: CellRect, column: u16, row: u16) -> ChromeHit;

    /// Area inside the frame that belongs to the hosted app, clipped to
    /// `bounds`. `None` when the window is too small or fully off-screen.
    fn content_area(&self, rect: CellRect, bounds: Rect) -> Option<Rect>;
}

/// Title-bar row with minimize/maximize/close buttons, one-cell side and
/// bottom borders, and a resize handle in the bottom-right corner.
#[derive(Debug)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn has_buttons(rect: CellRect) -> bool {
        rect.width >= MIN_BUTTON_WIDTH
    }
}

fn put(
    buffer: &mut ratatui::buffer::Buffer,
    bounds: Rect,
    x: i32,
    y: i32,
    symbol: &str,
    style: Style,
) {
    if x < bounds.x as i32
        || x >= bounds.x as i32 + bounds.width as i32
        || y < bounds.y as i32
        || y >= bounds.y as i32 + bounds.height as i32
    {
        return;
    }
    if let Some(cell) = buffer.cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render(
        &self,
        frame: &mut UiFrame<'_>,
        rect: CellRect,
        bounds: Rect,
        title: &str,
        icon: char,
        focused: bool,
        resizable: bool,
    ) {
        if rect.width < 3 || rect.height < 2 {
            return;
        }
        let buffer = frame.buffer_mut();
        let right = rect.right();
        let bottom = rect.bottom();

        let header_style = if focused {
            Style::default()
                .bg(theme::header_active_bg())
                .fg(theme::header_active_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::header_inactive_bg())
                .fg(theme::header_inactive_fg())
        };
        let border_style = Style::default().fg(theme::border());
        let body_style = Style::default().bg(theme::window_bg());

        // Title row: background, icon + title on the left, buttons right.
        for x in rect.x..=right {
            put(buffer, bounds, x, rect.y, " ", header_style);
        }
        let label_max = if Self::has_buttons(rect) {
            (rect.width as i32 - MINIMIZE_OFFSET - 3).max(0) as usize
        } else {
            rect.width.saturating_sub(2) as usize
        };
        let label = truncate_to_width(&format!("{icon} {title}"), label_max);
        for (offset, ch) in label.chars().enumerate() {
            put(
                buffer,
                bounds,
                rect.x + 1 + offset as i32,
                rect.y,
                &ch.to_string(),
                header_style,
            );
        }
        if Self::has_buttons(rect) {
            put(buffer, bounds, right - MINIMIZE_OFFSET, rect.y, MINIMIZE_GLYPH, header_style);
            put(buffer, bounds, right - MAXIMIZE_OFFSET, rect.y, MAXIMIZE_GLYPH, header_style);
            put(buffer, bounds, right - CLOSE_OFFSET, rect.y, CLOSE_GLYPH, header_style);
        }

        // Body fill so the app draws on a solid background.
        for y in rect.y + 1..bottom {
            for x in rect.x + 1..right {
                put(buffer, bounds, x, y, " ", body_style);
            }
        }

        // Side and bottom borders.
        for y in rect.y + 1..bottom {
            put(buffer, bounds, rect.x, y, "│", border_style);
            put(buffer, bounds, right, y, "│", border_style);
        }
        for x in rect.x..=right {
            let symbol = if x == rect.x {
                "└"
            } else if x == right {
                "┘"
            } else {
                "─"
            };
            put(buffer, bounds, x, bottom, symbol, border_style);
        }
        if resizable {
            put(buffer, bounds, right, bottom, RESIZE_GLYPH, border_style);
        }
    }

    fn hit_test(&self, rect: CellRect, column: u16, row: u16) -> ChromeHit {
        if !rect.contains(column, row) {
            return ChromeHit::Content;
        }
        let column = column as i32;
        let row = row as i32;
        if row == rect.y {
            if Self::has_buttons(rect) {
                match rect.right() - column {
                    CLOSE_OFFSET => return ChromeHit::Close,
                    MAXIMIZE_OFFSET => return ChromeHit::Maximize,
                    MINIMIZE_OFFSET => return ChromeHit::Minimize,
                    _ => {}
                }
            }
            return ChromeHit::Title;
        }
        if column == rect.right() && row == rect.bottom() {
            return ChromeHit::Resize;
        }
        ChromeHit::Content
    }

    fn content_area(&self, rect: CellRect, bounds: Rect) -> Option<Rect> {
        if rect.width < 3 || rect.height < 3 {
            return None;
        }
        let inner = CellRect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width - 2,
            height: rect.height - 2,
        };
        inner.visible(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> CellRect {
        CellRect {
            x: 4,
            y: 2,
            width: 40,
            height: 12,
        }
    }

    #[test]
    fn title_row_maps_to_drag_and_buttons() {
        let decorator = DefaultDecorator;
        let r = rect();
        assert_eq!(decorator.hit_test(r, 10, 2), ChromeHit::Title);
        assert_eq!(
            decorator.hit_test(r, (r.right() - CLOSE_OFFSET) as u16, 2),
            ChromeHit::Close
        );
        assert_eq!(
            decorator.hit_test(r, (r.right() - MAXIMIZE_OFFSET) as u16, 2),
            ChromeHit::Maximize
        );
        assert_eq!(
            decorator.hit_test(r, (r.right() - MINIMIZE_OFFSET) as u16, 2),
            ChromeHit::Minimize
        );
        // The spacer cells between buttons still drag.
        assert_eq!(
            decorator.hit_test(r, (r.right() - 2) as u16, 2),
            ChromeHit::Title
        );
    }

    #[test]
    fn bottom_right_corner_is_the_resize_handle() {
        let decorator = DefaultDecorator;
        let r = rect();
        assert_eq!(
            decorator.hit_test(r, r.right() as u16, r.bottom() as u16),
            ChromeHit::Resize
        );
        assert_eq!(decorator.hit_test(r, 10, 5), ChromeHit::Content);
    }

    #[test]
    fn narrow_windows_drop_their_buttons() {
        let decorator = DefaultDecorator;
        let narrow = CellRect {
            x: 0,
            y: 0,
            width: 8,
            height: 4,
        };
        assert_eq!(decorator.hit_test(narrow, 7, 0), ChromeHit::Title);
    }

    #[test]
    fn content_area_excludes_chrome() {
        let decorator = DefaultDecorator;
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 40,
        };
        let content = decorator.content_area(rect(), bounds).unwrap();
        assert_eq!(content.x, 5);
        assert_eq!(content.y, 3);
        assert_eq!(content.width, 38);
        assert_eq!(content.height, 10);
    }

    #[test]
    fn content_area_vanishes_for_tiny_windows() {
        let decorator = DefaultDecorator;
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 40,
        };
        let tiny = CellRect {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        };
        assert!(decorator.content_area(tiny, bounds).is_none());
    }
}
