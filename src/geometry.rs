//! Desk-unit coordinate system and the mapping onto terminal cells.
//!
//! The window manager tracks geometry in signed integer "desk units" rather
//! than cells. Positions may be negative or exceed the viewport; nothing in
//! the core clamps them. The renderer converts desk rectangles into signed
//! cell rectangles and clips them against the desktop area at draw time.

use ratatui::layout::Rect;

use crate::constants::{UNITS_PER_CELL_X, UNITS_PER_CELL_Y};

/// A point in desk units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskPoint {
    pub x: i32,
    pub y: i32,
}

impl DeskPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in desk units. Always positive for live windows; the manager
/// clamps resize requests before they land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskSize {
    pub width: i32,
    pub height: i32,
}

impl DeskSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in desk units with a signed origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DeskRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: DeskPoint, size: DeskSize) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> DeskPoint {
        DeskPoint::new(self.x, self.y)
    }

    pub fn size(&self) -> DeskSize {
        DeskSize::new(self.width, self.height)
    }

    pub fn with_origin(self, origin: DeskPoint) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    pub fn with_size(self, size: DeskSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }
}

/// A cell-space rectangle with a signed origin.
///
/// Windows can start above or left of the desktop area, so the origin must
/// stay signed until [`CellRect::visible`] clips against the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x as i32,
            y: rect.y as i32,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Column of the rightmost cell.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    /// Row of the bottom cell.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let column = column as i32;
        let row = row as i32;
        column >= self.x && column <= self.right() && row >= self.y && row <= self.bottom()
    }

    /// Clip against `bounds`, returning the on-screen portion if any.
    pub fn visible(&self, bounds: Rect) -> Option<Rect> {
        let x0 = self.x.max(bounds.x as i32);
        let y0 = self.y.max(bounds.y as i32);
        let x1 = (self.x + self.width as i32).min(bounds.x as i32 + bounds.width as i32);
        let y1 = (self.y + self.height as i32).min(bounds.y as i32 + bounds.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }
}

/// Convert a desk rectangle into cell space relative to `viewport`.
///
/// Origins round toward negative infinity so off-screen-left windows stay
/// off-screen-left; sizes round up so a window never collapses below the
/// cells needed to show its content.
pub fn desk_to_cells(rect: DeskRect, viewport: Rect) -> CellRect {
    let x = viewport.x as i32 + rect.x.div_euclid(UNITS_PER_CELL_X);
    let y = viewport.y as i32 + rect.y.div_euclid(UNITS_PER_CELL_Y);
    let width = (rect.width + UNITS_PER_CELL_X - 1).div_euclid(UNITS_PER_CELL_X);
    let height = (rect.height + UNITS_PER_CELL_Y - 1).div_euclid(UNITS_PER_CELL_Y);
    CellRect {
        x,
        y,
        width: width.clamp(1, u16::MAX as i32) as u16,
        height: height.clamp(1, u16::MAX as i32) as u16,
    }
}

/// Convert a pointer cell position into desk units relative to `viewport`.
pub fn cell_point_to_desk(column: u16, row: u16, viewport: Rect) -> DeskPoint {
    DeskPoint::new(
        (column as i32 - viewport.x as i32) * UNITS_PER_CELL_X,
        (row as i32 - viewport.y as i32) * UNITS_PER_CELL_Y,
    )
}
