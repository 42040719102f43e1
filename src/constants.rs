//! Shared crate-wide constants.

use std::ops::Range;

/// Logical desk units per terminal cell, horizontally.
///
/// Window geometry lives in an abstract integer unit space so the core
/// invariants (minimum sizes, default sizes) are independent of the
/// character grid; the renderer maps units onto cells at this scale.
pub const UNITS_PER_CELL_X: i32 = 8;

/// Logical desk units per terminal cell, vertically.
pub const UNITS_PER_CELL_Y: i32 = 16;

/// Smallest width a resize may leave a window with, in desk units.
pub const MIN_WINDOW_WIDTH: i32 = 300;

/// Smallest height a resize may leave a window with, in desk units.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Horizontal band (desk units) new windows are jittered into so that
/// consecutively opened windows don't stack perfectly on top of each other.
pub const PLACEMENT_BAND_X: Range<i32> = 48..400;

/// Vertical placement band, see [`PLACEMENT_BAND_X`].
pub const PLACEMENT_BAND_Y: Range<i32> = 32..240;

/// Rows reserved for the status bar at the top of the frame.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows reserved for the dock at the bottom of the frame. Maximized
/// windows fill the desktop area between the two reservations.
pub const DOCK_HEIGHT: u16 = 1;
