pub mod chrome;

mod manager;

pub use manager::{OpenOutcome, WindowManager};

use std::fmt;

use crate::geometry::DeskRect;
use crate::registry::AppId;

/// Unique identifier of one open window instance.
///
/// Allocated from a monotonic counter and never reused within a shell, so a
/// stale id can only ever miss — it can never alias a newer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Lifecycle state of a window.
///
/// Minimized and maximized are mutually exclusive by construction. The
/// stored rect always holds the restore geometry: maximized display
/// geometry is computed from the desktop area at render time and never
/// written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// One running instance of a registered app.
#[derive(Debug, Clone)]
pub struct WindowModel {
    id: WindowId,
    app_id: AppId,
    title: String,
    rect: DeskRect,
    z_index: u64,
    state: WindowState,
}

impl WindowModel {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Stored geometry in desk units. Preserved across minimize and
    /// maximize so restore is exact.
    pub fn rect(&self) -> DeskRect {
        self.rect
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Part of the visible stack (everything but minimized).
    pub fn is_visible(&self) -> bool {
        self.state != WindowState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }
}
