//! Drag/resize sessions: turning a continuous pointer-event stream into
//! discrete, absolute window-manager updates.
//!
//! Session state is transient and strictly separate from the persistent
//! window models. One session at a time; drag and resize are mutually
//! exclusive variants of the same slot, so entering one while the other is
//! active is unrepresentable.

use crate::geometry::{DeskPoint, DeskSize};
use crate::window::{WindowId, WindowManager, WindowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Dragging {
        window: WindowId,
        /// Pointer-to-origin offset recorded at press time.
        grab: DeskPoint,
    },
    Resizing {
        window: WindowId,
        start_pointer: DeskPoint,
        start_size: DeskSize,
    },
}

/// Converts pointer sessions into [`WindowManager`] calls.
///
/// Every update is absolute — position is `pointer - grab`, size is
/// `start_size + (pointer - start_pointer)` — so replaying the same pointer
/// coordinate is idempotent and a dropped move event cannot accumulate
/// drift.
#[derive(Debug, Default)]
pub struct DragResizeController {
    session: Option<Session>,
}

impl DragResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Window targeted by the active session, if any.
    pub fn target(&self) -> Option<WindowId> {
        match self.session {
            Some(Session::Dragging { window, .. }) | Some(Session::Resizing { window, .. }) => {
                Some(window)
            }
            None => None,
        }
    }

    /// Start a drag session from a press on the window's title bar.
    /// Focuses the target first. Maximized windows are refused: their
    /// stored geometry is not what is on screen, so dragging it would
    /// teleport the window on restore.
    pub fn begin_drag(
        &mut self,
        windows: &mut WindowManager,
        id: WindowId,
        pointer: DeskPoint,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let _ = windows.focus(id);
        let Some(window) = windows.window(id) else {
            return false;
        };
        if window.state() == WindowState::Maximized {
            return false;
        }
        let origin = window.rect().origin();
        self.session = Some(Session::Dragging {
            window: id,
            grab: DeskPoint::new(pointer.x - origin.x, pointer.y - origin.y),
        });
        true
    }

    /// Start a resize session from a press on the window's resize handle.
    /// Focuses the target first; refused for maximized windows.
    pub fn begin_resize(
        &mut self,
        windows: &mut WindowManager,
        id: WindowId,
        pointer: DeskPoint,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let _ = windows.focus(id);
        let Some(window) = windows.window(id) else {
            return false;
        };
        if window.state() == WindowState::Maximized {
            return false;
        }
        self.session = Some(Session::Resizing {
            window: id,
            start_pointer: pointer,
            start_size: window.rect().size(),
        });
        true
    }

    /// Apply one pointer movement to the active session. Returns `true`
    /// when a session consumed the event.
    pub fn pointer_moved(&mut self, windows: &mut WindowManager, pointer: DeskPoint) -> bool {
        match self.session {
            Some(Session::Dragging { window, grab }) => {
                let _ = windows.move_to(
                    window,
                    DeskPoint::new(pointer.x - grab.x, pointer.y - grab.y),
                );
                true
            }
            Some(Session::Resizing {
                window,
                start_pointer,
                start_size,
            }) => {
                let _ = windows.resize_to(
                    window,
                    DeskSize::new(
                        start_size.width + (pointer.x - start_pointer.x),
                        start_size.height + (pointer.y - start_pointer.y),
                    ),
                );
                true
            }
            None => false,
        }
    }

    /// Pointer released: the session ends.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    /// Pointer left the desktop surface: same as a release.
    pub fn pointer_left(&mut self) {
        self.session = None;
    }
}
