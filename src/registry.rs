//! Application registry: the static table of launchable apps and the
//! contract hosted applications implement to live inside a window frame.

use std::fmt;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::geometry::DeskSize;
use crate::ui::UiFrame;

/// Identifier of a registered application.
///
/// The registry is built once at startup and read-only afterward, so ids
/// are `&'static str` newtypes and cheap to copy around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppId(&'static str);

impl AppId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-dispatch context handed to a hosted app.
///
/// Apps cannot reach the window manager directly; requests to open another
/// app are queued here and drained by the shell after the dispatch returns.
#[derive(Debug, Default)]
pub struct AppContext {
    focused: bool,
    open_requests: Vec<AppId>,
}

impl AppContext {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            open_requests: Vec::new(),
        }
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Ask the shell to open another registered app (e.g. a gallery
    /// launching the camera). Duplicate suppression happens in the
    /// window manager, not here.
    pub fn request_open(&mut self, id: AppId) {
        self.open_requests.push(id);
    }

    pub(crate) fn take_open_requests(&mut self) -> Vec<AppId> {
        std::mem::take(&mut self.open_requests)
    }
}

/// A hosted application: a renderable unit living inside a shell-owned
/// window frame. The shell owns the chrome; the app owns everything inside
/// its content area.
pub trait AppWindow {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool);

    /// Handle an input event routed to this app. Return `true` when the
    /// event was consumed.
    fn handle_event(&mut self, _event: &Event, _ctx: &mut AppContext) -> bool {
        false
    }
}

/// Static metadata for one launchable application.
#[derive(Debug)]
pub struct AppDescriptor {
    pub id: AppId,
    pub title: &'static str,
    /// Opaque to the core; only ever displayed.
    pub icon: char,
    /// Default window size in desk units, copied at open time.
    pub initial_size: DeskSize,
    pub factory: fn() -> Box<dyn AppWindow>,
}

/// Process-wide constant table mapping app ids to display metadata and a
/// render factory. Populated at startup, read-only afterward.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. The first registration of an id wins;
    /// later duplicates are dropped with a warning.
    pub fn register(&mut self, descriptor: AppDescriptor) {
        if self.get(descriptor.id).is_some() {
            tracing::warn!(app = %descriptor.id, "duplicate app registration ignored");
            return;
        }
        self.apps.push(descriptor);
    }

    pub fn get(&self, id: AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|descriptor| descriptor.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn instantiate(&self, id: AppId) -> Option<Box<dyn AppWindow>> {
        self.get(id).map(|descriptor| (descriptor.factory)())
    }
}
