//! The shell: composes the window manager, drag/resize controller, dock,
//! and status bar, routes input events, and renders the window stack.

use std::collections::BTreeMap;
use std::sync::Arc;

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::actions::Action;
use crate::constants::{DOCK_HEIGHT, STATUS_BAR_HEIGHT};
use crate::dock::Dock;
use crate::geometry::{self, CellRect};
use crate::keybindings;
use crate::pointer::DragResizeController;
use crate::registry::{AppContext, AppId, AppRegistry, AppWindow};
use crate::state::ShellState;
use crate::status_bar::StatusBar;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::chrome::{ChromeHit, DefaultDecorator, WindowDecorator};
use crate::window::{OpenOutcome, WindowId, WindowManager};

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

struct DrawTask {
    id: WindowId,
    rect: CellRect,
    title: String,
    icon: char,
    focused: bool,
    maximized: bool,
}

/// Entry point of the desktop: owns every component and the live app
/// instances, keyed by window id.
///
/// The frame split (status bar / desktop / dock) is cached at render time
/// and used for event routing, so geometry-dependent routing only works
/// after the first draw — exactly when a user can first click something.
pub struct Shell {
    registry: Arc<AppRegistry>,
    windows: WindowManager,
    controller: DragResizeController,
    dock: Dock,
    status_bar: StatusBar,
    state: ShellState,
    decorator: Box<dyn WindowDecorator>,
    apps: BTreeMap<WindowId, Box<dyn AppWindow>>,
    desktop_area: Rect,
    quit_requested: bool,
}

impl Shell {
    pub fn new(registry: Arc<AppRegistry>) -> Self {
        let windows = WindowManager::new(registry.clone());
        Self::assemble(registry, windows)
    }

    /// Deterministic window placement for tests and `--seed`.
    pub fn with_seed(registry: Arc<AppRegistry>, seed: u64) -> Self {
        let windows = WindowManager::with_seed(registry.clone(), seed);
        Self::assemble(registry, windows)
    }

    fn assemble(registry: Arc<AppRegistry>, windows: WindowManager) -> Self {
        let host = hostname::get()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "local".to_string());
        let mut status_bar = StatusBar::new();
        status_bar.set_left(format!("≡ {} @ {host}", env!("CARGO_PKG_NAME")));
        Self {
            registry,
            windows,
            controller: DragResizeController::new(),
            dock: Dock::new(),
            status_bar,
            state: ShellState::new(),
            decorator: Box::new(DefaultDecorator),
            apps: BTreeMap::new(),
            desktop_area: Rect::default(),
            quit_requested: false,
        }
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.state.mouse_capture_enabled()
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        self.state.take_mouse_capture_change()
    }

    /// Open `id`, instantiating its hosted app only when the manager
    /// actually created a window. Duplicate presses focus instead.
    pub fn open_app(&mut self, id: AppId) {
        match self.windows.open(id) {
            OpenOutcome::Created(window) => {
                if let Some(instance) = self.registry.instantiate(id) {
                    self.apps.insert(window, instance);
                }
            }
            OpenOutcome::Focused(_) => {}
            OpenOutcome::UnknownApp => {
                tracing::warn!(app = %id, "open requested for unknown app");
            }
        }
    }

    fn close_window(&mut self, id: WindowId) {
        if self.windows.close(id) {
            self.apps.remove(&id);
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let status_height = STATUS_BAR_HEIGHT.min(area.height);
        let dock_height = DOCK_HEIGHT.min(area.height.saturating_sub(status_height));
        let status_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: status_height,
        };
        let dock_area = Rect {
            x: area.x,
            y: area
                .y
                .saturating_add(area.height)
                .saturating_sub(dock_height),
            width: area.width,
            height: dock_height,
        };
        let desktop = Rect {
            x: area.x,
            y: area.y.saturating_add(status_height),
            width: area.width,
            height: area
                .height
                .saturating_sub(status_height)
                .saturating_sub(dock_height),
        };
        self.desktop_area = desktop;
        self.dock.begin_frame();
        self.dock.set_area(dock_area);

        let active_title = self
            .windows
            .active_window()
            .and_then(|id| self.windows.window(id))
            .map(|window| window.title().to_string())
            .unwrap_or_default();
        self.status_bar.set_right(active_title);

        let active = self.windows.active_window();
        let plan: Vec<DrawTask> = self
            .windows
            .visible_stack()
            .into_iter()
            .map(|window| DrawTask {
                id: window.id(),
                rect: self.cell_rect_for(window.id()).unwrap_or(CellRect {
                    x: desktop.x as i32,
                    y: desktop.y as i32,
                    width: desktop.width,
                    height: desktop.height,
                }),
                title: window.title().to_string(),
                icon: self
                    .registry
                    .get(window.app_id())
                    .map(|descriptor| descriptor.icon)
                    .unwrap_or('∙'),
                focused: active == Some(window.id()),
                maximized: window.is_maximized(),
            })
            .collect();

        let mut ui = UiFrame::new(frame);
        ui.fill(desktop, Style::default().bg(theme::desktop_bg()));
        for task in plan {
            self.decorator.render(
                &mut ui,
                task.rect,
                desktop,
                &task.title,
                task.icon,
                task.focused,
                !task.maximized,
            );
            if let Some(content) = self.decorator.content_area(task.rect, desktop)
                && let Some(app) = self.apps.get_mut(&task.id)
            {
                app.render(&mut ui, content, task.focused);
            }
        }
        self.dock.render(&mut ui, &self.registry, &self.windows);
        self.status_bar.render(&mut ui, status_area);
    }

    /// Route one input event. Returns `true` when the shell consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(action) = keybindings::action_for_key(key) {
            self.apply_action(action);
            return true;
        }
        if let Some(active) = self.windows.active_window() {
            return self.forward_to_app(active, &Event::Key(*key));
        }
        false
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit_requested = true,
            Action::CycleFocus => self.cycle_focus(),
            Action::CloseActive => {
                if let Some(id) = self.windows.active_window() {
                    self.close_window(id);
                }
            }
            Action::MinimizeActive => {
                if let Some(id) = self.windows.active_window() {
                    let _ = self.windows.minimize(id);
                }
            }
            Action::ToggleMaximizeActive => {
                if let Some(id) = self.windows.active_window() {
                    let _ = self.windows.toggle_maximize(id);
                }
            }
            Action::ToggleMouseCapture => self.state.toggle_mouse_capture(),
        }
    }

    /// Focus the bottom-most visible window; repeated presses rotate
    /// through the stack because focusing moves a window to the top.
    fn cycle_focus(&mut self) {
        if let Some(id) = self.windows.visible_stack().first().map(|window| window.id()) {
            let _ = self.windows.focus(id);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.dock.contains(column, row) {
                    if let Some(app) = self.dock.hit_test(column, row) {
                        self.open_app(app);
                    }
                    return true;
                }
                if !rect_contains(self.desktop_area, column, row) {
                    return false;
                }
                self.press_on_desktop(mouse)
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if self.controller.is_idle() {
                    return self.forward_pointer(mouse);
                }
                if rect_contains(self.desktop_area, column, row) {
                    let pointer = geometry::cell_point_to_desk(column, row, self.desktop_area);
                    self.controller.pointer_moved(&mut self.windows, pointer)
                } else {
                    // Leaving the tracked surface terminates the session.
                    self.controller.pointer_left();
                    true
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.controller.is_idle() {
                    self.controller.pointer_up();
                    return true;
                }
                self.forward_pointer(mouse)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => self.forward_pointer(mouse),
            _ => false,
        }
    }

    fn press_on_desktop(&mut self, mouse: &MouseEvent) -> bool {
        let (column, row) = (mouse.column, mouse.row);
        let Some((id, rect)) = self.topmost_window_at(column, row) else {
            return false;
        };
        match self.decorator.hit_test(rect, column, row) {
            // Button presses act without focusing: minimizing a background
            // window must leave the currently active window active.
            ChromeHit::Close => {
                self.close_window(id);
            }
            ChromeHit::Minimize => {
                let _ = self.windows.minimize(id);
            }
            ChromeHit::Maximize => {
                let _ = self.windows.toggle_maximize(id);
            }
            ChromeHit::Title => {
                let pointer = geometry::cell_point_to_desk(column, row, self.desktop_area);
                let _ = self.controller.begin_drag(&mut self.windows, id, pointer);
            }
            ChromeHit::Resize => {
                let pointer = geometry::cell_point_to_desk(column, row, self.desktop_area);
                let _ = self.controller.begin_resize(&mut self.windows, id, pointer);
            }
            ChromeHit::Content => {
                let _ = self.windows.focus(id);
                let _ = self.forward_to_app(id, &Event::Mouse(*mouse));
            }
        }
        true
    }

    fn forward_pointer(&mut self, mouse: &MouseEvent) -> bool {
        let Some((id, rect)) = self.topmost_window_at(mouse.column, mouse.row) else {
            return false;
        };
        let Some(content) = self.decorator.content_area(rect, self.desktop_area) else {
            return false;
        };
        if !rect_contains(content, mouse.column, mouse.row) {
            return false;
        }
        self.forward_to_app(id, &Event::Mouse(*mouse))
    }

    fn forward_to_app(&mut self, id: WindowId, event: &Event) -> bool {
        let focused = self.windows.active_window() == Some(id);
        let mut ctx = AppContext::new(focused);
        let handled = match self.apps.get_mut(&id) {
            Some(app) => app.handle_event(event, &mut ctx),
            None => false,
        };
        for requested in ctx.take_open_requests() {
            self.open_app(requested);
        }
        handled
    }

    /// Topmost visible window under the given cell, searching front to
    /// back through the z-order.
    fn topmost_window_at(&self, column: u16, row: u16) -> Option<(WindowId, CellRect)> {
        let stack = self.windows.visible_stack();
        for window in stack.iter().rev() {
            if let Some(rect) = self.cell_rect_for(window.id())
                && rect.contains(column, row)
            {
                return Some((window.id(), rect));
            }
        }
        None
    }

    /// On-screen geometry for a window: the stored desk rect for normal
    /// windows, the full desktop area for maximized ones.
    fn cell_rect_for(&self, id: WindowId) -> Option<CellRect> {
        let window = self.windows.window(id)?;
        if window.is_maximized() {
            Some(CellRect::from_rect(self.desktop_area))
        } else {
            Some(geometry::desk_to_cells(window.rect(), self.desktop_area))
        }
    }
}
