//! The dock: one launcher per registered app plus a running indicator.
//!
//! The dock has no policy of its own — a click is forwarded to
//! [`WindowManager::open`], which owns duplicate suppression and
//! restore-from-minimized behavior.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::registry::{AppId, AppRegistry};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::window::WindowManager;

#[derive(Debug, Clone, Copy)]
struct DockHit {
    id: AppId,
    rect: Rect,
}

/// Launcher strip pinned to the bottom of the frame.
///
/// Hit rectangles are recorded during render and consulted on click, so
/// `begin_frame` must run before each render pass (teacher-style per-frame
/// hit tracking).
#[derive(Debug, Default)]
pub struct Dock {
    area: Rect,
    hits: Vec<DockHit>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.hits.clear();
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// App under the given cell, if the click landed on a launcher item.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<AppId> {
        self.hits
            .iter()
            .find(|hit| {
                column >= hit.rect.x
                    && column < hit.rect.x.saturating_add(hit.rect.width)
                    && row >= hit.rect.y
                    && row < hit.rect.y.saturating_add(hit.rect.height)
            })
            .map(|hit| hit.id)
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        registry: &AppRegistry,
        windows: &WindowManager,
    ) {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let active_app = windows
            .active_window()
            .and_then(|id| windows.window(id))
            .map(|window| window.app_id());
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        // Solid strip first; items overwrite it.
        for y in bounds.y..bounds.y.saturating_add(bounds.height) {
            for x in bounds.x..bounds.x.saturating_add(bounds.width) {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(
                        Style::default().bg(theme::dock_bg()).fg(theme::dock_fg()),
                    );
                }
            }
        }

        let y = area.y;
        let mut x = area.x.saturating_add(1);
        let max_x = area.x.saturating_add(area.width);
        for descriptor in registry.iter() {
            let running = windows.is_running(descriptor.id);
            let indicator = if running { '•' } else { ' ' };
            let chunk = format!(" {} {} {indicator}", descriptor.icon, descriptor.title);
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > max_x {
                break;
            }
            let style = if active_app == Some(descriptor.id) {
                Style::default()
                    .bg(theme::dock_active_bg())
                    .fg(theme::dock_active_fg())
                    .add_modifier(Modifier::BOLD)
            } else if running {
                Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_running())
            } else {
                Style::default().bg(theme::dock_bg()).fg(theme::dock_fg())
            };
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.hits.push(DockHit {
                id: descriptor.id,
                rect: Rect {
                    x,
                    y,
                    width: chunk_width,
                    height: 1,
                },
            });
            x = x.saturating_add(chunk_width).saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DeskSize;
    use crate::registry::{AppDescriptor, AppWindow};
    use ratatui::buffer::Buffer;
    use std::sync::Arc;

    struct NullApp;

    impl AppWindow for NullApp {
        fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _focused: bool) {}
    }

    const NOTES: AppId = AppId::new("notes");
    const CLOCK: AppId = AppId::new("clock");

    fn registry() -> Arc<AppRegistry> {
        let mut registry = AppRegistry::new();
        for (id, title) in [(NOTES, "Notes"), (CLOCK, "Clock")] {
            registry.register(AppDescriptor {
                id,
                title,
                icon: '∙',
                initial_size: DeskSize::new(400, 300),
                factory: || Box::new(NullApp),
            });
        }
        Arc::new(registry)
    }

    fn rendered_dock(windows: &WindowManager, registry: &AppRegistry) -> Dock {
        let area = Rect {
            x: 0,
            y: 29,
            width: 80,
            height: 1,
        };
        let full = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 30,
        };
        let mut buffer = Buffer::empty(full);
        let mut frame = UiFrame::from_parts(full, &mut buffer);
        let mut dock = Dock::new();
        dock.begin_frame();
        dock.set_area(area);
        dock.render(&mut frame, registry, windows);
        dock
    }

    #[test]
    fn items_are_hit_testable_in_registry_order() {
        let registry = registry();
        let windows = WindowManager::with_seed(registry.clone(), 1);
        let dock = rendered_dock(&windows, &registry);

        // First item starts one cell in from the left edge.
        assert_eq!(dock.hit_test(2, 29), Some(NOTES));
        // Scan right until the second item shows up.
        let mut found = None;
        for column in 0..80 {
            if dock.hit_test(column, 29) == Some(CLOCK) {
                found = Some(column);
                break;
            }
        }
        assert!(found.is_some());
        // Clicks on other rows miss.
        assert_eq!(dock.hit_test(2, 28), None);
    }

    #[test]
    fn contains_matches_the_reserved_strip() {
        let registry = registry();
        let windows = WindowManager::with_seed(registry.clone(), 1);
        let dock = rendered_dock(&windows, &registry);
        assert!(dock.contains(0, 29));
        assert!(dock.contains(79, 29));
        assert!(!dock.contains(0, 28));
    }
}
