use std::collections::BTreeMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{WindowId, WindowModel, WindowState};
use crate::constants::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, PLACEMENT_BAND_X, PLACEMENT_BAND_Y,
};
use crate::geometry::{DeskPoint, DeskRect, DeskSize};
use crate::registry::{AppId, AppRegistry};

/// Result of [`WindowManager::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was created and made active.
    Created(WindowId),
    /// A window for this app already existed; it was focused (and restored
    /// when minimized). No new window was created.
    Focused(WindowId),
    /// The app id is not present in the registry.
    UnknownApp,
}

impl OpenOutcome {
    pub fn window(self) -> Option<WindowId> {
        match self {
            OpenOutcome::Created(id) | OpenOutcome::Focused(id) => Some(id),
            OpenOutcome::UnknownApp => None,
        }
    }
}

/// Sole owner of the window collection, the z-index counter, and the
/// active-window pointer. Every mutation of window state flows through
/// this type; nothing else writes the collection.
///
/// Operations on unknown ids are silent no-ops that return `false` — a
/// stale reference must never take the whole desktop down.
pub struct WindowManager {
    registry: Arc<AppRegistry>,
    windows: BTreeMap<WindowId, WindowModel>,
    active: Option<WindowId>,
    next_window_id: u64,
    // Monotonic for the lifetime of the shell; u64 so wraparound is a
    // non-concern even for pathologically long sessions.
    next_z_index: u64,
    rng: StdRng,
}

impl WindowManager {
    pub fn new(registry: Arc<AppRegistry>) -> Self {
        let seed = rand::rng().random();
        Self::with_seed(registry, seed)
    }

    /// Deterministic placement jitter for tests and `--seed`.
    pub fn with_seed(registry: Arc<AppRegistry>, seed: u64) -> Self {
        Self {
            registry,
            windows: BTreeMap::new(),
            active: None,
            next_window_id: 0,
            next_z_index: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Open `app_id`, reusing an existing window when there is one.
    ///
    /// Duplicate suppression lives here and only here: the dock and the
    /// hosted-app `open_app` callback both go through this method.
    pub fn open(&mut self, app_id: AppId) -> OpenOutcome {
        if let Some(id) = self.window_for_app(app_id) {
            // Unconditional raise: re-opening the already-active app still
            // assigns a fresh z-index.
            let _ = self.raise(id);
            return OpenOutcome::Focused(id);
        }
        let (title, size) = match self.registry.get(app_id) {
            Some(descriptor) => (descriptor.title.to_string(), descriptor.initial_size),
            None => {
                tracing::debug!(app = %app_id, "open ignored: app not registered");
                return OpenOutcome::UnknownApp;
            }
        };
        let origin = self.place_new();
        let id = WindowId::new(self.next_window_id);
        self.next_window_id += 1;
        let z_index = self.bump_z();
        let window = WindowModel {
            id,
            app_id,
            title,
            rect: DeskRect::from_parts(origin, size),
            z_index,
            state: WindowState::Normal,
        };
        tracing::debug!(window = %id, app = %app_id, "opened window");
        self.windows.insert(id, window);
        self.active = Some(id);
        OpenOutcome::Created(id)
    }

    /// Bring `id` to the front and make it active. No-op when it already
    /// is; restores a minimized window as a side effect.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if self.active == Some(id) {
            return true;
        }
        self.raise(id)
    }

    fn raise(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            tracing::debug!(window = %id, "focus ignored: unknown window");
            return false;
        }
        let z_index = self.bump_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z_index;
            if window.state == WindowState::Minimized {
                window.state = WindowState::Normal;
            }
        }
        self.active = Some(id);
        true
    }

    /// Remove `id` from the collection. The active pointer becomes null
    /// when the active window closes — the next-highest window is not
    /// promoted.
    pub fn close(&mut self, id: WindowId) -> bool {
        if self.windows.remove(&id).is_none() {
            tracing::debug!(window = %id, "close ignored: unknown window");
            return false;
        }
        tracing::debug!(window = %id, "closed window");
        if self.active == Some(id) {
            self.active = None;
        }
        true
    }

    /// Hide `id` from the visible stack. Geometry is retained so restore
    /// is exact; the active pointer is nulled when `id` was active.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window = %id, "minimize ignored: unknown window");
            return false;
        };
        if window.state == WindowState::Minimized {
            return true;
        }
        window.state = WindowState::Minimized;
        tracing::debug!(window = %id, "minimized window");
        if self.active == Some(id) {
            self.active = None;
        }
        true
    }

    /// Toggle between `Normal` and `Maximized`. Minimized windows are
    /// refused; restore them first via `focus` or `open`.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window = %id, "maximize ignored: unknown window");
            return false;
        };
        match window.state {
            WindowState::Normal => {
                window.state = WindowState::Maximized;
                true
            }
            WindowState::Maximized => {
                window.state = WindowState::Normal;
                true
            }
            WindowState::Minimized => false,
        }
    }

    /// Absolute position update from a drag session. Positions are never
    /// clamped; windows may hang off any edge of the desktop.
    pub fn move_to(&mut self, id: WindowId, position: DeskPoint) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window = %id, "move ignored: unknown window");
            return false;
        };
        window.rect = window.rect.with_origin(position);
        true
    }

    /// Absolute size update from a resize session, clamped to the
    /// minimum window size.
    pub fn resize_to(&mut self, id: WindowId, size: DeskSize) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window = %id, "resize ignored: unknown window");
            return false;
        };
        let clamped = DeskSize::new(
            size.width.max(MIN_WINDOW_WIDTH),
            size.height.max(MIN_WINDOW_HEIGHT),
        );
        window.rect = window.rect.with_size(clamped);
        true
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowModel> {
        self.windows.get(&id)
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    /// Any window (minimized included) belonging to `app_id`.
    pub fn window_for_app(&self, app_id: AppId) -> Option<WindowId> {
        self.windows
            .values()
            .find(|window| window.app_id == app_id)
            .map(|window| window.id)
    }

    /// Running indicator for the dock: true while any window of the app
    /// exists, minimized or not.
    pub fn is_running(&self, app_id: AppId) -> bool {
        self.windows.values().any(|window| window.app_id == app_id)
    }

    /// Non-minimized windows, back to front.
    pub fn visible_stack(&self) -> Vec<&WindowModel> {
        let mut stack: Vec<&WindowModel> = self
            .windows
            .values()
            .filter(|window| window.is_visible())
            .collect();
        stack.sort_by_key(|window| window.z_index);
        stack
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowModel> {
        self.windows.values()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn bump_z(&mut self) -> u64 {
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        z_index
    }

    fn place_new(&mut self) -> DeskPoint {
        DeskPoint::new(
            self.rng.random_range(PLACEMENT_BAND_X),
            self.rng.random_range(PLACEMENT_BAND_Y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AppDescriptor, AppWindow};
    use crate::ui::UiFrame;
    use ratatui::layout::Rect;

    struct NullApp;

    impl AppWindow for NullApp {
        fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _focused: bool) {}
    }

    const CALCULATOR: AppId = AppId::new("calculator");
    const NOTES: AppId = AppId::new("notes");
    const CLOCK: AppId = AppId::new("clock");

    fn registry() -> Arc<AppRegistry> {
        let mut registry = AppRegistry::new();
        for (id, title, size) in [
            (CALCULATOR, "Calculator", DeskSize::new(450, 600)),
            (NOTES, "Notes", DeskSize::new(480, 320)),
            (CLOCK, "Clock", DeskSize::new(360, 240)),
        ] {
            registry.register(AppDescriptor {
                id,
                title,
                icon: '∙',
                initial_size: size,
                factory: || Box::new(NullApp),
            });
        }
        Arc::new(registry)
    }

    fn manager() -> WindowManager {
        WindowManager::with_seed(registry(), 7)
    }

    #[test]
    fn open_creates_with_descriptor_defaults() {
        let mut wm = manager();
        let OpenOutcome::Created(id) = wm.open(CALCULATOR) else {
            panic!("expected a new window");
        };
        let window = wm.window(id).unwrap();
        assert_eq!(window.app_id(), CALCULATOR);
        assert_eq!(window.title(), "Calculator");
        assert_eq!(window.rect().size(), DeskSize::new(450, 600));
        assert_eq!(window.state(), WindowState::Normal);
        assert_eq!(wm.active_window(), Some(id));
    }

    #[test]
    fn open_unknown_app_is_refused() {
        let mut wm = manager();
        assert_eq!(wm.open(AppId::new("missing")), OpenOutcome::UnknownApp);
        assert!(wm.is_empty());
        assert_eq!(wm.active_window(), None);
    }

    #[test]
    fn reopen_focuses_instead_of_duplicating() {
        let mut wm = manager();
        let first = wm.open(CALCULATOR).window().unwrap();
        let z_before = wm.window(first).unwrap().z_index();
        // Push another window on top so the re-open has something to beat.
        let _ = wm.open(NOTES);

        assert_eq!(wm.open(CALCULATOR), OpenOutcome::Focused(first));
        assert_eq!(wm.len(), 2);
        assert!(wm.window(first).unwrap().z_index() > z_before);
        assert_eq!(wm.active_window(), Some(first));
    }

    #[test]
    fn reopening_the_active_app_still_bumps_z() {
        let mut wm = manager();
        let id = wm.open(CALCULATOR).window().unwrap();
        let z_before = wm.window(id).unwrap().z_index();

        assert_eq!(wm.open(CALCULATOR), OpenOutcome::Focused(id));
        assert_eq!(wm.window(id).unwrap().z_index(), z_before + 1);
        assert_eq!(wm.active_window(), Some(id));
    }

    #[test]
    fn open_restores_a_minimized_window() {
        let mut wm = manager();
        let id = wm.open(NOTES).window().unwrap();
        let rect_before = wm.window(id).unwrap().rect();
        let _ = wm.minimize(id);

        assert_eq!(wm.open(NOTES), OpenOutcome::Focused(id));
        let window = wm.window(id).unwrap();
        assert_eq!(window.state(), WindowState::Normal);
        assert_eq!(window.rect(), rect_before);
        assert_eq!(wm.active_window(), Some(id));
    }

    #[test]
    fn focus_assigns_strictly_highest_z() {
        let mut wm = manager();
        let a = wm.open(CALCULATOR).window().unwrap();
        let b = wm.open(NOTES).window().unwrap();
        let c = wm.open(CLOCK).window().unwrap();

        assert!(wm.focus(a));
        let top = wm.window(a).unwrap().z_index();
        assert!(top > wm.window(b).unwrap().z_index());
        assert!(top > wm.window(c).unwrap().z_index());
        assert_eq!(wm.active_window(), Some(a));
    }

    #[test]
    fn focus_on_active_window_does_not_burn_z() {
        let mut wm = manager();
        let id = wm.open(CLOCK).window().unwrap();
        let z_before = wm.window(id).unwrap().z_index();
        assert!(wm.focus(id));
        assert_eq!(wm.window(id).unwrap().z_index(), z_before);
    }

    #[test]
    fn focus_unknown_window_is_a_soft_failure() {
        let mut wm = manager();
        let id = wm.open(CLOCK).window().unwrap();
        assert!(!wm.focus(WindowId::new(999)));
        assert_eq!(wm.active_window(), Some(id));
    }

    #[test]
    fn minimize_hides_but_retains_the_window() {
        let mut wm = manager();
        let id = wm.open(NOTES).window().unwrap();
        assert!(wm.minimize(id));
        assert!(wm.visible_stack().is_empty());
        assert_eq!(wm.len(), 1);
        assert_eq!(wm.active_window(), None);
        assert!(wm.is_running(NOTES));
    }

    #[test]
    fn minimizing_a_background_window_keeps_the_active_one() {
        let mut wm = manager();
        let a = wm.open(CALCULATOR).window().unwrap();
        let b = wm.open(NOTES).window().unwrap();

        assert!(wm.minimize(a));
        assert_eq!(wm.active_window(), Some(b));
        assert_eq!(wm.visible_stack().len(), 1);
    }

    #[test]
    fn close_never_promotes_a_survivor() {
        let mut wm = manager();
        let a = wm.open(CALCULATOR).window().unwrap();
        let b = wm.open(NOTES).window().unwrap();
        let _ = wm.minimize(a);

        assert!(wm.close(b));
        assert_eq!(wm.active_window(), None);
        assert!(wm.window(b).is_none());
        assert!(wm.window(a).is_some());
    }

    #[test]
    fn close_unknown_window_is_a_soft_failure() {
        let mut wm = manager();
        let id = wm.open(CLOCK).window().unwrap();
        assert!(!wm.close(WindowId::new(42)));
        assert_eq!(wm.len(), 1);
        assert_eq!(wm.active_window(), Some(id));
    }

    #[test]
    fn resize_clamps_to_minimums() {
        let mut wm = manager();
        let id = wm.open(NOTES).window().unwrap();
        assert!(wm.resize_to(id, DeskSize::new(10, -50)));
        assert_eq!(
            wm.window(id).unwrap().rect().size(),
            DeskSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
        assert!(wm.resize_to(id, DeskSize::new(800, 500)));
        assert_eq!(wm.window(id).unwrap().rect().size(), DeskSize::new(800, 500));
    }

    #[test]
    fn move_accepts_negative_and_offscreen_positions() {
        let mut wm = manager();
        let id = wm.open(NOTES).window().unwrap();
        assert!(wm.move_to(id, DeskPoint::new(-120, 9000)));
        assert_eq!(wm.window(id).unwrap().rect().origin(), DeskPoint::new(-120, 9000));
    }

    #[test]
    fn maximize_toggles_and_preserves_stored_rect() {
        let mut wm = manager();
        let id = wm.open(CALCULATOR).window().unwrap();
        let rect = wm.window(id).unwrap().rect();

        assert!(wm.toggle_maximize(id));
        assert_eq!(wm.window(id).unwrap().state(), WindowState::Maximized);
        assert_eq!(wm.window(id).unwrap().rect(), rect);

        assert!(wm.toggle_maximize(id));
        assert_eq!(wm.window(id).unwrap().state(), WindowState::Normal);
        assert_eq!(wm.window(id).unwrap().rect(), rect);
    }

    #[test]
    fn maximize_refuses_minimized_windows() {
        let mut wm = manager();
        let id = wm.open(CALCULATOR).window().unwrap();
        let _ = wm.minimize(id);
        assert!(!wm.toggle_maximize(id));
        assert_eq!(wm.window(id).unwrap().state(), WindowState::Minimized);
    }

    #[test]
    fn z_indices_stay_unique_and_monotonic() {
        let mut wm = manager();
        let a = wm.open(CALCULATOR).window().unwrap();
        let b = wm.open(NOTES).window().unwrap();
        let c = wm.open(CLOCK).window().unwrap();
        let _ = wm.focus(a);
        let _ = wm.focus(b);
        let _ = wm.open(CLOCK);

        let mut seen: Vec<u64> = wm.windows().map(|window| window.z_index()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 3);
        // After the final open, clock must be the strict top.
        let top = wm.visible_stack().last().unwrap().id();
        assert_eq!(top, c);
    }

    #[test]
    fn placement_jitters_within_the_band_and_is_seed_stable() {
        let mut first = WindowManager::with_seed(registry(), 11);
        let mut second = WindowManager::with_seed(registry(), 11);
        for app in [CALCULATOR, NOTES, CLOCK] {
            let a = first.open(app).window().unwrap();
            let b = second.open(app).window().unwrap();
            let origin = first.window(a).unwrap().rect().origin();
            assert!(PLACEMENT_BAND_X.contains(&origin.x));
            assert!(PLACEMENT_BAND_Y.contains(&origin.y));
            assert_eq!(origin, second.window(b).unwrap().rect().origin());
        }
    }

    #[test]
    fn at_most_one_visible_window_per_app() {
        let mut wm = manager();
        for _ in 0..5 {
            let _ = wm.open(CALCULATOR);
        }
        let calculators = wm
            .visible_stack()
            .iter()
            .filter(|window| window.app_id() == CALCULATOR)
            .count();
        assert_eq!(calculators, 1);
        assert_eq!(wm.len(), 1);
    }
}
