use std::sync::Arc;

use term_desk::apps::{self, CALCULATOR, CLOCK, NOTES};
use term_desk::geometry::{DeskPoint, DeskSize};
use term_desk::window::{OpenOutcome, WindowManager, WindowState};

fn manager() -> WindowManager {
    WindowManager::with_seed(Arc::new(apps::builtin_registry()), 23)
}

#[test]
fn duplicate_open_focuses_the_existing_window() {
    let mut wm = manager();
    let first = wm.open(CALCULATOR).window().unwrap();
    let z_before = wm.window(first).unwrap().z_index();
    let _ = wm.open(NOTES);

    // Re-opening never creates a second calculator; it raises the one
    // that exists.
    assert_eq!(wm.open(CALCULATOR), OpenOutcome::Focused(first));
    assert_eq!(wm.len(), 2);
    assert!(wm.window(first).unwrap().z_index() > z_before);
    assert_eq!(wm.active_window(), Some(first));
}

#[test]
fn minimize_then_close_leaves_no_active_window() {
    let mut wm = manager();
    let a = wm.open(CALCULATOR).window().unwrap();
    let b = wm.open(NOTES).window().unwrap();

    assert!(wm.minimize(a));
    assert_eq!(wm.active_window(), Some(b));
    assert_eq!(wm.visible_stack().len(), 1);

    // Closing the active window nulls the pointer; the minimized
    // calculator is not reactivated.
    assert!(wm.close(b));
    assert_eq!(wm.active_window(), None);
    assert_eq!(wm.window(a).unwrap().state(), WindowState::Minimized);
}

#[test]
fn reopening_a_minimized_app_restores_its_geometry() {
    let mut wm = manager();
    let id = wm.open(CLOCK).window().unwrap();
    let _ = wm.move_to(id, DeskPoint::new(-40, 900));
    let _ = wm.resize_to(id, DeskSize::new(500, 400));
    let rect = wm.window(id).unwrap().rect();
    let _ = wm.minimize(id);

    assert_eq!(wm.open(CLOCK), OpenOutcome::Focused(id));
    assert_eq!(wm.window(id).unwrap().rect(), rect);
    assert_eq!(wm.window(id).unwrap().state(), WindowState::Normal);
}

#[test]
fn resize_respects_the_minimum_window_size() {
    let mut wm = manager();
    let id = wm.open(NOTES).window().unwrap();
    assert!(wm.resize_to(id, DeskSize::new(1, 1)));
    let size = wm.window(id).unwrap().rect().size();
    assert!(size.width >= 300);
    assert!(size.height >= 200);
}

#[test]
fn stale_ids_are_absorbed_after_close() {
    let mut wm = manager();
    let id = wm.open(NOTES).window().unwrap();
    assert!(wm.close(id));

    // Every operation on the dead id is a safe no-op.
    assert!(!wm.focus(id));
    assert!(!wm.close(id));
    assert!(!wm.minimize(id));
    assert!(!wm.toggle_maximize(id));
    assert!(!wm.move_to(id, DeskPoint::new(0, 0)));
    assert!(!wm.resize_to(id, DeskSize::new(400, 400)));
    assert!(wm.is_empty());
}
