use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use term_desk::apps::{self, CALCULATOR, NOTES};
use term_desk::shell::Shell;

fn render(shell: &mut Shell) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| shell.render(frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect::<Vec<_>>()
                .join("")
        })
        .collect()
}

#[test]
fn dock_lists_every_registered_app() {
    let mut shell = Shell::with_seed(Arc::new(apps::builtin_registry()), 9);
    let rows = render(&mut shell);
    let dock_row = rows.last().unwrap();
    for title in ["Calculator", "Notes", "Clock", "Gallery", "Camera"] {
        assert!(dock_row.contains(title), "dock row missing {title}: {dock_row}");
    }
}

#[test]
fn open_windows_draw_their_title_bars() {
    let mut shell = Shell::with_seed(Arc::new(apps::builtin_registry()), 9);
    shell.open_app(CALCULATOR);
    // Pin the window so its chrome is fully on screen.
    let id = shell.windows().active_window().unwrap();
    let _ = shell
        .windows_mut()
        .move_to(id, term_desk::geometry::DeskPoint::new(40, 80));
    let rows = render(&mut shell);
    let all = rows.join("\n");
    assert!(all.contains("Calculator"));
    // Window chrome buttons are present somewhere in the frame.
    assert!(all.contains('×'));
}

#[test]
fn status_bar_reflects_the_active_window() {
    let mut shell = Shell::with_seed(Arc::new(apps::builtin_registry()), 9);
    shell.open_app(NOTES);
    let rows = render(&mut shell);
    assert!(rows[0].contains("Notes"));

    let id = shell.windows().active_window().unwrap();
    let _ = shell.windows_mut().minimize(id);
    let rows = render(&mut shell);
    assert!(!rows[0].contains("Notes"));
    // Minimized windows vanish from the desktop but stay in the dock as
    // running apps.
    assert!(rows.last().unwrap().contains("Notes"));
}
