//! Built-in demo applications.
//!
//! These exist so the binary is usable out of the box and the hosted-app
//! contract is exercised end to end; they are deliberately small. Real
//! applications plug in the same way: a descriptor plus an [`AppWindow`]
//! implementation.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::geometry::DeskSize;
use crate::registry::{AppContext, AppDescriptor, AppId, AppRegistry, AppWindow};
use crate::ui::UiFrame;

pub const CALCULATOR: AppId = AppId::new("calculator");
pub const NOTES: AppId = AppId::new("notes");
pub const CLOCK: AppId = AppId::new("clock");
pub const GALLERY: AppId = AppId::new("gallery");
pub const CAMERA: AppId = AppId::new("camera");

/// The default registry shipped with the binary.
pub fn builtin_registry() -> AppRegistry {
    let mut registry = AppRegistry::new();
    registry.register(AppDescriptor {
        id: CALCULATOR,
        title: "Calculator",
        icon: '∑',
        initial_size: DeskSize::new(450, 600),
        factory: || Box::new(Calculator::new()),
    });
    registry.register(AppDescriptor {
        id: NOTES,
        title: "Notes",
        icon: '✎',
        initial_size: DeskSize::new(480, 320),
        factory: || Box::new(Notes::new()),
    });
    registry.register(AppDescriptor {
        id: CLOCK,
        title: "Clock",
        icon: '◷',
        initial_size: DeskSize::new(360, 240),
        factory: || Box::new(Clock::new()),
    });
    registry.register(AppDescriptor {
        id: GALLERY,
        title: "Gallery",
        icon: '▦',
        initial_size: DeskSize::new(520, 360),
        factory: || Box::new(Gallery),
    });
    registry.register(AppDescriptor {
        id: CAMERA,
        title: "Camera",
        icon: '◉',
        initial_size: DeskSize::new(420, 320),
        factory: || Box::new(Camera),
    });
    registry
}

/// Integer keypad calculator: digits build the current operand, an
/// operator applies the pending one, `=` finalizes, `c` clears.
struct Calculator {
    accumulator: i64,
    current: Option<i64>,
    pending_op: Option<char>,
    error: bool,
}

impl Calculator {
    fn new() -> Self {
        Self {
            accumulator: 0,
            current: None,
            pending_op: None,
            error: false,
        }
    }

    fn display(&self) -> String {
        if self.error {
            return "error".to_string();
        }
        match self.current {
            Some(current) => current.to_string(),
            None => self.accumulator.to_string(),
        }
    }

    fn push_digit(&mut self, digit: i64) {
        if self.error {
            return;
        }
        let current = self.current.unwrap_or(0);
        self.current = current
            .checked_mul(10)
            .and_then(|scaled| scaled.checked_add(digit));
        if self.current.is_none() {
            self.error = true;
        }
    }

    fn apply_pending(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        let result = match self.pending_op {
            None => Some(current),
            Some('+') => self.accumulator.checked_add(current),
            Some('-') => self.accumulator.checked_sub(current),
            Some('*') => self.accumulator.checked_mul(current),
            Some('/') => self.accumulator.checked_div(current),
            Some(_) => Some(current),
        };
        match result {
            Some(value) => self.accumulator = value,
            None => self.error = true,
        }
    }

    fn press(&mut self, ch: char) {
        match ch {
            '0'..='9' => self.push_digit((ch as u8 - b'0') as i64),
            '+' | '-' | '*' | '/' => {
                self.apply_pending();
                self.pending_op = Some(ch);
            }
            '=' => {
                self.apply_pending();
                self.pending_op = None;
            }
            'c' => *self = Self::new(),
            _ => {}
        }
    }
}

impl AppWindow for Calculator {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool) {
        let display_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let lines = vec![
            Line::from(Span::styled(format!("  {}", self.display()), display_style)),
            Line::from(""),
            Line::from("  7 8 9 /"),
            Line::from("  4 5 6 *"),
            Line::from("  1 2 3 -"),
            Line::from("  c 0 = +"),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &mut AppContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                self.press(ch);
                true
            }
            KeyCode::Enter => {
                self.press('=');
                true
            }
            _ => false,
        }
    }
}

/// Scratchpad: typed characters append, Enter breaks the line.
struct Notes {
    lines: Vec<String>,
}

impl Notes {
    fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl AppWindow for Notes {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool) {
        let mut text: Vec<Line> = self.lines.iter().map(|line| Line::from(line.clone())).collect();
        if focused && let Some(last) = text.last_mut() {
            last.push_span(Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        frame.render_widget(Paragraph::new(text), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &mut AppContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                if let Some(line) = self.lines.last_mut() {
                    line.push(ch);
                }
                true
            }
            KeyCode::Enter => {
                self.lines.push(String::new());
                true
            }
            KeyCode::Backspace => {
                if let Some(line) = self.lines.last_mut() {
                    if line.pop().is_none() && self.lines.len() > 1 {
                        self.lines.pop();
                    }
                }
                true
            }
            _ => false,
        }
    }
}

/// Session clock: time elapsed since the app was opened.
struct Clock {
    started: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl AppWindow for Clock {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _focused: bool) {
        let elapsed = self.started.elapsed().as_secs();
        let text = format!(
            "  {:02}:{:02}:{:02}\n\n  session time",
            elapsed / 3600,
            (elapsed / 60) % 60,
            elapsed % 60
        );
        frame.render_widget(Paragraph::new(text), area);
    }
}

/// Placeholder gallery; `c` asks the shell to open the camera, which is
/// the canonical use of the open-app callback.
struct Gallery;

impl AppWindow for Gallery {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _focused: bool) {
        let lines = vec![
            Line::from(""),
            Line::from("  ▦ ▦ ▦ ▦"),
            Line::from("  ▦ ▦ ▦ ▦"),
            Line::from(""),
            Line::from("  press c to open the camera"),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut AppContext) -> bool {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
        {
            ctx.request_open(CAMERA);
            return true;
        }
        false
    }
}

struct Camera;

impl AppWindow for Camera {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _focused: bool) {
        frame.render_widget(
            Paragraph::new("\n  ◉ no capture device in a terminal"),
            area,
        );
    }
}
