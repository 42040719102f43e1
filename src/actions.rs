use std::fmt;

/// Shell-level commands reachable from the keyboard. Everything here maps
/// onto a window-manager operation or a shell toggle; keys that don't
/// resolve to an action fall through to the focused app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    CycleFocus,
    CloseActive,
    MinimizeActive,
    ToggleMaximizeActive,
    ToggleMouseCapture,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::CycleFocus => "Cycle window focus",
            Action::CloseActive => "Close active window",
            Action::MinimizeActive => "Minimize active window",
            Action::ToggleMaximizeActive => "Maximize / restore active window",
            Action::ToggleMouseCapture => "Toggle mouse capture",
        };
        write!(f, "{}", s)
    }
}
