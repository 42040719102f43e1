use std::io;

use thiserror::Error;

/// Failures surfaced by the shell binary. The window-manager core never
/// errors — stale ids are absorbed as no-ops — so everything here is
/// terminal plumbing.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
