use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::ShellError;

/// Initialize the global tracing subscriber.
///
/// Writes to `log_file` when given, stderr otherwise. Never stdout — the
/// alternate screen owns it, and a stray log line would corrupt the frame.
/// Safe to call once per process; a second call reports `Logging`.
pub fn init(log_file: Option<&Path>) -> Result<(), ShellError> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .try_init()
                .map_err(|err| ShellError::Logging(err.to_string()))
        }
        None => tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|err| ShellError::Logging(err.to_string())),
    }
}
