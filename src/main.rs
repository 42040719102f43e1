use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use term_desk::drivers::InputDriver;
use term_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_desk::error::ShellError;
use term_desk::event_loop::{ControlFlow, EventLoop};
use term_desk::shell::Shell;
use term_desk::{apps, tracing_sub};

/// A floating-window desktop shell for terminal emulators.
#[derive(Debug, Parser)]
#[command(name = "term-desk", version, about)]
struct Cli {
    /// Write tracing output to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Event-poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Seed for the window placement jitter (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// List the registered applications and exit.
    #[arg(long)]
    list_apps: bool,
}

fn main() -> Result<(), ShellError> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let registry = Arc::new(apps::builtin_registry());
    if cli.list_apps {
        for descriptor in registry.iter() {
            println!(
                "{}  {:<12} {}",
                descriptor.icon,
                descriptor.id.as_str(),
                descriptor.title
            );
        }
        return Ok(());
    }

    let mut shell = match cli.seed {
        Some(seed) => Shell::with_seed(registry, seed),
        None => Shell::new(registry),
    };

    let mut input = ConsoleInputDriver::new();
    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    input.set_mouse_capture(shell.mouse_capture_enabled())?;

    let result = run(
        &mut shell,
        &mut input,
        &mut output,
        Duration::from_millis(cli.tick_ms.max(1)),
    );

    output.exit()?;
    result
}

fn run(
    shell: &mut Shell,
    input: &mut ConsoleInputDriver,
    output: &mut ConsoleOutputDriver,
    poll_interval: Duration,
) -> Result<(), ShellError> {
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.run(|driver, event| {
        if let Some(event) = event {
            let _ = shell.handle_event(&event);
        } else {
            output.draw(|frame| shell.render(frame))?;
        }
        if let Some(enabled) = shell.take_mouse_capture_change() {
            let _ = driver.set_mouse_capture(enabled);
        }
        if shell.should_quit() {
            return Ok(ControlFlow::Quit);
        }
        Ok(ControlFlow::Continue)
    })?;
    Ok(())
}
