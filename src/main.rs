// Copyright (c) 2026 rezky_nightky

mod cell;
mod config;
mod droplet;
mod frame;
mod input;
mod noise;
mod runtime;
mod splash;
mod terminal;
mod terrain;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

#[cfg(unix)]
use std::thread;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::config::{Args, DEBUG_LOG_PATH, RAIN_SEED};
use crate::runtime::Scheduler;
use crate::terminal::{restore_terminal_best_effort, Terminal};

fn build_info() -> &'static str {
    env!("DRIZZLE_BUILD")
}

fn git_sha() -> &'static str {
    env!("DRIZZLE_GIT_SHA")
}

/// Sends `tracing` output to the debug log. Without it every event is
/// discarded, which keeps the alternate screen clean. Returns whether the
/// log was installed.
fn init_debug_log(path: &Path) -> std::io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
    {
        eprintln!("failed to install debug log: {}", e);
        return Ok(false);
    }
    Ok(true)
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let args = Args::parse();

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.info {
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        if git_sha().is_empty() {
            println!("Build: {}", build_info());
        } else {
            println!("Build: {} ({})", build_info(), git_sha());
        }
        println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return Ok(());
    }

    if args.debug_log {
        init_debug_log(Path::new(DEBUG_LOG_PATH))?;
    }

    let term = Terminal::new()?;
    let events = input::spawn()?;
    let mut scheduler = Scheduler::new(term, events, StdRng::seed_from_u64(RAIN_SEED))?;
    scheduler.run()
}
