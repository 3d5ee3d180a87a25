/*!
 * OrbitOS Core - Main Entry Point
 *
 * Boots a desktop session over the durable slot store and drops into
 * an interactive terminal shell against the virtual filesystem.
 */

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

use orbit_core::{AppId, DiskSlots, Session, Shell, ShellOutput};

fn main() -> Result<()> {
    // Initialize structured tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("OrbitOS core starting...");

    let storage_path =
        std::env::var("ORBIT_STORAGE_PATH").unwrap_or_else(|_| "/tmp/orbit-os-storage".to_string());
    info!(storage_path = %storage_path, "Opening slot store");
    let slots = Arc::new(DiskSlots::new(&storage_path));

    let session = Session::start(slots);
    if let Some(fault) = session.fault() {
        warn!("{fault}");
    }
    info!(
        installed = session.installed_apps().len(),
        "Session ready"
    );

    match session.launch(AppId::Terminal) {
        Ok(window) => info!(%window, "Terminal window open"),
        Err(e) => warn!("{e}"),
    }

    run_shell(&session)?;

    info!("Session ended");
    Ok(())
}

/// Interactive shell REPL over stdin until `exit` or EOF
fn run_shell(session: &Session) -> Result<()> {
    let mut shell = Shell::new(session.vfs().clone());
    for line in Shell::banner() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", shell.prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "exit" {
            break;
        }

        match shell.exec(line) {
            ShellOutput::Text(text) => println!("{text}\n"),
            ShellOutput::Clear => print!("\x1b[2J\x1b[H"),
            ShellOutput::Silence => {}
        }
    }
    Ok(())
}
