//! photoset — camera settings advisor.
//!
//! Pick a camera body, a lens and a shooting scenario; a structured text
//! generation service answers with a complete settings recommendation.
//! When the service is unreachable or answers garbage, a baseline
//! recommendation built from the lens alone is shown instead.
//!
//! Modules:
//!   - catalog   — cameras, lenses, scenarios, glossary + lens suggestions
//!   - llm       — providers, prompt/schema, request/fallback pipeline
//!   - settings  — provider resolution, API keys, env-driven options
//!   - favorites — saved recommendations and their JSON store
//!   - session   — selection state, current result, favorite toggling
//!   - export    — printable sheet, file export, clipboard
//!   - display   — themed terminal rendering
//!   - cli       — command line front-end

pub mod catalog;
pub mod cli;
pub mod display;
pub mod export;
pub mod favorites;
pub mod llm;
pub mod session;
pub mod settings;

use clap::Parser;
use std::process::ExitCode;

/// Entry point — called by the `photoset` binary.
pub fn run() -> ExitCode {
    // Load .env.local → .env from the working directory, first one wins.
    'env_load: for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => log_startup(&format!("Loaded {}", path.display())),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    let cli = cli::Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("[STARTUP] Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(cli::execute(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_startup(msg: &str) {
    if std::env::var_os("RUST_LOG").is_some() {
        eprintln!("[STARTUP] {}", msg);
    }
}
