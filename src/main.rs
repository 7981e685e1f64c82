//! ada2py - terminal client for the Ada to Python conversion service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;

use ada2py_app::{config, message::Message, Engine};
use ada2py_core::prelude::*;

/// ada2py - convert Ada sources to Python with unit tests and explanations
#[derive(Parser, Debug)]
#[command(name = "ada2py")]
#[command(about = "Convert Ada files to Python through the conversion service", long_about = None)]
struct Args {
    /// Ada source file (.ada or .adb) to pre-fill, or to convert in headless mode
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Conversion service base URL (overrides env and config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default .ada2py/config.toml in the current directory and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let project_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        config::init_config_dir(&project_path)?;
        eprintln!(
            "Wrote {}",
            project_path
                .join(config::ADA2PY_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    // Initialize logging (to file, since the TUI and headless mode own stdout)
    ada2py_core::logging::init()?;

    // An invalid base URL is reported before the terminal is touched
    let mut engine = match Engine::new(&project_path, args.base_url.as_deref()) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if args.headless {
        let Some(file) = args.file else {
            eprintln!("❌ Headless mode needs a FILE to convert");
            std::process::exit(2);
        };
        let converted = headless::runner::run_headless(engine, &file).await?;
        if !converted {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(file) = args.file {
        engine.process_message(Message::SetPath(file.display().to_string()));
    }

    let result = ada2py_tui::run(engine).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("ada2py exiting");
    result
}
