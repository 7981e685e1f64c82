//! Main TUI runner - entry points and event loop
//!
//! - `run`: entry point for the real conversion service
//! - `run_with_engine`: drives any prepared Engine
//! - `run_loop`: main event loop processing terminal and background messages

use ada2py_app::Engine;
use ada2py_client::ConvertApi;
use ada2py_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against the configured conversion service
pub async fn run(engine: Engine) -> Result<()> {
    run_with_engine(engine).await
}

/// Run the TUI with a prepared Engine
pub async fn run_with_engine<C>(mut engine: Engine<C>) -> Result<()>
where
    C: ConvertApi + Sync + 'static,
{
    let mut term = terminal::init();

    info!("TUI started (backend {})", engine.api_config.base_url);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    terminal::restore();

    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: ConvertApi + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from background tasks and signals
        engine.drain_pending_messages();

        // Held keys keep poll from timing out, so Tick alone can't expire these
        engine.expire_copy_feedback();

        // Render
        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
