//! Headless mode runner - one conversion without the TUI
//!
//! Feeds the file through the engine exactly as the TUI would (path input,
//! then submit) and writes the engine's events as NDJSON until the run
//! reaches a result, a failure, or a quit signal.

use std::io::Write;
use std::path::Path;

use tokio::sync::broadcast;
use tracing::{info, warn};

use ada2py_app::{message::Message, Engine, EngineEvent};
use ada2py_client::ConvertApi;
use ada2py_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode against the configured service.
///
/// Returns `Ok(true)` when the conversion succeeded.
pub async fn run_headless(mut engine: Engine, file: &Path) -> Result<bool> {
    info!("═══════════════════════════════════════════════════════");
    info!("ada2py starting in HEADLESS mode");
    info!("File: {}", file.display());
    info!("═══════════════════════════════════════════════════════");

    let mut stdout = std::io::stdout();
    let result = convert_file(&mut engine, file, &mut stdout).await;

    engine.shutdown();

    info!("ada2py headless mode exiting");
    result
}

/// Drive one conversion and write its events to `out`
pub async fn convert_file<C, W>(engine: &mut Engine<C>, file: &Path, out: &mut W) -> Result<bool>
where
    C: ConvertApi + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();

    engine.process_message(Message::SetPath(file.display().to_string()));
    engine.process_message(Message::SubmitForm);

    loop {
        if let Some(finished) = flush_events(&mut events, out)? {
            return Ok(finished);
        }

        if engine.should_quit() {
            info!("Quit requested before the conversion finished");
            return Ok(false);
        }

        match engine.recv_message().await {
            Some(msg) => engine.process_message(msg),
            None => return Err(Error::ChannelClosed),
        }
    }
}

/// Write pending events. Returns `Some(success)` once a terminal event was
/// written.
fn flush_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<bool>> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                let Some(headless) = HeadlessEvent::from_engine_event(&event) else {
                    continue;
                };
                headless.write_to(out)?;
                if headless.is_terminal() {
                    return Ok(Some(headless.is_success()));
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(_) => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ada2py_app::actions::Services;
    use ada2py_app::config::Settings;
    use ada2py_client::test_utils::{FakeConverter, RecordingClipboard};
    use ada2py_client::ApiConfig;
    use ada2py_core::ConversionResult;

    fn engine_with(converter: FakeConverter) -> Engine<FakeConverter> {
        Engine::with_services(
            Settings::default(),
            ApiConfig::default(),
            Services::new(converter, Arc::new(RecordingClipboard::new())),
        )
    }

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|l| serde_json::from_str(l).expect("invalid JSON line"))
            .collect()
    }

    #[tokio::test]
    async fn test_headless_success() {
        let converter = FakeConverter::succeeding(ConversionResult {
            logic: "L".into(),
            unit_tests: "T".into(),
            converted_code: "P".into(),
        });
        let mut engine = engine_with(converter.clone());
        let mut out = Vec::new();

        let ok = convert_file(&mut engine, Path::new("hello.adb"), &mut out)
            .await
            .unwrap();

        assert!(ok);
        let lines = lines(&out);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "conversion_started");
        assert_eq!(lines[0]["file_name"], "hello.adb");
        assert_eq!(lines[1]["event"], "conversion_completed");
        assert_eq!(lines[1]["converted_code"], "P");
        assert_eq!(converter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_headless_service_failure() {
        let mut engine = engine_with(FakeConverter::failing(400, "File is empty"));
        let mut out = Vec::new();

        let ok = convert_file(&mut engine, Path::new("empty.adb"), &mut out)
            .await
            .unwrap();

        assert!(!ok);
        let lines = lines(&out);
        assert_eq!(lines.last().unwrap()["event"], "conversion_failed");
        assert_eq!(lines.last().unwrap()["error"], "File is empty");
    }

    #[tokio::test]
    async fn test_headless_rejects_wrong_extension_without_request() {
        let converter = FakeConverter::default();
        let mut engine = engine_with(converter.clone());
        let mut out = Vec::new();

        let ok = convert_file(&mut engine, Path::new("script.js"), &mut out)
            .await
            .unwrap();

        assert!(!ok);
        let lines = lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["event"], "validation_failed");
        assert_eq!(
            lines[0]["message"],
            "Please select a valid Ada file (.ada or .adb)"
        );
        assert_eq!(converter.call_count(), 0);
    }
}
