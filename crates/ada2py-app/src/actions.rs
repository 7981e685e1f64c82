//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, warn};

use ada2py_client::{ClipboardWriter, ConvertApi};
use ada2py_core::{CodeSection, SourceFile};

use crate::message::Message;
use crate::UpdateAction;

/// External collaborators the actions reach
pub struct Services<C> {
    pub converter: Arc<C>,
    pub clipboard: Arc<dyn ClipboardWriter>,
}

impl<C> Services<C> {
    pub fn new(converter: C, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            converter: Arc::new(converter),
            clipboard,
        }
    }
}

impl<C> Clone for Services<C> {
    fn clone(&self) -> Self {
        Self {
            converter: Arc::clone(&self.converter),
            clipboard: Arc::clone(&self.clipboard),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<C>)
where
    C: ConvertApi + Sync + 'static,
{
    match action {
        UpdateAction::Convert { request_id, file } => {
            spawn_conversion(request_id, file, Arc::clone(&services.converter), msg_tx);
        }

        UpdateAction::CopyToClipboard {
            section,
            text,
            result_seq,
        } => {
            spawn_copy(
                section,
                text,
                result_seq,
                Arc::clone(&services.clipboard),
                msg_tx,
            );
        }
    }
}

/// Run one conversion and report the outcome back to the loop
fn spawn_conversion<C>(
    request_id: u64,
    file: SourceFile,
    converter: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
) where
    C: ConvertApi + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match converter.convert(&file).await {
            Ok(result) => Message::ConversionCompleted {
                request_id,
                result: Box::new(result),
            },
            Err(e) => Message::ConversionFailed {
                request_id,
                error: e.to_string(),
            },
        };

        if msg_tx.send(msg).await.is_err() {
            warn!("Conversion #{} finished after the event loop closed", request_id);
        }
    });
}

/// Write to the clipboard on a blocking thread
fn spawn_copy(
    section: CodeSection,
    text: String,
    result_seq: u64,
    clipboard: Arc<dyn ClipboardWriter>,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || clipboard.set_text(&text)).await;

        let msg = match outcome {
            Ok(Ok(())) => Message::CopySucceeded {
                section,
                result_seq,
            },
            Ok(Err(e)) => Message::CopyFailed {
                section,
                error: e.to_string(),
            },
            Err(join_err) => {
                error!("Clipboard task failed: {}", join_err);
                Message::CopyFailed {
                    section,
                    error: join_err.to_string(),
                }
            }
        };

        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ada2py_client::test_utils::{FakeConverter, RecordingClipboard};
    use ada2py_core::ConversionResult;

    fn services(
        converter: FakeConverter,
        clipboard: RecordingClipboard,
    ) -> Services<FakeConverter> {
        Services::new(converter, Arc::new(clipboard))
    }

    #[tokio::test]
    async fn test_convert_action_reports_completion() {
        let result = ConversionResult {
            logic: "L".into(),
            unit_tests: "T".into(),
            converted_code: "P".into(),
        };
        let converter = FakeConverter::succeeding(result.clone());
        let services = services(converter.clone(), RecordingClipboard::new());
        let (tx, mut rx) = mpsc::channel(4);

        let file = SourceFile::from_path("hello.adb");
        handle_action(
            UpdateAction::Convert {
                request_id: 7,
                file: file.clone(),
            },
            tx,
            &services,
        );

        match rx.recv().await {
            Some(Message::ConversionCompleted {
                request_id,
                result: got,
            }) => {
                assert_eq!(request_id, 7);
                assert_eq!(*got, result);
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(converter.calls(), vec![file]);
    }

    #[tokio::test]
    async fn test_convert_action_reports_failure_message() {
        let services = services(
            FakeConverter::failing(400, "File is empty"),
            RecordingClipboard::new(),
        );
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::Convert {
                request_id: 1,
                file: SourceFile::from_path("empty.adb"),
            },
            tx,
            &services,
        );

        match rx.recv().await {
            Some(Message::ConversionFailed { request_id, error }) => {
                assert_eq!(request_id, 1);
                assert_eq!(error, "File is empty");
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_copy_action_writes_exact_text() {
        let clipboard = RecordingClipboard::new();
        let services = services(FakeConverter::default(), clipboard.clone());
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CopyToClipboard {
                section: CodeSection::UnitTests,
                text: "def test_x():\n    pass\n".into(),
                result_seq: 4,
            },
            tx,
            &services,
        );

        assert!(matches!(
            rx.recv().await,
            Some(Message::CopySucceeded {
                section: CodeSection::UnitTests,
                result_seq: 4,
            })
        ));
        assert_eq!(clipboard.writes(), vec!["def test_x():\n    pass\n"]);
    }

    #[tokio::test]
    async fn test_copy_action_failure() {
        let services = services(
            FakeConverter::default(),
            RecordingClipboard::failing("no display"),
        );
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CopyToClipboard {
                section: CodeSection::GeneratedCode,
                text: "x".into(),
                result_seq: 1,
            },
            tx,
            &services,
        );

        match rx.recv().await {
            Some(Message::CopyFailed { section, error }) => {
                assert_eq!(section, CodeSection::GeneratedCode);
                assert!(error.contains("no display"));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }
}
