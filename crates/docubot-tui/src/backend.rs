use std::sync::Arc;

use tokio::sync::mpsc;

use docubot_core::AnalysisBackend;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Listen for UI commands and run uploads against the analysis service.
///
/// Each upload runs as its own task so the listener keeps accepting
/// commands; the form's in-flight flag keeps submissions to one at a time.
/// The loop ends when the command channel closes (app shutdown).
pub async fn run_listener(
    service: Arc<dyn AnalysisBackend>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::Upload { request } => {
                let service = Arc::clone(&service);
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    let outcome = service.analyze(&request).await;
                    let _ = tx.send(BackendEvent::UploadFinished { outcome });
                });
            }
        }
    }
}
