use docubot_core::{AnalysisResult, UploadError, UploadRequest};

/// Commands sent from the TUI to the backend listener.
pub enum BackendCommand {
    /// Submit one upload to the analysis service.
    Upload { request: UploadRequest },
}

/// Events flowing from the backend task to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    /// The upload finished, successfully or not. Exactly one of these is
    /// emitted per accepted submission.
    UploadFinished {
        outcome: Result<AnalysisResult, UploadError>,
    },
}
