use docubot_core::UploadRequest;

use super::App;
use crate::model::form::NO_FILE_SELECTED;
use crate::tui_event::{BackendCommand, BackendEvent};

impl App {
    /// Validate the form and hand one upload to the service task.
    ///
    /// At most one upload runs at a time; submissions while one is in
    /// flight are ignored.
    pub fn submit_upload(&mut self) {
        if self.form.uploading {
            return;
        }
        let Some(file) = self.form.file.clone() else {
            self.form.error = Some(NO_FILE_SELECTED.to_string());
            return;
        };

        self.form.error = None;
        self.form.uploading = true;
        let request = UploadRequest::new(file, &self.form.query, self.form.use_custom_model);
        if let Some(tx) = &self.backend_cmd_tx {
            let _ = tx.send(BackendCommand::Upload { request });
        }
    }

    /// Apply one event from the backend listener.
    ///
    /// Success replaces the displayed analysis wholesale; failure leaves it
    /// untouched and surfaces the message on the form.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::UploadFinished { outcome } => {
                self.form.uploading = false;
                match outcome {
                    Ok(analysis) => {
                        self.form.error = None;
                        self.results.set_analysis(analysis);
                    }
                    Err(err) => {
                        self.form.error = Some(err.user_message());
                    }
                }
            }
        }
    }
}
