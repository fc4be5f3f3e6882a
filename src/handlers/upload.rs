use super::{VideoLibraryClient, require_success};
use crate::{
    error::{ClientError, Result},
    models::SelectedFile,
    ui::MessageKind,
};

const UPLOADING: &str = "Uploading video...";
const UPLOADED: &str = "Upload completed successfully!";
const UPLOAD_FAILED: &str = "Failed to upload the video";

impl VideoLibraryClient {
    fn check_size(&self, file: &SelectedFile) -> Result<()> {
        if file.size > self.limits.upload_limit_bytes {
            return Err(ClientError::FileTooLarge {
                size: file.size,
                limit: self.limits.upload_limit_bytes,
            });
        }
        Ok(())
    }

    /// Runs when the user picks a file. Oversized files are rejected and the
    /// input is reset right away.
    pub fn on_file_selected(&self, file: &SelectedFile) -> bool {
        match self.check_size(file) {
            Ok(()) => {
                tracing::debug!("Selected {} ({} bytes)", file.name, file.size);
                true
            }
            Err(e) => {
                tracing::warn!("Rejected {}: {}", file.name, e);
                self.status.show(e.user_message(UPLOAD_FAILED), MessageKind::Error);
                self.view.reset_file_input();
                false
            }
        }
    }

    pub async fn submit_upload(&self, file: Option<&SelectedFile>) {
        let file = match file.ok_or(ClientError::NoFileSelected).and_then(|file| {
            self.check_size(file)?;
            Ok(file)
        }) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "Upload rejected: {}", e);
                self.status.show(e.user_message(UPLOAD_FAILED), MessageKind::Error);
                return;
            }
        };

        tracing::info!("Uploading {} ({} bytes)", file.name, file.size);
        self.status.show(UPLOADING, MessageKind::None);

        let response = match self
            .transport
            .upload_video(file)
            .await
            .and_then(require_success)
        {
            Ok(response) => response,
            Err(ClientError::Server(error)) => {
                tracing::warn!("Server rejected upload of {}: {:?}", file.name, error);
                self.status.show(
                    format!("Error: {}", error.as_deref().unwrap_or("Upload failed")),
                    MessageKind::Error,
                );
                return;
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "Failed to upload {}: {}", file.name, e);
                self.status.show(UPLOAD_FAILED, MessageKind::Error);
                return;
            }
        };

        tracing::info!("Upload of {} completed", file.name);
        self.view.reset_file_input();
        self.status.show(UPLOADED, MessageKind::Success);

        if let Some(total_size) = response.total_size {
            self.update_storage_stats(total_size);
        }

        self.load_videos().await;
    }
}
