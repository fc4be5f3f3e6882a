use super::{VideoLibraryClient, require_success};
use crate::{
    error::{ClientError, Result},
    ui::{MessageKind, VideoRow, render_rows},
};

const LOAD_FAILED: &str = "Failed to load videos";
const DELETE_FAILED: &str = "Failed to delete the video";
const DELETE_PROMPT: &str = "Are you sure you want to delete this video?";
const DELETED: &str = "Video deleted successfully!";

impl VideoLibraryClient {
    /// Fetches the collection and re-renders the whole list. A failed fetch
    /// leaves whatever was rendered before on screen.
    pub async fn load_videos(&self) {
        tracing::info!("Loading video list");

        match self.fetch_and_render().await {
            Ok(count) => tracing::info!("Rendered {} videos", count),
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "Failed to load videos: {}", e);
                self.status.show(e.user_message(LOAD_FAILED), MessageKind::Error);
            }
        }
    }

    async fn fetch_and_render(&self) -> Result<usize> {
        let response = self.transport.list_videos().await?;

        if !response.success {
            return Err(ClientError::Server(response.error));
        }

        self.view.render_list(&render_rows(&response.videos));
        self.update_storage_stats(response.total_size.unwrap_or(0));

        Ok(response.videos.len())
    }

    pub fn view_video(&self, row: &VideoRow) {
        tracing::info!("Opening {}", row.url);
        self.view.open_url(&row.url);
    }

    /// Deletes the video behind `row` after confirmation, then reloads the list.
    pub async fn delete_video(&self, row: &VideoRow) {
        if !self.view.confirm(DELETE_PROMPT).await {
            tracing::debug!("Delete of {} cancelled", row.name);
            return;
        }

        tracing::info!("Deleting video: {}", row.name);

        let response = match self
            .transport
            .delete_video(&row.name)
            .await
            .and_then(require_success)
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "Failed to delete {}: {}", row.name, e);
                self.status
                    .show(e.user_message(DELETE_FAILED), MessageKind::Error);
                return;
            }
        };

        tracing::info!("Video {} deleted successfully", row.name);
        self.status.show(DELETED, MessageKind::Success);

        if let Some(total_size) = response.total_size {
            self.update_storage_stats(total_size);
        }

        self.load_videos().await;
    }
}
