use async_trait::async_trait;

use super::{ListRow, StatusMessage};

/// Presentation surface the client drives: the video list, the status line,
/// the storage figures and the file input.
#[async_trait]
pub trait LibraryView: Send + Sync {
    /// Replaces the whole list with `rows`.
    fn render_list(&self, rows: &[ListRow]);

    fn show_message(&self, message: &StatusMessage);

    fn clear_message(&self);

    fn show_storage(&self, used: &str, available: &str);

    fn reset_file_input(&self);

    /// Opens `url` in a new browsing context.
    fn open_url(&self, url: &str);

    /// Modal yes/no prompt. Nothing else proceeds until it resolves.
    async fn confirm(&self, prompt: &str) -> bool;
}
