use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{LibraryView, ListRow, MessageKind, StatusMessage, VideoRow};
use crate::models::SelectedFile;

/// Line-oriented view: prints to stdout, reads answers from stdin.
pub struct TerminalView {
    input: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
    rows: Mutex<Vec<ListRow>>,
    file_input: Mutex<Option<SelectedFile>>,
    message: Mutex<Option<StatusMessage>>,
    storage: Mutex<Option<(String, String)>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            input: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            rows: Mutex::default(),
            file_input: Mutex::default(),
            message: Mutex::default(),
            storage: Mutex::default(),
        }
    }

    /// Next line from stdin, or `None` once input is closed.
    pub async fn read_line(&self) -> Option<String> {
        match self.input.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    /// Row by its 1-based number in the last rendered list.
    pub fn row(&self, number: usize) -> Option<VideoRow> {
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        match rows.get(number.checked_sub(1)?)? {
            ListRow::Video(row) => Some(row.clone()),
            ListRow::Placeholder => None,
        }
    }

    pub fn select_file(&self, file: SelectedFile) {
        *self.file_input.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    }

    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.file_input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn print_status(&self) {
        let storage = self.storage.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((used, available)) = &*storage {
            println!("Used: {} | Available: {}", used, available);
        }
        drop(storage);

        match &*self.message.lock().unwrap_or_else(PoisonError::into_inner) {
            Some(message) => println!("{}", format_message(message)),
            None => println!("No status message"),
        }
        match self.selected_file() {
            Some(file) => println!("Selected: {}", file.name),
            None => println!("No file selected"),
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

fn format_message(message: &StatusMessage) -> String {
    match message.kind {
        MessageKind::None => message.text.clone(),
        kind => format!("[{}] {}", kind.as_str(), message.text),
    }
}

#[async_trait]
impl LibraryView for TerminalView {
    fn render_list(&self, rows: &[ListRow]) {
        println!("Videos:");
        for (i, row) in rows.iter().enumerate() {
            match row {
                ListRow::Video(video) => println!("  {:>3}. {}", i + 1, video.label),
                ListRow::Placeholder => println!("       {}", row.text()),
            }
        }
        *self.rows.lock().unwrap_or_else(PoisonError::into_inner) = rows.to_vec();
    }

    fn show_message(&self, message: &StatusMessage) {
        println!("{}", format_message(message));
        *self.message.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.clone());
    }

    fn clear_message(&self) {
        *self.message.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn show_storage(&self, used: &str, available: &str) {
        println!("Used: {} | Available: {}", used, available);
        *self.storage.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((used.to_string(), available.to_string()));
    }

    fn reset_file_input(&self) {
        *self.file_input.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn open_url(&self, url: &str) {
        println!("Open: {}", url);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        println!("{} [y/N]", prompt);
        self.read_line()
            .await
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn video(name: &str) -> ListRow {
        ListRow::Video(VideoRow {
            name: name.to_string(),
            url: format!("/uploads/{}", name),
            label: name.to_string(),
        })
    }

    #[tokio::test]
    async fn rows_are_numbered_from_one() {
        let view = TerminalView::new();
        view.render_list(&[video("a.mp4"), video("b.mp4")]);

        assert_eq!(view.row(1).map(|r| r.name), Some("a.mp4".to_string()));
        assert_eq!(view.row(2).map(|r| r.name), Some("b.mp4".to_string()));
        assert!(view.row(0).is_none());
        assert!(view.row(3).is_none());
    }

    #[tokio::test]
    async fn placeholder_is_not_selectable() {
        let view = TerminalView::new();
        view.render_list(&[ListRow::Placeholder]);

        assert!(view.row(1).is_none());
    }

    #[tokio::test]
    async fn reset_clears_selected_file() {
        let view = TerminalView::new();
        view.select_file(SelectedFile {
            name: "a.mp4".to_string(),
            size: 1,
            path: PathBuf::from("a.mp4"),
        });
        assert!(view.selected_file().is_some());

        view.reset_file_input();
        assert!(view.selected_file().is_none());
    }

    #[test]
    fn neutral_messages_have_no_prefix() {
        let neutral = StatusMessage::new("Uploading video...", MessageKind::None);
        let error = StatusMessage::new("Failed", MessageKind::Error);

        assert_eq!(format_message(&neutral), "Uploading video...");
        assert_eq!(format_message(&error), "[error] Failed");
    }
}
