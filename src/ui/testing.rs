use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use super::{LibraryView, ListRow, MessageKind, StatusMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    List(Vec<ListRow>),
    Message(String, MessageKind),
    ClearMessage,
    Storage(String, String),
    ResetFileInput,
    Open(String),
    Confirm(String),
}

/// View that records every call, for asserting on what the user would see.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    confirm_answer: AtomicBool,
}

impl RecordingView {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: AtomicBool::new(answer),
            ..Self::default()
        }
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn lists(&self) -> Vec<Vec<ListRow>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::List(rows) => Some(rows),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<(String, MessageKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Message(text, kind) => Some((text, kind)),
                _ => None,
            })
            .collect()
    }

    pub fn storage(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Storage(used, available) => Some((used, available)),
                _ => None,
            })
            .collect()
    }

    /// What the status line shows right now.
    pub fn current_message(&self) -> Option<(String, MessageKind)> {
        self.events().into_iter().fold(None, |current, e| match e {
            ViewEvent::Message(text, kind) => Some((text, kind)),
            ViewEvent::ClearMessage => None,
            _ => current,
        })
    }

    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }
}

#[async_trait]
impl LibraryView for RecordingView {
    fn render_list(&self, rows: &[ListRow]) {
        self.record(ViewEvent::List(rows.to_vec()));
    }

    fn show_message(&self, message: &StatusMessage) {
        self.record(ViewEvent::Message(message.text.clone(), message.kind));
    }

    fn clear_message(&self) {
        self.record(ViewEvent::ClearMessage);
    }

    fn show_storage(&self, used: &str, available: &str) {
        self.record(ViewEvent::Storage(used.to_string(), available.to_string()));
    }

    fn reset_file_input(&self) {
        self.record(ViewEvent::ResetFileInput);
    }

    fn open_url(&self, url: &str) {
        self.record(ViewEvent::Open(url.to_string()));
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.record(ViewEvent::Confirm(prompt.to_string()));
        self.confirm_answer.load(Ordering::SeqCst)
    }
}
