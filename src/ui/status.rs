use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;
use uuid::Uuid;

use super::LibraryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    None,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Warning => "warning",
            MessageKind::None => "",
        }
    }

    /// Warnings stay until the next message replaces them.
    pub fn auto_clears(&self) -> bool {
        !matches!(self, MessageKind::Warning)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: Uuid,
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
        }
    }
}

#[derive(Default)]
struct ChannelState {
    current: Option<Uuid>,
    pending_clear: Option<JoinHandle<()>>,
}

/// Single status line shared by every operation of a client. Each new
/// message preempts the clear scheduled for the previous one.
#[derive(Clone)]
pub struct StatusChannel {
    view: Arc<dyn LibraryView>,
    ttl: Duration,
    state: Arc<Mutex<ChannelState>>,
}

impl StatusChannel {
    pub fn new(view: Arc<dyn LibraryView>, ttl: Duration) -> Self {
        Self {
            view,
            ttl,
            state: Arc::default(),
        }
    }

    pub fn show(&self, text: impl Into<String>, kind: MessageKind) -> Uuid {
        let message = StatusMessage::new(text, kind);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(pending) = state.pending_clear.take() {
            pending.abort();
        }

        state.current = Some(message.id);
        self.view.show_message(&message);

        if kind.auto_clears() {
            state.pending_clear = Some(self.schedule_clear(message.id));
        }

        message.id
    }

    /// Id of the message on screen, if any.
    #[cfg(test)]
    pub fn current(&self) -> Option<Uuid> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }

    fn schedule_clear(&self, id: Uuid) -> JoinHandle<()> {
        let view = self.view.clone();
        let state = self.state.clone();
        let ttl = self.ttl;

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;

            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.current == Some(id) {
                state.current = None;
                state.pending_clear = None;
                view.clear_message();
            }
        })
    }
}
