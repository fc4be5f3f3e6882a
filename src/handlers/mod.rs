pub mod stats;
pub mod upload;
pub mod videos;

use std::{sync::Arc, time::Duration};

use crate::{
    error::{ClientError, Result},
    models::MutationResponse,
    transport::VideoTransport,
    ui::{LibraryView, StatusChannel},
    units::{QUOTA_BYTES, UPLOAD_LIMIT_BYTES},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub upload_limit_bytes: u64,
    pub quota_bytes: u64,
    pub warning_threshold_percent: u8,
    pub message_ttl: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            upload_limit_bytes: UPLOAD_LIMIT_BYTES,
            quota_bytes: QUOTA_BYTES,
            warning_threshold_percent: 90,
            message_ttl: Duration::from_secs(5),
        }
    }
}

/// Drives the video library UI: list, upload, delete and storage usage.
/// Every failure ends up on the status line; nothing is returned to callers.
#[derive(Clone)]
pub struct VideoLibraryClient {
    transport: Arc<dyn VideoTransport>,
    view: Arc<dyn LibraryView>,
    status: StatusChannel,
    limits: Limits,
}

impl VideoLibraryClient {
    pub fn new(
        transport: Arc<dyn VideoTransport>,
        view: Arc<dyn LibraryView>,
        limits: Limits,
    ) -> Self {
        let status = StatusChannel::new(view.clone(), limits.message_ttl);
        Self {
            transport,
            view,
            status,
            limits,
        }
    }
}

fn require_success(response: MutationResponse) -> Result<MutationResponse> {
    if response.success {
        Ok(response)
    } else {
        Err(ClientError::Server(response.error))
    }
}
