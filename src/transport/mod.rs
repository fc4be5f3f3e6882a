pub mod http;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{ListVideosResponse, MutationResponse, SelectedFile},
};

pub use http::HttpTransport;

/// Multipart field the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "videoFile";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoTransport: Send + Sync {
    async fn list_videos(&self) -> Result<ListVideosResponse>;
    async fn upload_video(&self, file: &SelectedFile) -> Result<MutationResponse>;
    async fn delete_video(&self, name: &str) -> Result<MutationResponse>;
}
