use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::Result,
    units::{QUOTA_BYTES, UPLOAD_LIMIT_BYTES},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVideosResponse {
    pub success: bool,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    #[serde(default)]
    pub total_size: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by both the upload and delete endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub total_size: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStats {
    pub used_bytes: u64,
    pub quota_bytes: u64,
}

impl StorageStats {
    pub fn new(used_bytes: u64, quota_bytes: u64) -> Self {
        Self {
            used_bytes,
            quota_bytes,
        }
    }

    pub fn available_bytes(&self) -> u64 {
        self.quota_bytes.saturating_sub(self.used_bytes)
    }

    pub fn usage_percent(&self) -> f64 {
        if self.quota_bytes == 0 {
            return 100.0;
        }
        self.used_bytes as f64 / self.quota_bytes as f64 * 100.0
    }

    /// True when usage is strictly above `threshold_percent` of the quota.
    pub fn exceeds(&self, threshold_percent: u8) -> bool {
        (self.used_bytes as u128) * 100 > (self.quota_bytes as u128) * threshold_percent as u128
    }
}

/// The file currently chosen in the upload input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;

        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            )
            .into());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_url: String,
    #[serde(default = "default_upload_limit")]
    pub upload_limit_bytes: u64,
    #[serde(default = "default_quota")]
    pub quota_bytes: u64,
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_percent: u8,
    #[serde(default = "default_message_ttl")]
    pub message_ttl_secs: u64,
}

fn default_upload_limit() -> u64 {
    UPLOAD_LIMIT_BYTES
}

fn default_quota() -> u64 {
    QUOTA_BYTES
}

fn default_warning_threshold() -> u8 {
    90
}

fn default_message_ttl() -> u64 {
    5
}
