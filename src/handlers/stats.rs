use super::VideoLibraryClient;
use crate::{models::StorageStats, ui::MessageKind, units::format_size};

impl VideoLibraryClient {
    /// Shows used and remaining space, and a persistent warning once usage
    /// passes the configured threshold.
    pub fn update_storage_stats(&self, used_bytes: u64) -> StorageStats {
        let stats = StorageStats::new(used_bytes, self.limits.quota_bytes);

        self.view.show_storage(
            &format_size(stats.used_bytes),
            &format_size(stats.available_bytes()),
        );

        tracing::debug!(
            "Storage: {} bytes used, {} bytes available",
            stats.used_bytes,
            stats.available_bytes()
        );

        if stats.exceeds(self.limits.warning_threshold_percent) {
            let percent = stats.usage_percent().round();
            tracing::warn!("Storage usage at {}%", percent);
            self.status.show(
                format!("Warning: you are using {}% of your storage space", percent),
                MessageKind::Warning,
            );
        }

        stats
    }
}
