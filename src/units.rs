pub const GIB: u64 = 1024 * 1024 * 1024;

/// Largest single file the client will submit.
pub const UPLOAD_LIMIT_BYTES: u64 = 3 * GIB;

/// Total storage the service reports usage against.
pub const QUOTA_BYTES: u64 = 999 * GIB;

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count with 1024-based units, e.g. `1536` -> `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
