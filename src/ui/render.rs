use crate::{models::VideoEntry, units::format_size};

pub const EMPTY_LIST_TEXT: &str = "No videos found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRow {
    pub name: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Placeholder,
    Video(VideoRow),
}

impl ListRow {
    pub fn text(&self) -> &str {
        match self {
            ListRow::Placeholder => EMPTY_LIST_TEXT,
            ListRow::Video(row) => &row.label,
        }
    }
}

pub fn render_row(entry: &VideoEntry) -> VideoRow {
    let label = match entry.size {
        Some(size) => format!("{} ({})", entry.name, format_size(size)),
        None => entry.name.clone(),
    };

    VideoRow {
        name: entry.name.clone(),
        url: entry.url.clone(),
        label,
    }
}

/// Full rendering of the list. An empty collection yields a single placeholder.
pub fn render_rows(entries: &[VideoEntry]) -> Vec<ListRow> {
    if entries.is_empty() {
        return vec![ListRow::Placeholder];
    }

    entries
        .iter()
        .map(|entry| ListRow::Video(render_row(entry)))
        .collect()
}
