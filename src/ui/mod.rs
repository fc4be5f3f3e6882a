pub mod render;
pub mod status;
pub mod terminal;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use render::{ListRow, VideoRow, render_rows};
pub use status::{MessageKind, StatusChannel, StatusMessage};
pub use terminal::TerminalView;
pub use view::LibraryView;
