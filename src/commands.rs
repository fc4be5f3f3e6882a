use std::path::PathBuf;

pub const HELP: &str = "Commands:
  list              reload the video list
  select <path>     choose a file to upload
  upload [path]     upload the chosen file (or <path>)
  view <n>          open video number <n>
  delete <n>        delete video number <n>
  status            show storage usage and the current message
  help              show this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(PathBuf),
    Upload(Option<PathBuf>),
    View(usize),
    Delete(usize),
    Status,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        match (name, arg) {
            ("", _) => Ok(Command::Empty),
            ("list" | "ls", None) => Ok(Command::List),
            ("select", Some(path)) => Ok(Command::Select(PathBuf::from(path))),
            ("select", None) => Err("usage: select <path>".to_string()),
            ("upload", path) => Ok(Command::Upload(path.map(PathBuf::from))),
            ("view", Some(n)) => parse_row(n).map(Command::View),
            ("delete" | "rm", Some(n)) => parse_row(n).map(Command::Delete),
            ("view" | "delete" | "rm", None) => Err(format!("usage: {} <n>", name)),
            ("status", None) => Ok(Command::Status),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "exit", None) => Ok(Command::Quit),
            _ => Err(format!("unknown command: {}", line)),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("not a row number: {}", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  delete 2 "), Ok(Command::Delete(2)));
        assert_eq!(Command::parse("view 1"), Ok(Command::View(1)));
        assert_eq!(
            Command::parse("select /videos/my clip.mp4"),
            Ok(Command::Select(PathBuf::from("/videos/my clip.mp4")))
        );
        assert_eq!(Command::parse("upload"), Ok(Command::Upload(None)));
        assert_eq!(
            Command::parse("upload a.mp4"),
            Ok(Command::Upload(Some(PathBuf::from("a.mp4"))))
        );
        assert_eq!(Command::parse(""), Ok(Command::Empty));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("delete").is_err());
        assert!(Command::parse("delete zero").is_err());
        assert!(Command::parse("view 0").is_err());
        assert!(Command::parse("select").is_err());
        assert!(Command::parse("list everything").is_err());
        assert!(Command::parse("format c:").is_err());
    }
}
