//! Shell commands
//!
//! Each line read at the prompt parses into a [`ShellCommand`] and runs
//! through [`dispatch`]. Commands that act on one tab carry its index in the
//! tab strip rather than capturing the tab itself.

pub mod bookmarks;
pub mod devtools;
pub mod extensions;
pub mod navigation;
pub mod privacy;
pub mod tabs;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use snowy_core::ConfirmPrompt;

use crate::state::AppState;
use bookmarks::BookmarkInfo;
use tabs::TabInfo;

pub const HELP: &str = "\
open [url]          open a tab (home page by default)
close <index>       close a tab
switch <index>      show a tab
go <text>           load a URL or search in the current tab
back | forward | reload
tabs                list tabs
bookmark            bookmark the current tab
bookmarks           list bookmarks
open-bookmark <i>   open a bookmark in a new tab
extensions          list installed extensions
reload-extensions   reinstall scripts from the extensions directory
devtools            toggle developer tools for the current tab
kill-data           delete all browsing data
quit                save the session and exit";

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandResult<U> {
        CommandResult {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
        }
    }
}

impl<T> From<snowy_core::Result<T>> for CommandResult<T> {
    fn from(result: snowy_core::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open(Option<String>),
    Close(usize),
    Switch(usize),
    Go(String),
    Back,
    Forward,
    Reload,
    Tabs,
    Bookmark,
    Bookmarks,
    OpenBookmark(usize),
    Extensions,
    ReloadExtensions,
    DevTools,
    KillData,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a valid index")]
    InvalidIndex(String),
}

fn parse_index(command: &'static str, arg: &str) -> Result<usize, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| ParseError::InvalidIndex(arg.to_string()))
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "open" | "new" => Self::Open((!arg.is_empty()).then(|| arg.to_string())),
            "close" => Self::Close(parse_index("close", arg)?),
            "switch" => Self::Switch(parse_index("switch", arg)?),
            "go" => {
                if arg.is_empty() {
                    return Err(ParseError::MissingArgument("go"));
                }
                Self::Go(arg.to_string())
            }
            "back" => Self::Back,
            "forward" => Self::Forward,
            "reload" => Self::Reload,
            "tabs" => Self::Tabs,
            "bookmark" => Self::Bookmark,
            "bookmarks" => Self::Bookmarks,
            "open-bookmark" => Self::OpenBookmark(parse_index("open-bookmark", arg)?),
            "extensions" => Self::Extensions,
            "reload-extensions" => Self::ReloadExtensions,
            "devtools" => Self::DevTools,
            "kill-data" => Self::KillData,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// What a command produced, for printing
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Reply {
    Tabs(Vec<TabInfo>),
    Tab(TabInfo),
    Navigated { url: String, search: bool },
    Bookmarks(Vec<BookmarkInfo>),
    Extensions(Vec<String>),
    DevTools { visible: bool },
    DataCleared { cleared: bool },
    Help,
    Done,
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabs(tabs) => {
                let lines: Vec<String> = tabs.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::Tab(tab) => write!(f, "{tab}"),
            Self::Navigated { url, search: true } => write!(f, "searching {url}"),
            Self::Navigated { url, search: false } => write!(f, "loading {url}"),
            Self::Bookmarks(bookmarks) if bookmarks.is_empty() => write!(f, "no bookmarks"),
            Self::Bookmarks(bookmarks) => {
                let lines: Vec<String> = bookmarks.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::Extensions(names) if names.is_empty() => write!(f, "no extensions installed"),
            Self::Extensions(names) => write!(f, "{}", names.join("\n")),
            Self::DevTools { visible: true } => write!(f, "devtools shown"),
            Self::DevTools { visible: false } => write!(f, "devtools hidden"),
            Self::DataCleared { cleared: true } => write!(f, "all browsing data deleted"),
            Self::DataCleared { cleared: false } => write!(f, "cancelled"),
            Self::Help => write!(f, "{HELP}"),
            Self::Done => Ok(()),
            Self::Quit => write!(f, "session saved"),
        }
    }
}

/// Run one command against the browser
pub fn dispatch(
    state: &AppState,
    command: ShellCommand,
    prompt: &dyn ConfirmPrompt,
) -> CommandResult<Reply> {
    tracing::debug!(?command, "Dispatching");

    match command {
        ShellCommand::Open(url) => tabs::create_tab(state, url.as_deref()).map(Reply::Tab),
        ShellCommand::Close(index) => tabs::close_tab(state, index).map(Reply::Tabs),
        ShellCommand::Switch(index) => tabs::switch_tab(state, index).map(Reply::Tab),
        ShellCommand::Tabs => tabs::get_tabs(state).map(Reply::Tabs),
        ShellCommand::Go(text) => navigation::navigate(state, &text)
            .map(|(url, search)| Reply::Navigated { url, search }),
        ShellCommand::Back => navigation::back(state).map(|_| Reply::Done),
        ShellCommand::Forward => navigation::forward(state).map(|_| Reply::Done),
        ShellCommand::Reload => navigation::reload(state).map(|_| Reply::Done),
        ShellCommand::Bookmark => bookmarks::bookmark_active_tab(state).map(Reply::Bookmarks),
        ShellCommand::Bookmarks => bookmarks::get_bookmarks(state).map(Reply::Bookmarks),
        ShellCommand::OpenBookmark(index) => {
            bookmarks::open_bookmark(state, index).map(Reply::Tab)
        }
        ShellCommand::Extensions => extensions::get_extensions(state).map(Reply::Extensions),
        ShellCommand::ReloadExtensions => {
            extensions::reload_extensions(state).map(Reply::Extensions)
        }
        ShellCommand::DevTools => {
            devtools::toggle_devtools(state).map(|visible| Reply::DevTools { visible })
        }
        ShellCommand::KillData => {
            privacy::kill_data(state, prompt).map(|cleared| Reply::DataCleared { cleared })
        }
        ShellCommand::Help => CommandResult::ok(Reply::Help),
        ShellCommand::Quit => privacy::save_session(state).map(|_| Reply::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_core::{Config, Confirmation, ShellEvent};

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();
        (dir, state)
    }

    fn never(_: &str, _: &str) -> Confirmation {
        panic!("no confirmation expected")
    }

    fn run(state: &AppState, line: &str) -> CommandResult<Reply> {
        dispatch(state, line.parse().unwrap(), &never)
    }

    #[test]
    fn test_parse() {
        assert_eq!("open".parse(), Ok(ShellCommand::Open(None)));
        assert_eq!(
            "open example.com".parse(),
            Ok(ShellCommand::Open(Some("example.com".to_string())))
        );
        assert_eq!("  close 2 ".parse(), Ok(ShellCommand::Close(2)));
        assert_eq!(
            "go rust borrow checker".parse(),
            Ok(ShellCommand::Go("rust borrow checker".to_string()))
        );
        assert_eq!("open-bookmark 0".parse(), Ok(ShellCommand::OpenBookmark(0)));
        assert_eq!("KILL-DATA".parse(), Ok(ShellCommand::KillData));
        assert_eq!("exit".parse(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<ShellCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "switch".parse::<ShellCommand>(),
            Err(ParseError::MissingArgument("switch"))
        );
        assert_eq!(
            "close one".parse::<ShellCommand>(),
            Err(ParseError::InvalidIndex("one".to_string()))
        );
        assert_eq!(
            "go".parse::<ShellCommand>(),
            Err(ParseError::MissingArgument("go"))
        );
        assert_eq!(
            "teleport".parse::<ShellCommand>(),
            Err(ParseError::Unknown("teleport".to_string()))
        );
    }

    #[test]
    fn test_tab_commands_by_index() {
        let (_dir, state) = state();

        let opened = run(&state, "open https://a.test");
        assert!(opened.success);
        match opened.data {
            Some(Reply::Tab(tab)) => {
                assert_eq!(tab.index, 1);
                assert!(tab.is_active);
            }
            other => panic!("unexpected reply {other:?}"),
        }

        let switched = run(&state, "switch 0");
        assert!(matches!(switched.data, Some(Reply::Tab(ref tab)) if tab.index == 0));

        let closed = run(&state, "close 0");
        match closed.data {
            Some(Reply::Tabs(tabs)) => {
                assert_eq!(tabs.len(), 1);
                assert_eq!(tabs[0].url, "https://a.test");
                assert!(tabs[0].is_active);
            }
            other => panic!("unexpected reply {other:?}"),
        }

        let missing = run(&state, "close 7");
        assert!(!missing.success);
        assert_eq!(missing.error.as_deref(), Some("No tab at index 7"));
    }

    #[test]
    fn test_go_resolves_input() {
        let (_dir, state) = state();

        let result = run(&state, "go openai");
        assert!(matches!(
            result.data,
            Some(Reply::Navigated { ref url, search: true })
                if url == "https://www.google.com/search?q=openai"
        ));

        let events = state.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            ShellEvent::TabUpdated(_)
        )));
    }

    #[test]
    fn test_bookmark_flow() {
        let (_dir, state) = state();
        run(&state, "go example.com");

        let result = run(&state, "bookmark");
        match result.data {
            Some(Reply::Bookmarks(list)) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].url, "https://example.com");
            }
            other => panic!("unexpected reply {other:?}"),
        }

        assert!(run(&state, "open-bookmark 0").success);
        assert!(!run(&state, "open-bookmark 4").success);
    }

    #[test]
    fn test_kill_data_uses_prompt() {
        let (_dir, state) = state();
        run(&state, "open https://a.test");

        let cancel = |_: &str, _: &str| Confirmation::Cancelled;
        let result = dispatch(&state, ShellCommand::KillData, &cancel);
        assert!(matches!(result.data, Some(Reply::DataCleared { cleared: false })));
        assert_eq!(state.with_browser(|b| Ok(b.tabs().len())).unwrap(), 2);

        let confirm = |_: &str, _: &str| Confirmation::Confirmed;
        let result = dispatch(&state, ShellCommand::KillData, &confirm);
        assert!(matches!(result.data, Some(Reply::DataCleared { cleared: true })));
        assert_eq!(
            state.with_browser(|b| Ok(b.tabs().urls())).unwrap(),
            vec!["about:blank"]
        );
    }

    #[test]
    fn test_quit_saves_session() {
        let (dir, state) = state();
        run(&state, "open https://a.test");

        let result = run(&state, "quit");
        assert!(matches!(result.data, Some(Reply::Quit)));

        let saved = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
        let urls: Vec<String> = serde_json::from_str(&saved).unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls.contains(&"https://a.test".to_string()));
    }

    #[test]
    fn test_result_serializes() {
        let result = CommandResult::ok(Reply::DevTools { visible: true });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["kind"], "dev_tools");
        assert_eq!(json["data"]["data"]["visible"], true);
    }
}
