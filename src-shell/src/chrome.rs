//! Text chrome
//!
//! Turns drained [`ShellEvent`]s into the lines a windowed chrome would
//! repaint: the tab strip, the address bar and the bookmark bar.

use snowy_core::ShellEvent;

use crate::commands::tabs::tab_list;
use crate::state::ShellBrowser;

/// Lines to print for one batch of events. Each widget is drawn at most once.
pub fn render(browser: &ShellBrowser, events: &[ShellEvent]) -> Vec<String> {
    let mut tab_strip = false;
    let mut bookmark_bar = false;
    let mut address = None;
    let mut lines = Vec::new();

    for event in events {
        match event {
            ShellEvent::TabsChanged | ShellEvent::TabUpdated(_) => tab_strip = true,
            ShellEvent::ActiveTabChanged { url, .. } => address = Some(url.as_str()),
            ShellEvent::BookmarksChanged => bookmark_bar = true,
            ShellEvent::ExtensionsReloaded(names) => {
                lines.push(format!("extensions: {} loaded", names.len()));
            }
            ShellEvent::DataCleared => lines.push("browsing data cleared".to_string()),
            ShellEvent::DevToolsToggled { .. } => {}
        }
    }

    if tab_strip {
        let titles: Vec<String> = tab_list(browser)
            .into_iter()
            .map(|tab| {
                if tab.is_active {
                    format!("[{}]", tab.display_title)
                } else {
                    tab.display_title
                }
            })
            .collect();
        lines.push(format!("tabs: {}", titles.join(" | ")));
    }

    if let Some(url) = address {
        lines.push(format!("address: {url}"));
    }

    if bookmark_bar && !browser.bookmarks().is_empty() {
        let labels: Vec<String> = browser.bookmarks().iter().map(|b| b.label()).collect();
        lines.push(format!("bookmarks: {}", labels.join(" | ")));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use snowy_core::Config;

    #[test]
    fn test_render_after_start() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();

        let events = state.take_events();
        let lines = state
            .with_browser(|browser| Ok(render(browser, &events)))
            .unwrap();

        assert!(lines.contains(&"extensions: 0 loaded".to_string()));
        assert!(lines.contains(&"tabs: [www.google.com]".to_string()));
        assert!(lines.contains(&"address: https://www.google.com".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("tabs:")).count(), 1);
    }

    #[test]
    fn test_render_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();

        let lines = state.with_browser(|browser| Ok(render(browser, &[]))).unwrap();
        assert!(lines.is_empty());
    }
}
