//! Bookmark commands
use serde::Serialize;
use std::fmt;

use snowy_core::Bookmark;

use super::tabs::{active_tab_info, TabInfo};
use super::CommandResult;
use crate::state::{AppState, ShellBrowser};

#[derive(Debug, Serialize)]
pub struct BookmarkInfo {
    pub index: usize,
    pub label: String,
    pub title: String,
    pub url: String,
}

impl BookmarkInfo {
    fn new(index: usize, bookmark: &Bookmark) -> Self {
        Self {
            index,
            label: bookmark.label(),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
        }
    }
}

impl fmt::Display for BookmarkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<15}  {}", self.index, self.label, self.url)
    }
}

fn bookmark_list(browser: &ShellBrowser) -> Vec<BookmarkInfo> {
    browser
        .bookmarks()
        .iter()
        .enumerate()
        .map(|(index, bookmark)| BookmarkInfo::new(index, bookmark))
        .collect()
}

pub fn get_bookmarks(state: &AppState) -> CommandResult<Vec<BookmarkInfo>> {
    state.with_browser(|browser| Ok(bookmark_list(browser))).into()
}

pub fn bookmark_active_tab(state: &AppState) -> CommandResult<Vec<BookmarkInfo>> {
    state
        .with_browser_mut(|browser| {
            browser.bookmark_active_tab()?;
            Ok(bookmark_list(browser))
        })
        .into()
}

/// Open the bookmark at `index` in a new tab
pub fn open_bookmark(state: &AppState, index: usize) -> CommandResult<TabInfo> {
    state
        .with_browser_mut(|browser| {
            browser.open_bookmark(index)?;
            active_tab_info(browser).ok_or_else(|| snowy_core::TabError::NoActiveTab.into())
        })
        .into()
}
