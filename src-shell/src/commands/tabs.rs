//! Tab management commands
use serde::Serialize;
use std::fmt;

use snowy_core::headless::HeadlessPage;
use snowy_core::Tab;

use super::CommandResult;
use crate::state::{AppState, ShellBrowser};

#[derive(Debug, Serialize)]
pub struct TabInfo {
    pub index: usize,
    pub id: String,
    pub url: String,
    pub title: String,
    pub display_title: String,
    pub has_icon: bool,
    pub state: String,
    pub is_loading: bool,
    pub is_active: bool,
}

impl TabInfo {
    fn new(index: usize, tab: &Tab<HeadlessPage>) -> Self {
        Self {
            index,
            id: tab.id.to_string(),
            url: tab.current_url(),
            title: tab.title.clone(),
            display_title: tab.display_title.clone(),
            has_icon: tab.icon.is_some(),
            state: tab.state.as_str().to_string(),
            is_loading: tab.loading,
            is_active: tab.is_active(),
        }
    }
}

impl fmt::Display for TabInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_active { '*' } else { ' ' };
        write!(
            f,
            "[{}]{} {:<20}  {}",
            self.index, marker, self.display_title, self.url
        )
    }
}

/// Every open tab in strip order
pub(crate) fn tab_list(browser: &ShellBrowser) -> Vec<TabInfo> {
    browser
        .tabs()
        .tabs()
        .enumerate()
        .map(|(index, tab)| TabInfo::new(index, tab))
        .collect()
}

/// The active tab, if any
pub(crate) fn active_tab_info(browser: &ShellBrowser) -> Option<TabInfo> {
    tab_list(browser).into_iter().find(|tab| tab.is_active)
}

fn active_or_err(browser: &ShellBrowser) -> snowy_core::Result<TabInfo> {
    active_tab_info(browser).ok_or_else(|| snowy_core::TabError::NoActiveTab.into())
}

pub fn create_tab(state: &AppState, url: Option<&str>) -> CommandResult<TabInfo> {
    state
        .with_browser_mut(|browser| {
            browser.create_tab(url);
            active_or_err(browser)
        })
        .into()
}

pub fn close_tab(state: &AppState, index: usize) -> CommandResult<Vec<TabInfo>> {
    state
        .with_browser_mut(|browser| {
            let id = browser.tab_id_at(index)?;
            browser.close_tab(id)?;
            Ok(tab_list(browser))
        })
        .into()
}

pub fn switch_tab(state: &AppState, index: usize) -> CommandResult<TabInfo> {
    state
        .with_browser_mut(|browser| {
            let id = browser.tab_id_at(index)?;
            browser.switch_tab(id)?;
            active_or_err(browser)
        })
        .into()
}

pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    state.with_browser(|browser| Ok(tab_list(browser))).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_core::Config;

    #[test]
    fn test_tab_info_line() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();
        state.take_events();

        let tabs = get_tabs(&state).data.unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].state, "active");
        assert_eq!(tabs[0].display_title, "www.google.com");
        assert!(tabs[0].to_string().starts_with("[0]* www.google.com"));
    }

    #[test]
    fn test_switch_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();

        let result = switch_tab(&state, 3);
        assert!(!result.success);
        assert!(result.data.is_none());
    }
}
