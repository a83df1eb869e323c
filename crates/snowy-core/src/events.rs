//! Notifications for the chrome
//!
//! The browser queues these as state changes; the UI drains them and
//! redraws whatever they name.

use snowy_engine::TabId;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Tabs were opened or closed
    TabsChanged,
    /// Title, icon, URL or loading state of a tab changed
    TabUpdated(TabId),
    /// A different tab is on screen; `url` goes in the address bar
    ActiveTabChanged { id: TabId, url: String },
    BookmarksChanged,
    ExtensionsReloaded(Vec<String>),
    DevToolsToggled { id: TabId, visible: bool },
    DataCleared,
}
