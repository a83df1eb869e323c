//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;

use snowy_core::headless::HeadlessProfile;
use snowy_core::{Browser, Config, Result, ShellEvent};

/// Subdirectory of the data dir holding page storage
pub const STORAGE_DIR: &str = "storage";

pub type ShellBrowser = Browser<HeadlessProfile>;

/// Shared handle on the browser
pub struct AppState {
    browser: Arc<RwLock<ShellBrowser>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let profile = HeadlessProfile::with_storage_path(config.data_dir.join(STORAGE_DIR));
        let browser = Browser::new(config, Arc::new(profile))?;

        Ok(Self {
            browser: Arc::new(RwLock::new(browser)),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        self.browser.write().initialize()
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ShellBrowser) -> Result<T>,
    {
        f(&self.browser.read())
    }

    pub fn with_browser_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ShellBrowser) -> Result<T>,
    {
        f(&mut self.browser.write())
    }

    /// Apply pending page notifications, then hand over everything the
    /// chrome should redraw.
    pub fn take_events(&self) -> Vec<ShellEvent> {
        let mut browser = self.browser.write();
        browser.pump_page_events();
        browser.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_core::RenderingProfile;

    #[test]
    fn test_storage_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();

        let storage = state
            .with_browser(|browser| Ok(browser.profile().persistent_storage_path()))
            .unwrap();
        assert_eq!(storage, Some(dir.path().join(STORAGE_DIR)));
    }

    #[test]
    fn test_take_events_drains() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();

        let events = state.take_events();
        assert!(events.contains(&ShellEvent::TabsChanged));
        assert!(events
            .iter()
            .any(|e| matches!(e, ShellEvent::TabUpdated(_))));
        assert!(state.take_events().is_empty());
    }
}
