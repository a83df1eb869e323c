//! Main browser state container
//!
//! The shell's hub. UI commands come in here, page notifications are pumped
//! through here, and the chrome learns what to redraw from the
//! [`ShellEvent`] queue.

use std::sync::Arc;

use snowy_engine::{PageContext, RenderingProfile, TabId};
use snowy_extensions::ExtensionRegistry;
use snowy_navigation::{InputResolution, InputResolver};
use snowy_session::SessionStore;
use snowy_tabs::{DevToolsVisibility, TabError, TabManager};

use crate::bookmarks::{Bookmark, BookmarkStore};
use crate::clearing::{self, ConfirmPrompt, Confirmation, CLEAR_DATA_MESSAGE, CLEAR_DATA_TITLE};
use crate::config::Config;
use crate::error::CoreError;
use crate::events::ShellEvent;
use crate::Result;

/// URL of the single tab left after clearing browsing data
const BLANK_URL: &str = "about:blank";

pub struct Browser<P: RenderingProfile> {
    /// Configuration
    config: Config,
    /// Rendering profile shared by every page
    profile: Arc<P>,
    /// Open tabs
    tabs: TabManager<P>,
    bookmarks: BookmarkStore,
    session: SessionStore,
    extensions: ExtensionRegistry,
    /// Pending notifications for the chrome
    events: Vec<ShellEvent>,
}

impl<P: RenderingProfile> Browser<P> {
    /// Build a browser around `profile`. No tabs are open until
    /// [`Browser::initialize`] runs.
    pub fn new(config: Config, profile: Arc<P>) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        profile.set_user_agent(&config.user_agent);

        let resolver = InputResolver::with_search_engine(config.search_engine.clone())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to the default search engine");
                InputResolver::new()
            });

        let mut tabs = TabManager::new(Arc::clone(&profile), config.homepage.clone(), resolver);
        tabs.set_zoom_factor(config.default_zoom);

        Ok(Self {
            bookmarks: BookmarkStore::new(&config.bookmarks_file),
            session: SessionStore::new(&config.session_file),
            extensions: ExtensionRegistry::new(&config.extensions_dir),
            config,
            profile,
            tabs,
            events: Vec::new(),
        })
    }

    /// Load bookmarks, install extensions and restore the last session.
    ///
    /// Extensions go in before any tab opens so restored pages get them.
    pub fn initialize(&mut self) -> Result<()> {
        self.bookmarks.load();
        self.events.push(ShellEvent::BookmarksChanged);

        if let Err(e) = self.reload_extensions() {
            tracing::warn!(error = %e, "Extensions unavailable");
        }

        self.restore_session();

        tracing::info!(tab_count = self.tabs.len(), "Browser initialized");
        Ok(())
    }

    /// Save the open tab URLs for the next start
    pub fn shutdown(&self) -> Result<()> {
        self.session.save(&self.tabs.urls())?;
        tracing::info!("Browser shut down");
        Ok(())
    }

    fn restore_session(&mut self) {
        let urls = self.session.restore();

        if urls.is_empty() {
            self.tabs.create_default_tab();
        } else {
            for url in &urls {
                self.tabs.create_tab(url);
            }
        }

        self.events.push(ShellEvent::TabsChanged);
        self.push_active_changed();
    }

    // === Tab operations ===

    /// Open a tab (on the home page when `url` is `None`) and make it active
    pub fn create_tab(&mut self, url: Option<&str>) -> TabId {
        let id = match url {
            Some(url) => self.tabs.create_tab(url),
            None => self.tabs.create_default_tab(),
        };

        self.events.push(ShellEvent::TabsChanged);
        self.push_active_changed();
        id
    }

    pub fn switch_tab(&mut self, tab_id: TabId) -> Result<()> {
        let previous = self.tabs.active_tab_id();
        self.tabs.switch_tab(tab_id)?;

        if previous != Some(tab_id) {
            self.push_active_changed();
        }
        Ok(())
    }

    pub fn close_tab(&mut self, tab_id: TabId) -> Result<()> {
        let previous = self.tabs.active_tab_id();
        self.tabs.close_tab(tab_id)?;

        self.events.push(ShellEvent::TabsChanged);
        if self.tabs.active_tab_id() != previous {
            self.push_active_changed();
        }
        Ok(())
    }

    /// Resolve address bar text and load it in the active tab
    pub fn navigate(&mut self, text: &str) -> Result<InputResolution> {
        Ok(self.tabs.navigate(text)?)
    }

    pub fn back(&mut self) {
        self.tabs.back();
    }

    pub fn forward(&mut self) {
        self.tabs.forward();
    }

    pub fn reload(&mut self) {
        self.tabs.reload();
    }

    pub fn tabs(&self) -> &TabManager<P> {
        &self.tabs
    }

    /// ID of the tab at `index` in the tab strip
    pub fn tab_id_at(&self, index: usize) -> Result<TabId> {
        self.tabs.tab_at(index).ok_or(CoreError::TabIndex(index))
    }

    /// Apply queued page notifications to tab metadata
    pub fn pump_page_events(&mut self) -> usize {
        let updated = self.tabs.pump_events();
        let count = updated.len();
        self.events
            .extend(updated.into_iter().map(ShellEvent::TabUpdated));
        count
    }

    // === Developer tools ===

    /// Toggle the inspector of the active tab
    pub fn toggle_devtools(&mut self) -> Result<DevToolsVisibility> {
        let active = self.tabs.active_tab_id().ok_or(TabError::NoActiveTab)?;
        self.toggle_devtools_for(active)
    }

    pub fn toggle_devtools_for(&mut self, tab_id: TabId) -> Result<DevToolsVisibility> {
        let visibility = self.tabs.toggle_devtools(tab_id)?;
        self.events.push(ShellEvent::DevToolsToggled {
            id: tab_id,
            visible: visibility == DevToolsVisibility::Shown,
        });
        Ok(visibility)
    }

    // === Bookmarks ===

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.all()
    }

    pub fn add_bookmark(&mut self, title: String, url: String) -> Result<()> {
        self.bookmarks.add(title, url)?;
        self.events.push(ShellEvent::BookmarksChanged);
        Ok(())
    }

    /// Bookmark the active tab under its full title
    pub fn bookmark_active_tab(&mut self) -> Result<()> {
        let tab = self.tabs.active_tab().ok_or(TabError::NoActiveTab)?;
        let title = tab.page().title();
        let url = tab.current_url();
        self.add_bookmark(title, url)
    }

    pub fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark> {
        let removed = self
            .bookmarks
            .remove(index)?
            .ok_or(CoreError::BookmarkNotFound(index))?;
        self.events.push(ShellEvent::BookmarksChanged);
        Ok(removed)
    }

    /// Open the bookmark at `index` in a new tab
    pub fn open_bookmark(&mut self, index: usize) -> Result<TabId> {
        let url = self
            .bookmarks
            .get(index)
            .map(|b| b.url.clone())
            .ok_or(CoreError::BookmarkNotFound(index))?;
        Ok(self.create_tab(Some(&url)))
    }

    // === Extensions ===

    /// Reinstall every script from the extensions directory.
    ///
    /// Open pages pick up the new set on their next load.
    pub fn reload_extensions(&mut self) -> Result<usize> {
        let count = self.extensions.reload(self.profile.as_ref())?;
        self.events
            .push(ShellEvent::ExtensionsReloaded(self.extensions.names()));
        Ok(count)
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn extension_names(&self) -> Vec<String> {
        self.extensions.names()
    }

    // === Privacy ===

    /// After confirmation, wipe the profile's browsing data and replace all
    /// tabs with one blank tab. Returns whether anything was cleared.
    pub fn clear_browsing_data(&mut self, prompt: &dyn ConfirmPrompt) -> bool {
        if prompt.confirm(CLEAR_DATA_TITLE, CLEAR_DATA_MESSAGE) != Confirmation::Confirmed {
            tracing::info!("Clearing browsing data cancelled");
            return false;
        }

        clearing::clear_profile_data(self.profile.as_ref());
        self.tabs.replace_all(BLANK_URL);

        self.events.push(ShellEvent::DataCleared);
        self.events.push(ShellEvent::TabsChanged);
        self.push_active_changed();

        tracing::info!("Browsing data cleared");
        true
    }

    // === UI events ===

    /// Take every notification queued since the last call
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &Arc<P> {
        &self.profile
    }

    fn push_active_changed(&mut self) {
        if let Some(id) = self.tabs.active_tab_id() {
            self.events.push(ShellEvent::ActiveTabChanged {
                id,
                url: self.tabs.address_bar().to_string(),
            });
        }
    }
}
