//! Tab Manager
//!
//! Owns every open tab and decides which one is active.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use snowy_engine::{
    page_event_channel, PageContext, PageEvent, PageEventKind, PageEventReceiver, PageEventSink,
    RenderingProfile, TabId,
};
use snowy_navigation::{InputResolution, InputResolver};

use crate::devtools::{DevToolsController, DevToolsVisibility};
use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

type PageOf<P> = <P as RenderingProfile>::Page;
type InspectorOf<P> = <PageOf<P> as PageContext>::Inspector;

pub struct TabManager<P: RenderingProfile> {
    /// Shared rendering profile every page is created from
    profile: Arc<P>,
    /// Open tabs
    tabs: HashMap<TabId, Tab<PageOf<P>>>,
    /// Tab strip order (creation order)
    tab_order: Vec<TabId>,
    /// Current active tab ID
    active_tab_id: Option<TabId>,
    /// Text shown in the address bar
    address_bar: String,
    /// URL for tabs opened without one
    home_url: String,
    zoom_factor: f64,
    resolver: InputResolver,
    devtools: DevToolsController<InspectorOf<P>>,
    events_tx: UnboundedSender<PageEvent>,
    events_rx: PageEventReceiver,
}

impl<P: RenderingProfile> TabManager<P> {
    pub fn new(profile: Arc<P>, home_url: String, resolver: InputResolver) -> Self {
        let (events_tx, events_rx) = page_event_channel();

        Self {
            profile,
            tabs: HashMap::new(),
            tab_order: Vec::new(),
            active_tab_id: None,
            address_bar: String::new(),
            home_url,
            zoom_factor: 1.0,
            resolver,
            devtools: DevToolsController::new(),
            events_tx,
            events_rx,
        }
    }

    pub fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom_factor = factor;
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn resolver(&self) -> &InputResolver {
        &self.resolver
    }

    // === Lifecycle ===

    /// Open a tab on `url` and make it active
    pub fn create_tab(&mut self, url: &str) -> TabId {
        let id = TabId::new();
        let sink = PageEventSink::new(id, self.events_tx.clone());

        let mut page = self.profile.create_page(sink);
        page.set_zoom_factor(self.zoom_factor);
        page.load(url);

        self.tabs.insert(id, Tab::new(id, page, url.to_string()));
        self.tab_order.push(id);

        tracing::info!(tab_id = %id, url = %url, "Created new tab");

        self.activate(id);
        id
    }

    /// Open a tab on the home page and make it active
    pub fn create_default_tab(&mut self) -> TabId {
        let home = self.home_url.clone();
        self.create_tab(&home)
    }

    /// Make `tab_id` the active tab
    pub fn switch_tab(&mut self, tab_id: TabId) -> Result<()> {
        if !self.tabs.contains_key(&tab_id) {
            return Err(TabError::NotFound(tab_id));
        }

        if self.active_tab_id != Some(tab_id) {
            self.activate(tab_id);
        }

        Ok(())
    }

    /// Close a tab, tearing down its inspector first.
    ///
    /// Closing the last tab opens a fresh one on the home page.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<()> {
        let Some(index) = self.tab_order.iter().position(|id| *id == tab_id) else {
            return Err(TabError::NotFound(tab_id));
        };

        self.devtools.teardown(tab_id);

        self.tab_order.remove(index);
        if let Some(mut tab) = self.tabs.remove(&tab_id) {
            if let Err(e) = tab.close() {
                tracing::warn!(tab_id = %tab_id, error = %e, "Tab did not close cleanly");
            }
        }

        tracing::info!(tab_id = %tab_id, "Closed tab");

        if self.tab_order.is_empty() {
            self.active_tab_id = None;
            self.create_default_tab();
        } else if self.active_tab_id == Some(tab_id) {
            let next = self.tab_order[index.min(self.tab_order.len() - 1)];
            self.activate(next);
        }

        Ok(())
    }

    /// Close every tab and open exactly one on `url`
    pub fn replace_all(&mut self, url: &str) -> TabId {
        self.devtools.teardown_all();

        for id in std::mem::take(&mut self.tab_order) {
            if let Some(mut tab) = self.tabs.remove(&id) {
                if let Err(e) = tab.close() {
                    tracing::warn!(tab_id = %id, error = %e, "Tab did not close cleanly");
                }
            }
        }
        self.active_tab_id = None;

        tracing::info!("Closed all tabs");
        self.create_tab(url)
    }

    // === Navigation ===

    /// Resolve address bar text and load it in the active tab
    pub fn navigate(&mut self, text: &str) -> Result<InputResolution> {
        let active = self.active_tab_id.ok_or(TabError::NoActiveTab)?;
        let tab = self.tabs.get_mut(&active).ok_or(TabError::NotFound(active))?;

        let resolution = self.resolver.resolve(text);
        tab.page_mut().load(resolution.target());
        self.address_bar = resolution.target().to_string();

        tracing::info!(
            tab_id = %active,
            url = %resolution.target(),
            search = resolution.is_search(),
            "Navigating"
        );

        Ok(resolution)
    }

    pub fn back(&mut self) {
        if let Some(page) = self.active_page_mut() {
            page.back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(page) = self.active_page_mut() {
            page.forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(page) = self.active_page_mut() {
            page.reload();
        }
    }

    // === Developer tools ===

    pub fn toggle_devtools(&mut self, tab_id: TabId) -> Result<DevToolsVisibility> {
        let tab = self
            .tabs
            .get_mut(&tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        self.devtools.toggle(tab_id, tab.page_mut())
    }

    pub fn devtools(&self) -> &DevToolsController<InspectorOf<P>> {
        &self.devtools
    }

    // === Page events ===

    /// Sender pages report through. Handed to engines that create pages
    /// outside [`TabManager::create_tab`].
    pub fn event_sender(&self) -> UnboundedSender<PageEvent> {
        self.events_tx.clone()
    }

    /// Apply every queued page event. Returns the tabs whose display
    /// metadata changed, in first-seen order.
    pub fn pump_events(&mut self) -> Vec<TabId> {
        let mut updated = Vec::new();

        while let Ok(event) = self.events_rx.try_recv() {
            let tab = event.tab;
            if self.apply_event(event) && !updated.contains(&tab) {
                updated.push(tab);
            }
        }

        updated
    }

    /// Apply one event if its tab is still open.
    fn apply_event(&mut self, event: PageEvent) -> bool {
        let Some(tab) = self.tabs.get_mut(&event.tab) else {
            tracing::trace!(tab_id = %event.tab, "Dropping event for closed tab");
            return false;
        };

        match event.kind {
            PageEventKind::LoadStarted => tab.loading = true,
            PageEventKind::LoadFinished { ok } => {
                tab.loading = false;
                if !ok {
                    tracing::debug!(tab_id = %tab.id, url = %tab.url, "Load failed");
                }
            }
            PageEventKind::TitleChanged(title) => tab.set_title(title),
            PageEventKind::IconChanged(icon) => tab.set_icon(icon),
            PageEventKind::UrlChanged(url) => {
                if self.active_tab_id == Some(tab.id) {
                    self.address_bar = url.clone();
                }
                tab.set_url(url);
            }
        }

        true
    }

    // === Queries ===

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn active_tab(&self) -> Option<&Tab<PageOf<P>>> {
        self.active_tab_id.and_then(|id| self.tabs.get(&id))
    }

    pub fn tab(&self, tab_id: TabId) -> Option<&Tab<PageOf<P>>> {
        self.tabs.get(&tab_id)
    }

    pub fn page(&self, tab_id: TabId) -> Option<&PageOf<P>> {
        self.tabs.get(&tab_id).map(|tab| tab.page())
    }

    /// Tabs in strip order
    pub fn tabs(&self) -> impl Iterator<Item = &Tab<PageOf<P>>> + '_ {
        self.tab_order.iter().filter_map(|id| self.tabs.get(id))
    }

    pub fn tab_ids(&self) -> &[TabId] {
        &self.tab_order
    }

    /// Tab at strip position `index`
    pub fn tab_at(&self, index: usize) -> Option<TabId> {
        self.tab_order.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tab_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab_order.is_empty()
    }

    /// Current URL of every tab, in strip order
    pub fn urls(&self) -> Vec<String> {
        self.tabs().map(|tab| tab.current_url()).collect()
    }

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn profile(&self) -> &Arc<P> {
        &self.profile
    }

    fn active_page_mut(&mut self) -> Option<&mut PageOf<P>> {
        let id = self.active_tab_id?;
        self.tabs.get_mut(&id).map(|tab| tab.page_mut())
    }

    /// Clear the highlight on every other tab, then activate `tab_id`.
    fn activate(&mut self, tab_id: TabId) {
        for (id, tab) in self.tabs.iter_mut() {
            if *id != tab_id {
                if let Err(e) = tab.deactivate() {
                    tracing::warn!(tab_id = %id, error = %e, "Failed to deactivate tab");
                }
            }
        }

        let Some(tab) = self.tabs.get_mut(&tab_id) else {
            return;
        };
        if let Err(e) = tab.activate() {
            tracing::warn!(tab_id = %tab_id, error = %e, "Failed to activate tab");
            return;
        }

        self.address_bar = tab.current_url();
        self.active_tab_id = Some(tab_id);

        tracing::debug!(tab_id = %tab_id, "Activated tab");
    }
}
