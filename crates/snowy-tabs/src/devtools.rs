//! Per-tab developer tools
//!
//! Sessions are created lazily on first toggle and hidden, not destroyed, on
//! the next one. A session lives until its tab closes.

use std::collections::HashMap;

use snowy_engine::{Inspector, PageContext, TabId};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevToolsVisibility {
    Shown,
    Hidden,
}

pub struct DevToolsController<I> {
    sessions: HashMap<TabId, I>,
}

impl<I: Inspector> DevToolsController<I> {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Hide a visible session; otherwise show it, creating it if needed.
    pub fn toggle<P>(&mut self, tab: TabId, page: &mut P) -> Result<DevToolsVisibility>
    where
        P: PageContext<Inspector = I>,
    {
        if let Some(inspector) = self.sessions.get_mut(&tab) {
            if inspector.is_visible() {
                inspector.hide();
                tracing::debug!(tab_id = %tab, "DevTools hidden");
                return Ok(DevToolsVisibility::Hidden);
            }

            inspector.show();
            tracing::debug!(tab_id = %tab, "DevTools shown");
            return Ok(DevToolsVisibility::Shown);
        }

        let title = format!("DevTools - {}", page.title());
        let mut inspector = page.open_inspector(&title)?;
        inspector.show();
        self.sessions.insert(tab, inspector);

        tracing::info!(tab_id = %tab, "DevTools session created");
        Ok(DevToolsVisibility::Shown)
    }

    /// Close and forget the session bound to `tab`. Must run before the page
    /// is destroyed.
    pub fn teardown(&mut self, tab: TabId) -> bool {
        match self.sessions.remove(&tab) {
            Some(mut inspector) => {
                inspector.close();
                tracing::debug!(tab_id = %tab, "DevTools session closed");
                true
            }
            None => false,
        }
    }

    pub fn teardown_all(&mut self) {
        for (_, mut inspector) in self.sessions.drain() {
            inspector.close();
        }
    }

    pub fn session(&self, tab: TabId) -> Option<&I> {
        self.sessions.get(&tab)
    }

    pub fn has_session(&self, tab: TabId) -> bool {
        self.sessions.contains_key(&tab)
    }

    pub fn is_visible(&self, tab: TabId) -> bool {
        self.sessions
            .get(&tab)
            .map(|inspector| inspector.is_visible())
            .unwrap_or(false)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl<I: Inspector> Default for DevToolsController<I> {
    fn default() -> Self {
        Self::new()
    }
}
