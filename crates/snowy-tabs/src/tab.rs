//! Tab data structure
//!
//! A tab pairs one page with what the tab strip shows for it:
//! - Favicon
//! - Title (truncated)
//! - Active highlight

use chrono::{DateTime, Utc};

use snowy_engine::{Icon, PageContext, TabId};

use crate::error::TabError;
use crate::state::TabState;
use crate::Result;

/// Title shown until the page reports its own
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Characters of the page title that fit on a tab button
pub const DISPLAY_TITLE_MAX: usize = 20;

pub struct Tab<P> {
    /// Unique identifier
    pub id: TabId,
    /// Last URL reported by the page
    pub url: String,
    /// Full page title
    pub title: String,
    /// Title as drawn on the tab button
    pub display_title: String,
    /// Favicon if the page reported one
    pub icon: Option<Icon>,
    /// Current state in the state machine
    pub state: TabState,
    /// Between load started and load finished
    pub loading: bool,
    pub created_at: DateTime<Utc>,
    page: P,
}

impl<P: PageContext> Tab<P> {
    pub fn new(id: TabId, page: P, url: String) -> Self {
        Self {
            id,
            url,
            title: NEW_TAB_TITLE.to_string(),
            display_title: NEW_TAB_TITLE.to_string(),
            icon: None,
            state: TabState::Created,
            loading: true,
            created_at: Utc::now(),
            page,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: TabState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
        Ok(())
    }

    pub fn activate(&mut self) -> Result<()> {
        self.transition_to(TabState::Active)
    }

    /// Clear the active highlight
    pub fn deactivate(&mut self) -> Result<()> {
        match self.state {
            TabState::Active | TabState::Created => self.transition_to(TabState::Inactive),
            _ => Ok(()),
        }
    }

    /// Detach the page from the engine. Terminal.
    pub fn close(&mut self) -> Result<()> {
        self.transition_to(TabState::Closed)?;
        self.page.close();
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.state == TabState::Active
    }

    /// Store the full title and refresh the truncated one
    pub fn set_title(&mut self, title: String) {
        self.display_title = title.chars().take(DISPLAY_TITLE_MAX).collect();
        self.title = title;
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    /// URL the page is showing, falling back to the last one reported
    pub fn current_url(&self) -> String {
        let url = self.page.url();
        if url.is_empty() {
            self.url.clone()
        } else {
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_engine::headless::{HeadlessPage, HeadlessProfile};
    use snowy_engine::{page_event_channel, PageEventSink, RenderingProfile};

    fn new_tab(url: &str) -> Tab<HeadlessPage> {
        let (tx, _rx) = page_event_channel();
        let id = TabId::new();
        let page = HeadlessProfile::new().create_page(PageEventSink::new(id, tx));
        Tab::new(id, page, url.to_string())
    }

    #[test]
    fn test_new_tab() {
        let tab = new_tab("https://example.com");
        assert_eq!(tab.state, TabState::Created);
        assert_eq!(tab.title, NEW_TAB_TITLE);
        assert_eq!(tab.display_title, NEW_TAB_TITLE);
        assert_eq!(tab.current_url(), "https://example.com");
    }

    #[test]
    fn test_state_transitions() {
        let mut tab = new_tab("https://example.com");

        tab.activate().unwrap();
        assert!(tab.is_active());

        tab.deactivate().unwrap();
        assert_eq!(tab.state, TabState::Inactive);

        tab.close().unwrap();
        assert_eq!(tab.state, TabState::Closed);
        assert!(tab.page().is_closed());

        assert!(tab.activate().is_err());
    }

    #[test]
    fn test_title_truncation() {
        let mut tab = new_tab("https://example.com");

        tab.set_title("An exceptionally long page title".to_string());
        assert_eq!(tab.display_title, "An exceptionally lon");
        assert_eq!(tab.title, "An exceptionally long page title");

        tab.set_title("Short".to_string());
        assert_eq!(tab.display_title, "Short");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut tab = new_tab("https://example.com");
        tab.set_title("ééééééééééééééééééééééé".to_string());
        assert_eq!(tab.display_title.chars().count(), DISPLAY_TITLE_MAX);
    }
}
