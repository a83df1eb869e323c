//! Headless engine
//!
//! An in-memory engine with no rendering. Pages keep a navigation history,
//! derive a title from the host, and report through their event sink the same
//! way a real engine would. The profile records every artifact a load leaves
//! behind so data clearing can be observed.

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

use crate::error::EngineError;
use crate::event::{PageEventKind, PageEventSink};
use crate::page::{Icon, Inspector, PageContext};
use crate::profile::{RenderingProfile, ScriptStore};
use crate::script::UserScript;
use crate::Result;

#[derive(Debug, Default)]
struct ProfileState {
    user_agent: String,
    scripts: Vec<UserScript>,
    cookies: BTreeSet<String>,
    http_cache: Vec<String>,
    visited_links: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessProfile {
    state: Arc<Mutex<ProfileState>>,
    storage_path: Option<PathBuf>,
}

impl HeadlessProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage_path(path: PathBuf) -> Self {
        Self {
            state: Arc::default(),
            storage_path: Some(path),
        }
    }

    pub fn cookie_count(&self) -> usize {
        self.state.lock().cookies.len()
    }

    pub fn cache_len(&self) -> usize {
        self.state.lock().http_cache.len()
    }

    pub fn visited_links(&self) -> Vec<String> {
        self.state.lock().visited_links.iter().cloned().collect()
    }
}

impl ScriptStore for HeadlessProfile {
    fn clear_scripts(&self) {
        self.state.lock().scripts.clear();
    }

    fn insert_script(&self, script: UserScript) {
        self.state.lock().scripts.push(script);
    }

    fn scripts(&self) -> Vec<UserScript> {
        self.state.lock().scripts.clone()
    }
}

impl RenderingProfile for HeadlessProfile {
    type Page = HeadlessPage;

    fn create_page(&self, events: PageEventSink) -> HeadlessPage {
        HeadlessPage {
            profile: Arc::clone(&self.state),
            events,
            history: Vec::new(),
            index: 0,
            title: String::new(),
            icon: None,
            zoom: 1.0,
            injected: Vec::new(),
            inspected: Arc::new(AtomicBool::new(false)),
            closed: false,
        }
    }

    fn user_agent(&self) -> String {
        self.state.lock().user_agent.clone()
    }

    fn set_user_agent(&self, user_agent: &str) {
        self.state.lock().user_agent = user_agent.to_string();
    }

    fn clear_cookies(&self) {
        self.state.lock().cookies.clear();
    }

    fn clear_http_cache(&self) {
        self.state.lock().http_cache.clear();
    }

    fn clear_visited_links(&self) {
        self.state.lock().visited_links.clear();
    }

    fn persistent_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone()
    }
}

pub struct HeadlessPage {
    profile: Arc<Mutex<ProfileState>>,
    events: PageEventSink,
    history: Vec<String>,
    index: usize,
    title: String,
    icon: Option<Icon>,
    zoom: f64,
    injected: Vec<String>,
    inspected: Arc<AtomicBool>,
    closed: bool,
}

impl HeadlessPage {
    /// Names of the scripts injected by the most recent load.
    pub fn injected_scripts(&self) -> &[String] {
        &self.injected
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_inspected(&self) -> bool {
        self.inspected.load(Ordering::SeqCst)
    }

    /// Replay the page's current entry as if the engine had just loaded it.
    fn commit(&mut self) {
        let Some(url) = self.history.get(self.index).cloned() else {
            return;
        };

        self.events.emit(PageEventKind::LoadStarted);
        self.events.emit(PageEventKind::UrlChanged(url.clone()));

        {
            let mut profile = self.profile.lock();
            profile.http_cache.push(url.clone());
            profile.visited_links.insert(url.clone());
            if let Some(host) = host_of(&url) {
                profile.cookies.insert(host);
            }
            self.injected = profile.scripts.iter().map(|s| s.name.clone()).collect();
        }

        self.title = host_of(&url).unwrap_or_else(|| url.clone());
        self.events
            .emit(PageEventKind::TitleChanged(self.title.clone()));
        self.events.emit(PageEventKind::LoadFinished { ok: true });
    }
}

impl PageContext for HeadlessPage {
    type Inspector = HeadlessInspector;

    fn load(&mut self, url: &str) {
        if self.closed {
            return;
        }

        if !self.history.is_empty() {
            self.history.truncate(self.index + 1);
        }
        self.history.push(url.to_string());
        self.index = self.history.len() - 1;
        self.commit();
    }

    fn url(&self) -> String {
        self.history.get(self.index).cloned().unwrap_or_default()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn icon(&self) -> Option<Icon> {
        self.icon.clone()
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    fn back(&mut self) {
        if self.closed || !self.can_go_back() {
            return;
        }
        self.index -= 1;
        self.commit();
    }

    fn forward(&mut self) {
        if self.closed || !self.can_go_forward() {
            return;
        }
        self.index += 1;
        self.commit();
    }

    fn reload(&mut self) {
        if !self.closed {
            self.commit();
        }
    }

    fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom = factor;
    }

    fn open_inspector(&mut self, title: &str) -> Result<HeadlessInspector> {
        if self.closed {
            return Err(EngineError::PageClosed);
        }
        if self.inspected.swap(true, Ordering::SeqCst) {
            return Err(EngineError::AlreadyInspected);
        }

        Ok(HeadlessInspector {
            title: title.to_string(),
            visible: false,
            binding: Some(Arc::clone(&self.inspected)),
        })
    }

    fn close(&mut self) {
        self.closed = true;
        tracing::trace!(tab_id = %self.events.tab(), "Headless page closed");
    }
}

pub struct HeadlessInspector {
    title: String,
    visible: bool,
    binding: Option<Arc<AtomicBool>>,
}

impl HeadlessInspector {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl Inspector for HeadlessInspector {
    fn show(&mut self) {
        if self.binding.is_some() {
            self.visible = true;
        }
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn close(&mut self) {
        self.visible = false;
        if let Some(binding) = self.binding.take() {
            binding.store(false, Ordering::SeqCst);
        }
    }
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::page_event_channel;
    use crate::id::TabId;

    fn page(profile: &HeadlessProfile) -> (HeadlessPage, crate::PageEventReceiver) {
        let (tx, rx) = page_event_channel();
        (profile.create_page(PageEventSink::new(TabId::new(), tx)), rx)
    }

    #[test]
    fn test_load_reports_events() {
        let profile = HeadlessProfile::new();
        let (mut page, mut rx) = page(&profile);

        page.load("https://example.com/path");
        assert_eq!(page.url(), "https://example.com/path");
        assert_eq!(page.title(), "example.com");

        let kinds: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                PageEventKind::LoadStarted,
                PageEventKind::UrlChanged("https://example.com/path".to_string()),
                PageEventKind::TitleChanged("example.com".to_string()),
                PageEventKind::LoadFinished { ok: true },
            ]
        );
    }

    #[test]
    fn test_history_navigation() {
        let profile = HeadlessProfile::new();
        let (mut page, _rx) = page(&profile);

        page.back();
        assert_eq!(page.url(), "");

        page.load("https://a.test");
        page.load("https://b.test");
        page.load("https://c.test");
        page.back();
        page.back();
        assert_eq!(page.url(), "https://a.test");
        assert!(!page.can_go_back());
        page.back();
        assert_eq!(page.url(), "https://a.test");

        page.forward();
        assert_eq!(page.url(), "https://b.test");

        // New load drops the forward entries
        page.load("https://d.test");
        assert!(!page.can_go_forward());
        assert_eq!(page.history_len(), 3);
    }

    #[test]
    fn test_scripts_apply_on_next_load() {
        let profile = HeadlessProfile::new();
        let (mut page, _rx) = page(&profile);
        page.load("https://a.test");
        assert!(page.injected_scripts().is_empty());

        profile.insert_script(UserScript::document_ready("hello.js", "1"));
        assert!(page.injected_scripts().is_empty());

        page.reload();
        assert_eq!(page.injected_scripts(), ["hello.js"]);
    }

    #[test]
    fn test_inspector_binding_is_exclusive() {
        let profile = HeadlessProfile::new();
        let (mut page, _rx) = page(&profile);

        let mut inspector = page.open_inspector("DevTools").unwrap();
        assert!(page.is_inspected());
        assert!(matches!(
            page.open_inspector("again"),
            Err(EngineError::AlreadyInspected)
        ));

        inspector.close();
        assert!(!page.is_inspected());
        assert!(page.open_inspector("again").is_ok());
    }

    #[test]
    fn test_closed_page_ignores_commands() {
        let profile = HeadlessProfile::new();
        let (mut page, mut rx) = page(&profile);
        page.close();

        page.load("https://a.test");
        page.reload();
        assert_eq!(page.url(), "");
        assert!(rx.try_recv().is_err());
        assert!(matches!(
            page.open_inspector("x"),
            Err(EngineError::PageClosed)
        ));
    }

    #[test]
    fn test_profile_records_artifacts() {
        let profile = HeadlessProfile::new();
        let (mut page, _rx) = page(&profile);
        page.load("https://a.test");
        page.load("https://b.test/x");

        assert_eq!(profile.cookie_count(), 2);
        assert_eq!(profile.cache_len(), 2);
        assert_eq!(profile.visited_links().len(), 2);

        profile.clear_cookies();
        profile.clear_http_cache();
        profile.clear_visited_links();
        assert_eq!(profile.cookie_count(), 0);
        assert_eq!(profile.cache_len(), 0);
        assert!(profile.visited_links().is_empty());
    }
}
