//! Shared rendering profile

use std::path::PathBuf;

use crate::event::PageEventSink;
use crate::page::PageContext;
use crate::script::UserScript;

/// Script collection applied to every page of a profile.
///
/// Scripts inserted here reach pages created afterwards, and already-open
/// pages on their next load.
pub trait ScriptStore {
    fn clear_scripts(&self);

    fn insert_script(&self, script: UserScript);

    fn scripts(&self) -> Vec<UserScript>;
}

/// Process-wide browsing profile, shared by reference among all pages.
pub trait RenderingProfile: ScriptStore {
    type Page: PageContext;

    /// Create a page whose notifications go to `events`.
    fn create_page(&self, events: PageEventSink) -> Self::Page;

    fn user_agent(&self) -> String;

    fn set_user_agent(&self, user_agent: &str);

    fn clear_cookies(&self);

    fn clear_http_cache(&self);

    fn clear_visited_links(&self);

    /// Directory holding persistent page storage, if the profile has one.
    fn persistent_storage_path(&self) -> Option<PathBuf>;
}
