//! Clearing browsing data
//!
//! Destructive and irreversible, so nothing runs until a prompt returns
//! [`Confirmation::Confirmed`].

use std::io::ErrorKind;

use snowy_engine::RenderingProfile;

pub const CLEAR_DATA_TITLE: &str = "Kill All Data";
pub const CLEAR_DATA_MESSAGE: &str = "Are you sure you want to delete all browser data?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    Confirmed,
    #[default]
    Cancelled,
}

/// Asks the user to confirm a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, title: &str, message: &str) -> Confirmation;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str, &str) -> Confirmation,
{
    fn confirm(&self, title: &str, message: &str) -> Confirmation {
        self(title, message)
    }
}

/// Drop every durable artifact the profile holds: cookies, HTTP cache,
/// visited links and the persistent storage directory.
pub(crate) fn clear_profile_data<P: RenderingProfile + ?Sized>(profile: &P) {
    profile.clear_cookies();
    profile.clear_http_cache();
    profile.clear_visited_links();

    if let Some(storage) = profile.persistent_storage_path() {
        match std::fs::remove_dir_all(&storage) {
            Ok(()) => tracing::info!(path = %storage.display(), "Removed persistent storage"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %storage.display(), error = %e, "Failed to remove persistent storage")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_engine::headless::HeadlessProfile;
    use snowy_engine::{page_event_channel, PageContext, PageEventSink, TabId};

    #[test]
    fn test_default_is_cancel() {
        assert_eq!(Confirmation::default(), Confirmation::Cancelled);
    }

    #[test]
    fn test_closure_prompt() {
        let prompt = |title: &str, _: &str| {
            if title == CLEAR_DATA_TITLE {
                Confirmation::Confirmed
            } else {
                Confirmation::Cancelled
            }
        };
        assert_eq!(
            prompt.confirm(CLEAR_DATA_TITLE, CLEAR_DATA_MESSAGE),
            Confirmation::Confirmed
        );
    }

    #[test]
    fn test_clears_profile_and_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("storage");
        std::fs::create_dir_all(storage.join("IndexedDB")).unwrap();

        let profile = HeadlessProfile::with_storage_path(storage.clone());
        let (tx, _rx) = page_event_channel();
        let mut page = profile.create_page(PageEventSink::new(TabId::new(), tx));
        page.load("https://a.test");

        clear_profile_data(&profile);

        assert_eq!(profile.cookie_count(), 0);
        assert_eq!(profile.cache_len(), 0);
        assert!(profile.visited_links().is_empty());
        assert!(!storage.exists());

        // Nothing left to remove the second time
        clear_profile_data(&profile);
    }
}
