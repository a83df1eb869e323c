//! Developer tools commands
use snowy_core::DevToolsVisibility;

use super::CommandResult;
use crate::state::AppState;

/// Toggle the active tab's inspector. Returns whether it is now visible.
pub fn toggle_devtools(state: &AppState) -> CommandResult<bool> {
    state
        .with_browser_mut(|browser| {
            let visibility = browser.toggle_devtools()?;
            Ok(visibility == DevToolsVisibility::Shown)
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowy_core::Config;

    #[test]
    fn test_toggle_twice() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Config::new(dir.path().to_path_buf())).unwrap();
        state.initialize().unwrap();

        assert_eq!(toggle_devtools(&state).data, Some(true));
        assert_eq!(toggle_devtools(&state).data, Some(false));
        assert_eq!(toggle_devtools(&state).data, Some(true));
    }
}
