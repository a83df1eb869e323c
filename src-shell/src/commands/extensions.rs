//! Extension commands
use super::CommandResult;
use crate::state::AppState;

pub fn get_extensions(state: &AppState) -> CommandResult<Vec<String>> {
    state
        .with_browser(|browser| Ok(browser.extension_names()))
        .into()
}

/// Reinstall scripts from the extensions directory. Open tabs pick them up
/// on their next load.
pub fn reload_extensions(state: &AppState) -> CommandResult<Vec<String>> {
    state
        .with_browser_mut(|browser| {
            let count = browser.reload_extensions()?;
            tracing::info!(count, "Reloaded extensions");
            Ok(browser.extension_names())
        })
        .into()
}
