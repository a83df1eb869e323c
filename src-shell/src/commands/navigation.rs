//! Navigation commands
use super::CommandResult;
use crate::state::AppState;

/// Load address bar text in the active tab. Returns the resolved URL and
/// whether it became a search.
pub fn navigate(state: &AppState, text: &str) -> CommandResult<(String, bool)> {
    state
        .with_browser_mut(|browser| {
            let resolution = browser.navigate(text)?;
            let search = resolution.is_search();
            Ok((resolution.into_target(), search))
        })
        .into()
}

pub fn back(state: &AppState) -> CommandResult<()> {
    state
        .with_browser_mut(|browser| {
            browser.back();
            Ok(())
        })
        .into()
}

pub fn forward(state: &AppState) -> CommandResult<()> {
    state
        .with_browser_mut(|browser| {
            browser.forward();
            Ok(())
        })
        .into()
}

pub fn reload(state: &AppState) -> CommandResult<()> {
    state
        .with_browser_mut(|browser| {
            browser.reload();
            Ok(())
        })
        .into()
}
