//! Privacy and session commands
use std::io::{self, BufRead, Write};

use snowy_core::{ConfirmPrompt, Confirmation};

use super::CommandResult;
use crate::state::AppState;

/// Wipe browsing data once `prompt` confirms. Returns whether anything was
/// deleted.
pub fn kill_data(state: &AppState, prompt: &dyn ConfirmPrompt) -> CommandResult<bool> {
    state
        .with_browser_mut(|browser| Ok(browser.clear_browsing_data(prompt)))
        .into()
}

pub fn save_session(state: &AppState) -> CommandResult<()> {
    state.with_browser(|browser| browser.shutdown()).into()
}

/// Only an explicit yes confirms
pub fn parse_answer(answer: &str) -> Confirmation {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    }
}

/// Asks on stdout and reads the answer from stdin
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, title: &str, message: &str) -> Confirmation {
        print!("{title}: {message} [y/N] ");
        if io::stdout().flush().is_err() {
            return Confirmation::Cancelled;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => parse_answer(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                Confirmation::Cancelled
            }
        }
    }
}
