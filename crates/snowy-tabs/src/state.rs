//! Tab State Machine
//!
//! ```text
//! Created
//!   ↓ first activation (or opened in background)
//! Active ⇄ Inactive
//!   ↓ close
//! Closed (terminal)
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Page exists but the tab has not been shown yet
    Created,
    /// Tab is the one on screen
    Active,
    /// Tab is open but not on screen
    Inactive,
    /// Page destroyed
    Closed,
}

impl TabState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: TabState) -> bool {
        match (self, target) {
            (TabState::Created, TabState::Active) => true,
            (TabState::Created, TabState::Inactive) => true,
            (TabState::Active, TabState::Inactive) => true,
            (TabState::Inactive, TabState::Active) => true,
            (TabState::Active, TabState::Closed) => true,
            (TabState::Inactive, TabState::Closed) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, TabState::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Created => "created",
            TabState::Active => "active",
            TabState::Inactive => "inactive",
            TabState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(TabState::Created),
            "active" => Ok(TabState::Active),
            "inactive" => Ok(TabState::Inactive),
            "closed" => Ok(TabState::Closed),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}
