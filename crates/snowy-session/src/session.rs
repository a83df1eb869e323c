//! Session snapshot data structure

use serde::{Deserialize, Serialize};

/// URLs of the open tabs, in tab strip order.
///
/// Serialized as a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSnapshot {
    pub urls: Vec<String>,
}

impl SessionSnapshot {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn tab_count(&self) -> usize {
        self.urls.len()
    }
}

impl FromIterator<String> for SessionSnapshot {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
