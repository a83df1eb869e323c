//! Injected user scripts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionPoint {
    DocumentCreation,
    DocumentReady,
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptWorld {
    Main,
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScript {
    pub name: String,
    pub source: String,
    pub injection_point: InjectionPoint,
    pub runs_on_subframes: bool,
    pub world: ScriptWorld,
}

impl UserScript {
    /// Script run in the page's main world once the document is ready,
    /// including inside subframes.
    pub fn document_ready(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            injection_point: InjectionPoint::DocumentReady,
            runs_on_subframes: true,
            world: ScriptWorld::Main,
        }
    }
}
