//! Per-tab page handle

use std::sync::Arc;

use crate::Result;

/// Decoded favicon bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

/// One page surface owned by one tab.
///
/// Commands return immediately; their effects are reported later through the
/// page's event sink.
pub trait PageContext {
    type Inspector: Inspector;

    /// Start loading `url`. Coercion of loose input is the engine's job.
    fn load(&mut self, url: &str);

    fn url(&self) -> String;

    fn title(&self) -> String;

    fn icon(&self) -> Option<Icon>;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// No-op when there is no earlier entry.
    fn back(&mut self);

    /// No-op when there is no later entry.
    fn forward(&mut self);

    fn reload(&mut self);

    fn set_zoom_factor(&mut self, factor: f64);

    /// Bind a new inspector to this page. A page accepts one binding at a time.
    fn open_inspector(&mut self, title: &str) -> Result<Self::Inspector>;

    /// Detach from the engine. Further commands are ignored.
    fn close(&mut self);
}

/// Developer-tools panel bound to a single page.
pub trait Inspector {
    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Release the page binding. The inspector is unusable afterwards.
    fn close(&mut self);
}
