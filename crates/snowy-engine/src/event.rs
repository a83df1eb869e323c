//! Inbound page notifications
//!
//! Each page holds a sink stamped with its tab id. The tab manager owns the
//! receiving end and decides, per event, whether the tab is still live.

use tokio::sync::mpsc;

use crate::id::TabId;
use crate::page::Icon;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEventKind {
    LoadStarted,
    UrlChanged(String),
    TitleChanged(String),
    IconChanged(Option<Icon>),
    LoadFinished { ok: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageEvent {
    pub tab: TabId,
    pub kind: PageEventKind,
}

pub type PageEventReceiver = mpsc::UnboundedReceiver<PageEvent>;

pub fn page_event_channel() -> (mpsc::UnboundedSender<PageEvent>, PageEventReceiver) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Clone)]
pub struct PageEventSink {
    tab: TabId,
    tx: mpsc::UnboundedSender<PageEvent>,
}

impl PageEventSink {
    pub fn new(tab: TabId, tx: mpsc::UnboundedSender<PageEvent>) -> Self {
        Self { tab, tx }
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// Queue a notification. Dropped silently once the receiver is gone.
    pub fn emit(&self, kind: PageEventKind) {
        if self.tx.send(PageEvent { tab: self.tab, kind }).is_err() {
            tracing::trace!(tab_id = %self.tab, "Page event receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_stamps_tab_id() {
        let (tx, mut rx) = page_event_channel();
        let tab = TabId::new();
        let sink = PageEventSink::new(tab, tx);

        sink.emit(PageEventKind::TitleChanged("Hello".to_string()));
        sink.emit(PageEventKind::LoadFinished { ok: true });

        let first = rx.try_recv().unwrap();
        assert_eq!(first.tab, tab);
        assert_eq!(first.kind, PageEventKind::TitleChanged("Hello".to_string()));
        assert_eq!(
            rx.try_recv().unwrap().kind,
            PageEventKind::LoadFinished { ok: true }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_emit_after_receiver_dropped() {
        let (tx, rx) = page_event_channel();
        let sink = PageEventSink::new(TabId::new(), tx);
        drop(rx);
        sink.emit(PageEventKind::LoadStarted);
    }
}
