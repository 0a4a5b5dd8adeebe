//! Holder for the currently displayed SBOM.
//!
//! [`SbomState`] keeps at most one parsed document. Every replacement,
//! including clearing, notifies all listeners exactly once, synchronously,
//! in subscription order.

use crate::model::{CycloneDxDocument, SbomDocument, SpdxDocument};
use std::fmt;

/// Handle returned by [`SbomState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn() + Send>;

/// The currently loaded document and its listeners.
#[derive(Default)]
pub struct SbomState {
    document: Option<SbomDocument>,
    file_name: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SbomState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called after every replacement.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub const fn document(&self) -> Option<&SbomDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn cyclonedx(&self) -> Option<&CycloneDxDocument> {
        self.document.as_ref().and_then(SbomDocument::as_cyclonedx)
    }

    #[must_use]
    pub fn spdx(&self) -> Option<&SpdxDocument> {
        self.document.as_ref().and_then(SbomDocument::as_spdx)
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Record the source file name. Does not notify.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    pub fn set_cyclonedx(&mut self, document: CycloneDxDocument) {
        self.replace(Some(SbomDocument::from(document)));
    }

    pub fn set_spdx(&mut self, document: SpdxDocument) {
        self.replace(Some(SbomDocument::from(document)));
    }

    /// Replace the held document with any parsed document.
    pub fn set_document(&mut self, document: SbomDocument) {
        self.replace(Some(document));
    }

    /// Drop the held document and file name.
    pub fn clear(&mut self) {
        self.file_name = None;
        self.replace(None);
    }

    fn replace(&mut self, document: Option<SbomDocument>) {
        self.document = document;
        tracing::debug!(
            "SBOM state changed (loaded: {}), notifying {} listeners",
            self.document.is_some(),
            self.listeners.len()
        );
        for (_, listener) in &self.listeners {
            listener();
        }
    }
}

impl fmt::Debug for SbomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SbomState")
            .field("document", &self.document.as_ref().map(SbomDocument::family))
            .field("file_name", &self.file_name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter(state: &mut SbomState) -> (Arc<AtomicUsize>, SubscriptionId) {
        let count = Arc::new(AtomicUsize::new(0));
        let clone = Arc::clone(&count);
        let id = state.subscribe(move || {
            clone.fetch_add(1, Ordering::SeqCst);
        });
        (count, id)
    }

    #[test]
    fn test_set_and_clear_notify_once() {
        let mut state = SbomState::new();
        let (count, _) = counter(&mut state);

        state.set_cyclonedx(CycloneDxDocument::default());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(state.cyclonedx().is_some());
        assert!(state.spdx().is_none());

        state.clear();
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(state.document().is_none());
    }

    #[test]
    fn test_file_name_does_not_notify() {
        let mut state = SbomState::new();
        let (count, _) = counter(&mut state);
        state.set_file_name("bom.json");
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(state.file_name(), Some("bom.json"));
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = SbomState::new();
        let (count, id) = counter(&mut state);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_spdx(SpdxDocument::default());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(state.listener_count(), 0);
    }

    #[test]
    fn test_notification_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut state = SbomState::new();
        for n in 0..3 {
            let order = Arc::clone(&order);
            state.subscribe(move || {
                if let Ok(mut seen) = order.lock() {
                    seen.push(n);
                }
            });
        }
        state.set_spdx(SpdxDocument::default());
        let seen = order.lock().map(|s| s.clone()).unwrap_or_default();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
