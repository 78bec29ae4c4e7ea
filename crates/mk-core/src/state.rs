//! Shared application state

use std::sync::Arc;

use parking_lot::RwLock;

/// Lifecycle of a one-shot fetch. There is no retry state: a failed fetch
/// stays failed and the owning view renders a degraded empty state.
#[derive(Debug, Clone)]
pub enum RemoteData<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteData::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Shared slot a spawned fetch writes its outcome into. Views read it
/// non-blockingly every frame.
pub type RemoteSlot<T> = Arc<RwLock<RemoteData<T>>>;

/// Fresh slot in the `Loading` state.
pub fn loading_slot<T>() -> RemoteSlot<T> {
    Arc::new(RwLock::new(RemoteData::Loading))
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Whether to show the status bar
    pub show_status_bar: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_status_bar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_transitions() {
        let slot: RemoteSlot<u32> = loading_slot();
        assert!(slot.read().is_loading());

        *slot.write() = RemoteData::Ready(7);
        assert_eq!(slot.read().ready(), Some(&7));
        assert_eq!(slot.read().error(), None);

        *slot.write() = RemoteData::Failed("connection refused".to_string());
        assert_eq!(slot.read().ready(), None);
        assert_eq!(slot.read().error(), Some("connection refused"));
    }
}
