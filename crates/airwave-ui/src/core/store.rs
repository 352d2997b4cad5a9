//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The settings slice is the single source of truth for client settings; the
//!   preferences layer persists it after every reducer that touches it.
//! - Toasts live next to settings so any feature can notify without props.

use airwave_config::ClientSettings;
use yewdux::store::Store;

use crate::models::{Toast, ToastKind};

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Client settings shared by every settings panel.
    pub settings: ClientSettings,
    /// Pending notifications.
    pub toasts: ToastSlice,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastSlice {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastSlice {
    /// Queue a toast and return its identifier.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Toasts in display order.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Flip the data broadcasting flag on the shared settings.
pub fn set_data_broadcasting(store: &mut AppStore, enabled: bool) {
    store.settings.tv_show_data_broadcasting = enabled;
}
