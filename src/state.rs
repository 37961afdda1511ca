//! Application state for Axum web framework.
//!
//! Contains the shared entity stores that are accessible across all
//! request handlers.

use crate::store::Stores;

/// Application state containing all shared stores.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since the stores use Arc internally. State is owned by
/// the process; nothing survives a restart.
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory stores for all entity types
    pub stores: Stores,
}

impl AppState {
    /// Creates a new AppState with empty stores.
    pub fn new() -> Self {
        Self {
            stores: Stores::new(),
        }
    }
}
