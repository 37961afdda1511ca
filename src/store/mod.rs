//! In-memory stores for the catalog entities.
//!
//! Each store owns its own id-to-record map behind a mutex, so list,
//! create, and update are serialized per store instance. Stores validate
//! records before accepting them and assign identifiers on create.

mod film_store;
mod user_store;

pub use film_store::FilmStore;
pub use user_store::UserStore;

/// Aggregates all entity stores for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Since each store wraps its map in an `Arc`, cloning is cheap.
#[derive(Clone, Default)]
pub struct Stores {
    pub films: FilmStore,
    pub users: UserStore,
}

impl Stores {
    /// Creates a new Stores instance with empty stores.
    pub fn new() -> Self {
        Self::default()
    }
}
