//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `film` - Film request/response DTOs
//! - `user` - User request/response DTOs
//! - `error` - Common error response DTOs
//!
//! The wire format uses camelCase field names and ISO-8601 dates.

mod error;
mod film;
mod user;

pub use error::ErrorResponse;
pub use film::{FilmPayload, FilmResponse};
pub use user::{UserPayload, UserResponse};
