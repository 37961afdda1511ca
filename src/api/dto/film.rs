//! Film-related DTOs for API requests and responses.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Film;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or updating a film.
///
/// Create and update share one shape; `id` is ignored on create and
/// required by the store on update. Presence checks are left to the store's
/// validation ruleset, so most fields are optional on the wire.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub release_date: Option<Date>,
    /// Duration in minutes; omitting it yields 0, which validation rejects.
    #[serde(default)]
    pub duration: i64,
}

impl FilmPayload {
    /// Converts the payload into a Film record for the store.
    pub fn into_film(self) -> Film {
        Film {
            id: self.id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for film data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub release_date: Option<Date>,
    pub duration: i64,
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        // Stored films always carry an id and a validated name.
        Self {
            id: film.id.unwrap_or_default(),
            name: film.name.unwrap_or_default(),
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
        }
    }
}
