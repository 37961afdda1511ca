//! In-memory film store.
//!
//! Holds films keyed by id, validates them before they are accepted, and
//! assigns identifiers on create.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::civil::{Date, date};

use crate::error::{AppError, AppResult};
use crate::models::Film;

/// Longest accepted film description, in characters.
const MAX_DESCRIPTION_CHARS: usize = 200;

/// Date of the first public film screening. Earlier release dates are
/// rejected.
const EARLIEST_RELEASE_DATE: Date = date(1895, 12, 28);

/// Film store holding the id-to-film map behind a mutex.
///
/// All operations lock the map, so create/update/list are serialized per
/// store instance. Cloning is cheap since the map lives in an `Arc`.
#[derive(Clone, Default)]
pub struct FilmStore {
    films: Arc<Mutex<HashMap<i64, Film>>>,
}

impl FilmStore {
    /// Creates a new, empty FilmStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists all stored films in no guaranteed order.
    pub fn list_all(&self) -> Vec<Film> {
        self.lock().values().cloned().collect()
    }

    /// Validates the film, assigns the next id, and stores it.
    ///
    /// Validation runs before id assignment, so a rejected film never
    /// consumes an id. The assigned id is communicated through the returned
    /// film, never by aliasing the caller's value.
    pub fn create(&self, mut film: Film) -> AppResult<Film> {
        validate_film(&film)?;

        let mut films = self.lock();
        let id = next_id(&films);
        film.id = Some(id);
        films.insert(id, film.clone());

        tracing::info!(id, name = film.name.as_deref().unwrap_or_default(), "Film added");
        Ok(film)
    }

    /// Replaces the stored film at the id carried in the payload.
    ///
    /// The stored record is replaced wholesale; fields absent from the
    /// payload are not merged from the old record.
    pub fn update(&self, film: Film) -> AppResult<Film> {
        let id = film
            .id
            .ok_or_else(|| AppError::validation("id must be specified"))?;

        let mut films = self.lock();
        if !films.contains_key(&id) {
            tracing::warn!(id, "Update requested for unknown film");
            return Err(AppError::validation(format!("film with id {id} not found")));
        }

        validate_film(&film)?;
        films.insert(id, film.clone());

        tracing::info!(id, "Film updated");
        Ok(film)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, Film>> {
        // A poisoned map is still structurally valid; recover the guard.
        self.films.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Next identifier: maximum stored key plus one, starting at 1.
///
/// Callers must hold the store lock so the scan cannot race a concurrent
/// insert.
fn next_id(films: &HashMap<i64, Film>) -> i64 {
    films.keys().copied().max().unwrap_or(0) + 1
}

/// Applies the film validation ruleset in order; the first failed rule wins.
fn validate_film(film: &Film) -> AppResult<()> {
    if film.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        return Err(AppError::validation("name must not be empty"));
    }
    if film
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_CHARS)
    {
        return Err(AppError::validation(
            "description must not exceed 200 characters",
        ));
    }
    if film.release_date.is_some_and(|d| d < EARLIEST_RELEASE_DATE) {
        return Err(AppError::validation(
            "release date cannot be earlier than 28 December 1895",
        ));
    }
    if film.duration <= 0 {
        return Err(AppError::validation("duration must be a positive number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_film() -> Film {
        Film {
            id: None,
            name: Some("Inception".to_string()),
            description: Some("A mind-bending thriller".to_string()),
            release_date: Some(date(2010, 7, 16)),
            duration: 148,
        }
    }

    fn validation_message(result: AppResult<Film>) -> String {
        match result {
            Err(AppError::Validation { message }) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_assigns_id_one_for_first_film() {
        let store = FilmStore::new();
        let created = store.create(valid_film()).expect("film should be valid");
        assert_eq!(created.id, Some(1));
        assert_eq!(created.name.as_deref(), Some("Inception"));
    }

    #[test]
    fn test_create_assigns_strictly_increasing_ids() {
        let store = FilmStore::new();
        for expected in 1..=5 {
            let created = store.create(valid_film()).expect("film should be valid");
            assert_eq!(created.id, Some(expected));
        }
    }

    #[test]
    fn test_create_rejected_film_consumes_no_id() {
        let store = FilmStore::new();
        store.create(valid_film()).expect("film should be valid");

        let invalid = Film {
            duration: 0,
            ..valid_film()
        };
        assert!(store.create(invalid).is_err());
        assert_eq!(store.list_all().len(), 1);

        let created = store.create(valid_film()).expect("film should be valid");
        assert_eq!(created.id, Some(2));
    }

    #[test]
    fn test_create_rejects_missing_name() {
        let store = FilmStore::new();
        let film = Film {
            name: None,
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.create(film)),
            "name must not be empty"
        );
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let store = FilmStore::new();
        let film = Film {
            name: Some("   ".to_string()),
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.create(film)),
            "name must not be empty"
        );
    }

    #[test]
    fn test_description_boundary() {
        let store = FilmStore::new();

        let at_limit = Film {
            description: Some("x".repeat(200)),
            ..valid_film()
        };
        assert!(store.create(at_limit).is_ok());

        let over_limit = Film {
            description: Some("x".repeat(201)),
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.create(over_limit)),
            "description must not exceed 200 characters"
        );
    }

    #[test]
    fn test_missing_description_is_accepted() {
        let store = FilmStore::new();
        let film = Film {
            description: None,
            ..valid_film()
        };
        assert!(store.create(film).is_ok());
    }

    #[test]
    fn test_release_date_boundary() {
        let store = FilmStore::new();

        let at_limit = Film {
            release_date: Some(date(1895, 12, 28)),
            ..valid_film()
        };
        assert!(store.create(at_limit).is_ok());

        let before_limit = Film {
            release_date: Some(date(1895, 12, 27)),
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.create(before_limit)),
            "release date cannot be earlier than 28 December 1895"
        );
    }

    #[test]
    fn test_duration_boundary() {
        let store = FilmStore::new();

        for duration in [0, -1, -148] {
            let film = Film {
                duration,
                ..valid_film()
            };
            assert_eq!(
                validation_message(store.create(film)),
                "duration must be a positive number"
            );
        }

        let film = Film {
            duration: 1,
            ..valid_film()
        };
        assert!(store.create(film).is_ok());
    }

    #[test]
    fn test_validation_order_first_failure_wins() {
        let store = FilmStore::new();
        // Every rule violated at once; the name rule is reported.
        let film = Film {
            id: None,
            name: None,
            description: Some("x".repeat(201)),
            release_date: Some(date(1800, 1, 1)),
            duration: -1,
        };
        assert_eq!(
            validation_message(store.create(film)),
            "name must not be empty"
        );
    }

    #[test]
    fn test_update_without_id_fails() {
        let store = FilmStore::new();
        store.create(valid_film()).expect("film should be valid");

        let payload = valid_film();
        assert_eq!(
            validation_message(store.update(payload)),
            "id must be specified"
        );
    }

    #[test]
    fn test_update_without_id_fails_even_with_invalid_fields() {
        let store = FilmStore::new();
        let payload = Film {
            id: None,
            name: None,
            duration: 0,
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.update(payload)),
            "id must be specified"
        );
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let store = FilmStore::new();
        let payload = Film {
            id: Some(42),
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.update(payload)),
            "film with id 42 not found"
        );
    }

    #[test]
    fn test_update_replaces_record_wholesale() {
        let store = FilmStore::new();
        let created = store.create(valid_film()).expect("film should be valid");

        let replacement = Film {
            id: created.id,
            name: Some("Tenet".to_string()),
            description: None,
            release_date: None,
            duration: 150,
        };
        let updated = store
            .update(replacement.clone())
            .expect("replacement should be valid");
        assert_eq!(updated, replacement);

        let stored = store.list_all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], replacement);
    }

    #[test]
    fn test_update_revalidates_payload() {
        let store = FilmStore::new();
        let created = store.create(valid_film()).expect("film should be valid");

        let invalid = Film {
            id: created.id,
            duration: 0,
            ..valid_film()
        };
        assert_eq!(
            validation_message(store.update(invalid)),
            "duration must be a positive number"
        );
        // The stored record is untouched.
        assert_eq!(store.list_all()[0].duration, 148);
    }

    #[test]
    fn test_list_all_empty_store() {
        let store = FilmStore::new();
        assert!(store.list_all().is_empty());
    }

    proptest! {
        /// For any batch of valid films, create assigns 1..=n in order.
        #[test]
        fn prop_ids_strictly_increase(names in proptest::collection::vec("[a-zA-Z ]*[a-zA-Z][a-zA-Z ]*", 1..20)) {
            let store = FilmStore::new();
            for (index, name) in names.iter().enumerate() {
                let film = Film {
                    name: Some(name.clone()),
                    ..valid_film()
                };
                let created = store.create(film).expect("film should be valid");
                prop_assert_eq!(created.id, Some(index as i64 + 1));
            }
        }

        /// Non-positive durations are always rejected and never stored.
        #[test]
        fn prop_non_positive_duration_rejected(duration in i64::MIN..=0) {
            let store = FilmStore::new();
            let film = Film { duration, ..valid_film() };
            prop_assert!(store.create(film).is_err());
            prop_assert!(store.list_all().is_empty());
        }
    }
}
