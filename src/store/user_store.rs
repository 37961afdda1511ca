//! In-memory user store.
//!
//! Holds users keyed by id, validates them before they are accepted, and
//! assigns identifiers on create. A blank or absent display name is
//! replaced by the login during validation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::Zoned;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// User store holding the id-to-user map behind a mutex.
///
/// All operations lock the map, so create/update/list are serialized per
/// store instance. Cloning is cheap since the map lives in an `Arc`.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<HashMap<i64, User>>>,
}

impl UserStore {
    /// Creates a new, empty UserStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists all stored users in no guaranteed order.
    pub fn list_all(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    /// Validates the user, assigns the next id, and stores it.
    ///
    /// Validation may rewrite the name (login substitution); the stored and
    /// returned record carry the rewritten value. A rejected user never
    /// consumes an id.
    pub fn create(&self, mut user: User) -> AppResult<User> {
        validate_user(&mut user)?;

        let mut users = self.lock();
        let id = next_id(&users);
        user.id = Some(id);
        users.insert(id, user.clone());

        tracing::info!(id, login = user.login.as_deref().unwrap_or_default(), "User added");
        Ok(user)
    }

    /// Replaces the stored user at the id carried in the payload.
    ///
    /// The stored record is replaced wholesale; fields absent from the
    /// payload are not merged from the old record.
    pub fn update(&self, mut user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::validation("id must be specified"))?;

        let mut users = self.lock();
        if !users.contains_key(&id) {
            tracing::warn!(id, "Update requested for unknown user");
            return Err(AppError::validation(format!("user with id {id} not found")));
        }

        validate_user(&mut user)?;
        users.insert(id, user.clone());

        tracing::info!(id, "User updated");
        Ok(user)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, User>> {
        // A poisoned map is still structurally valid; recover the guard.
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Next identifier: maximum stored key plus one, starting at 1.
///
/// Callers must hold the store lock so the scan cannot race a concurrent
/// insert.
fn next_id(users: &HashMap<i64, User>) -> i64 {
    users.keys().copied().max().unwrap_or(0) + 1
}

/// Applies the user validation ruleset in order; the first failed rule wins.
///
/// Rule 5 is a mutation, not a check: a blank or absent name is replaced by
/// the login before the birthday rule runs.
fn validate_user(user: &mut User) -> AppResult<()> {
    if user.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
        return Err(AppError::validation("email must not be empty"));
    }
    if user.email.as_deref().is_some_and(|e| !e.contains('@')) {
        return Err(AppError::validation("email must contain @"));
    }
    if user.login.as_deref().is_none_or(|l| l.trim().is_empty()) {
        return Err(AppError::validation("login must not be empty"));
    }
    if user.login.as_deref().is_some_and(|l| l.contains(' ')) {
        return Err(AppError::validation("login must not contain spaces"));
    }
    if user.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        user.name = user.login.clone();
    }
    if user.birthday > Zoned::now().date() {
        return Err(AppError::validation("birthday cannot be in the future"));
    }
    Ok(())
}
