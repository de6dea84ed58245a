use crate::models::User;
use crate::storage::UserStore;
use crate::utils::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// On-disk layout: one JSON object wrapping the ordered user array.
#[derive(Debug, Serialize, Deserialize, Default)]
struct UserCollection {
    users: Vec<User>,
}

/// File-backed user store.
///
/// The collection is loaded fresh on every call (no in-memory cache) and
/// rewritten whole on every mutation. `append_one` holds `write_lock`
/// across its load-check-append-persist sequence, so concurrent signups
/// serialize instead of losing updates.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn load(&self) -> Result<UserCollection, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::StorageError(format!("malformed user database: {}", e))),
            // First run: no database file yet, start from an empty collection
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UserCollection::default()),
            Err(e) => Err(AppError::StorageError(format!(
                "failed to read user database: {}",
                e
            ))),
        }
    }

    async fn persist(&self, collection: &UserCollection) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(collection)
            .map_err(|e| AppError::StorageError(format!("failed to serialize users: {}", e)))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::StorageError(format!("failed to write user database: {}", e)))
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.load().await?.users)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let collection = self.load().await?;
        Ok(collection.users.into_iter().find(|u| u.email == email))
    }

    async fn append_one(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        // Single-writer critical section over the read-modify-write
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;

        if collection.users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateUser);
        }

        // Highest id so far + 1; collision-free while the lock is held
        let id = collection.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        collection.users.push(user.clone());
        self.persist(&collection).await?;

        log::debug!("💾 User database updated: {} records", collection.users.len());

        Ok(user)
    }
}
