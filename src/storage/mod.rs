pub mod json_store;

pub use json_store::*;

use crate::models::User;
use crate::utils::error::AppError;
use async_trait::async_trait;

/// Storage capability for the user collection.
///
/// Request handling only talks to this trait, so a lock-guarded file, an
/// embedded database or a real transactional backend can be swapped in
/// without touching the service layer.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the full ordered user collection.
    async fn load_all(&self) -> Result<Vec<User>, AppError>;

    /// Looks up a user by exact (case-sensitive) email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Appends a new user with a freshly assigned id and persists the
    /// collection. Fails with `AppError::DuplicateUser` if the email is
    /// already taken. The whole check-then-append sequence is atomic with
    /// respect to other `append_one` calls on the same store.
    async fn append_one(&self, name: &str, email: &str, password: &str) -> Result<User, AppError>;
}
