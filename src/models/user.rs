use serde::{Deserialize, Serialize};

/// A registered portal user as persisted in the user database file.
///
/// The password is stored and compared verbatim, matching the deployed
/// portal's on-disk format. Known security defect: a hardening pass must
/// move to a salted one-way hash behind the `UserStore` seam.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,  // PRIMARY IDENTIFIER - assigned by the store, strictly increasing
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity snapshot returned to the client after a successful login.
/// Never carries the password.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
