use crate::models::UserInfo;
use crate::storage::UserStore;
use crate::utils::error::AppError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    // At least 8 characters, drawn only from letters, digits and the
    // allowed symbol set. The per-class requirements are checked separately
    // because the regex crate has no lookahead.
    static ref PASSWORD_CHARSET_RE: Regex = Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").unwrap();
    static ref HAS_LETTER_RE: Regex = Regex::new(r"[A-Za-z]").unwrap();
    static ref HAS_DIGIT_RE: Regex = Regex::new(r"\d").unwrap();
    static ref HAS_SYMBOL_RE: Regex = Regex::new(r"[@$!%*?&]").unwrap();
}

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AuthRequest {
    /// Display name, only meaningful for signup.
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    /// "signup" or "login"; anything else is rejected.
    pub action: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub user: UserInfo,
}

/// Successful outcome of an auth request, by action.
#[derive(Debug)]
pub enum AuthSuccess {
    UserCreated,
    LoggedIn(UserInfo),
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail)
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    let ok = PASSWORD_CHARSET_RE.is_match(password)
        && HAS_LETTER_RE.is_match(password)
        && HAS_DIGIT_RE.is_match(password)
        && HAS_SYMBOL_RE.is_match(password);

    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidPassword)
    }
}

/// Dispatches an auth request to signup or login.
///
/// Format validation runs before any storage access, for both actions.
pub async fn authenticate(
    store: &dyn UserStore,
    request: &AuthRequest,
) -> Result<AuthSuccess, AppError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    match request.action.as_str() {
        "signup" => {
            signup(store, request).await?;
            Ok(AuthSuccess::UserCreated)
        }
        "login" => {
            let user = login(store, request).await?;
            Ok(AuthSuccess::LoggedIn(user))
        }
        _ => Err(AppError::InvalidAction),
    }
}

// User signup
async fn signup(store: &dyn UserStore, request: &AuthRequest) -> Result<(), AppError> {
    store
        .append_one(&request.name, &request.email, &request.password)
        .await?;
    Ok(())
}

// User login: exact email+password match, returns the identity snapshot
async fn login(store: &dyn UserStore, request: &AuthRequest) -> Result<UserInfo, AppError> {
    let user = store
        .find_by_email(&request.email)
        .await?
        .filter(|u| u.password == request.password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(UserInfo::from(&user))
}
