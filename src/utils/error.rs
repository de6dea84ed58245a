use std::fmt;

#[derive(Debug)]
pub enum AppError {
    StorageError(String),
    InvalidEmail,
    InvalidPassword,
    DuplicateUser,
    InvalidCredentials,
    InvalidAction,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppError::InvalidEmail => write!(f, "Invalid email format"),
            AppError::InvalidPassword => write!(
                f,
                "Password must be at least 8 characters long and contain at least one number and one special character."
            ),
            AppError::DuplicateUser => write!(f, "User already exists"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::InvalidAction => write!(f, "Invalid action"),
        }
    }
}

impl std::error::Error for AppError {}
