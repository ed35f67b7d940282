use thiserror::Error;

/// Failures of the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("corrupt record under `{key}`: {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("an account already exists for {0}")]
    DuplicateAccount(String),
    #[error("no account found for {0}")]
    NotFound(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no active session")]
    NotAuthenticated,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("qr rendering failed: {0}")]
    Render(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Message suitable for showing to the person at the device.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateAccount(_) => "An account with this email already exists.".into(),
            AppError::NotFound(_) => "No account found with this email.".into(),
            AppError::InvalidCredentials => "Incorrect password.".into(),
            AppError::NotAuthenticated => "Please log in first.".into(),
            AppError::Storage(_) | AppError::Hashing(_) => {
                "Something went wrong. Please try again.".into()
            }
            AppError::Render(_) => "Failed to render QR code.".into(),
        }
    }
}
