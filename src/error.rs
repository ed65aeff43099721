use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        field: Option<String>,
        code: Option<String>,
    },

    #[error("Server rejected request: status {status}")]
    Server { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict_with_code(
        message: impl Into<String>,
        field: Option<String>,
        code: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            message: message.into(),
            field,
            code: Some(code.into()),
        }
    }

    pub fn server(status: u16) -> Self {
        Self::Server { status }
    }

    /// Text for user-facing dialogs, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { message } => message.clone(),
            AppError::Conflict { message, .. } => message.clone(),
            AppError::Network(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
