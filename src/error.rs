//! Application Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::domain::DomainError;

/// Errors raised at the browser boundary and during startup
#[derive(Debug, Error)]
pub enum AppError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("browser API error: {0}")]
    Browser(String),

    /// `window.open` returned no handle, usually a popup blocker
    #[error("popup was blocked for {0}")]
    PopupBlocked(String),

    /// Site config parsing or settings serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logger already installed: {0}")]
    Logger(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_error_message() {
        let err = AppError::Logger("attempted to set a logger after the logging system was already initialized".to_string());
        assert!(err.to_string().starts_with("logger already installed: attempted"));
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: AppError = DomainError::NotFound("id 7".to_string()).into();
        assert_eq!(err.to_string(), DomainError::NotFound("id 7".to_string()).to_string());
    }

    #[test]
    fn test_json_error_converts() {
        let err: AppError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
