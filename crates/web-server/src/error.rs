use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_types::CoreError;
use database::DbError;
use std::fmt;
use thiserror::Error;

/// The note operation a storage failure happened in. Each one has its own
/// fixed client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Error fetching notes.",
            Operation::Create => "Error creating note.",
            Operation::Update => "Error updating note.",
            Operation::Delete => "Error deleting note.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] CoreError),
    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("Note not found.")]
    NotFound,
    #[error("Storage error during {operation}: {source}")]
    Storage {
        operation: Operation,
        #[source]
        source: DbError,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags a storage failure with its operation.
    pub fn storage(operation: Operation) -> impl FnOnce(DbError) -> AppError {
        move |source| AppError::Storage { operation, source }
    }
}

/// Converts our custom `AppError` into a plain-text HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Note not found.".to_string()),
            AppError::Storage { operation, source } => {
                tracing::error!(error = %source, %operation, "Note store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    operation.failure_message().to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
