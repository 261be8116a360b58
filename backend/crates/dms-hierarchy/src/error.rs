use dms_core::{UnitType, next_type};
use dms_db::DbError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid hierarchy: {message} {location}")]
    TypeMismatch {
        parent_type: UnitType,
        requested: UnitType,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot delete: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Filesystem error at {path:?}: {source} {location}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl HierarchyError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A `requested` unit was submitted under a `parent_type` it may not
    /// live in. The message names the single rank that would be legal.
    #[track_caller]
    pub fn type_mismatch(parent_type: UnitType, requested: UnitType) -> Self {
        let message = match next_type(parent_type) {
            Some(allowed) => format!(
                "a {requested} cannot be placed in a {parent_type}; only a {allowed} can"
            ),
            None => format!("a {parent_type} cannot contain other storage units"),
        };

        Self::TypeMismatch {
            parent_type,
            requested,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::Conflict { .. } => "CONFLICT",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Filesystem { .. } => "FILESYSTEM_ERROR",
        }
    }

    /// Text that may be shown to the caller. Store and filesystem details
    /// stay in the server log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. } => message.clone(),
            Self::TypeMismatch { message, .. } => format!("Invalid hierarchy: {message}"),
            Self::Database { .. } => {
                "A database error occurred; no changes were saved.".to_string()
            }
            Self::Filesystem { .. } => {
                "The storage directory could not be created; no changes were saved.".to_string()
            }
        }
    }
}

impl From<DbError> for HierarchyError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for HierarchyError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HierarchyError>;
