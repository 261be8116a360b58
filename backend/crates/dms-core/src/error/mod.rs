use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid unit type: {value} {location}")]
    InvalidUnitType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid log status: {value} {location}")]
    InvalidLogStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
