//! Form definitions backing the calculator and lead capture widgets.

use thiserror::Error;
use validator::ValidationErrors;

pub mod calculator;
pub mod lead;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid length")]
    InvalidLength,

    #[error("invalid form id")]
    InvalidFormId,
}
