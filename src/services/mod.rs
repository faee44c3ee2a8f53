use thiserror::Error;

use crate::gateway::errors::GatewayError;

pub mod calculator;
pub mod relay;
pub mod submission;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ServiceError {
    /// Text shown to the visitor; identical for every failure cause.
    pub fn user_notice(&self) -> &'static str {
        submission::SUBMISSION_FAILED_NOTICE
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
