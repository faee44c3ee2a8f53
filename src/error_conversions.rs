//! Error conversion glue between the `data` layer and the services.
//!
//! The domain and form layers must not depend on service error types, so the
//! conversions live here and are only compiled with the `server` feature.

use crate::forms::FormError;
use crate::services::ServiceError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
