mod http_client;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{form::INVALID_INPUT_MESSAGE, validate::is_valid_input};

pub use http_client::LookupClient;

/// Body posted to the lookup backend.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LookupRequest {
    #[validate(custom(function = "validate_query"))]
    pub query: String,
}

impl LookupRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

fn validate_query(query: &str) -> Result<(), ValidationError> {
    if is_valid_input(query) {
        return Ok(());
    }
    let mut error = ValidationError::new("query");
    error.message = Some(Cow::Borrowed(INVALID_INPUT_MESSAGE));
    Err(error)
}
