//! State of the lookup form: the text typed so far, whether a lookup is in
//! flight and the outcome of the last one.

use serde_json::Value;

use crate::{
    Error,
    lookup::LookupRequest,
    validate::{InputKind, classify},
};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid domain or IP address.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

#[derive(Debug, Default)]
pub struct LookupForm {
    query: String,
    result: Option<Value>,
    error: Option<String>,
    loading: bool,
}

impl LookupForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn kind(&self) -> Option<InputKind> {
        classify(&self.query)
    }

    pub fn is_valid(&self) -> bool {
        self.kind().is_some()
    }

    /// Message shown under the input. Nothing is shown while the input is empty.
    pub fn validation_message(&self) -> Option<&'static str> {
        if !self.query.is_empty() && !self.is_valid() {
            Some(INVALID_INPUT_MESSAGE)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.is_valid()
    }

    #[allow(dead_code)]
    pub fn button_label(&self) -> &'static str {
        if self.loading { "Searching..." } else { "Lookup" }
    }

    /// Starts a lookup. Returns the request to send, or `None` when the form
    /// cannot be submitted, in which case the state is left untouched.
    pub fn begin_submit(&mut self) -> Option<LookupRequest> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.result = None;
        self.error = None;
        Some(LookupRequest::new(self.query.trim()))
    }

    pub fn finish(&mut self, outcome: Result<Value, Error>) {
        self.loading = false;
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(err) => {
                error!("lookup for {} failed: {}", self.query.trim(), err);
                self.error = Some(LOOKUP_FAILED_MESSAGE.to_owned());
            }
        }
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}
