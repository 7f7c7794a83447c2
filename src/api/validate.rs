use axum::{
    Json, Router,
    extract::Query,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, form::LookupForm, validate::InputKind};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(validate_query).post(validate_body))
}

#[derive(Deserialize)]
struct Input {
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
struct Validation {
    query: String,
    valid: bool,
    submittable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<InputKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl From<Input> for Validation {
    fn from(input: Input) -> Self {
        let form = LookupForm::new(input.query);
        let kind = form.kind();
        Self {
            valid: kind.is_some(),
            submittable: form.can_submit(),
            kind,
            message: form.validation_message(),
            query: form.query().to_owned(),
        }
    }
}

async fn validate_query(Query(input): Query<Input>) -> Json<Validation> {
    Json(input.into())
}

async fn validate_body(Json(input): Json<Input>) -> Json<Validation> {
    Json(input.into())
}
