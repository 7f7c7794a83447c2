use axum::{
    Json, Router,
    extract::{FromRequest, Request, State},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    AppState, Error,
    form::LookupForm,
    lookup::{LookupClient, LookupRequest},
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(lookup))
}

async fn lookup(
    State(client): State<LookupClient>,
    request: LookupRequest,
) -> Result<Json<Value>, Error> {
    let mut form = LookupForm::new(request.query);
    let Some(request) = form.begin_submit() else {
        return Err(Error::invalid_input());
    };
    form.finish(client.lookup(&request).await);
    if form.error().is_some() {
        return Err(Error::lookup_failed());
    }
    Ok(Json(form.take_result().unwrap_or_default()))
}

impl<S> FromRequest<S> for LookupRequest
where
    Json<LookupRequest>: FromRequest<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<LookupRequest>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if let Err(e) = request.validate() {
            debug!("rejected lookup query {:?}: {}", request.query, e);
            return Err(Error::invalid_input().into_response());
        }

        Ok(request)
    }
}
