use axum::Router;
use axum::http::StatusCode;

use crate::AppState;

mod lookup;
mod validate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/validate", validate::routes())
        .nest("/lookup", lookup::routes())
        .fallback(|| async { StatusCode::NOT_FOUND })
}
