use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use isahc::Error as IsahcError;
use isahc::http::Error as HttpError;
use serde::Serialize;

use crate::form::{INVALID_INPUT_MESSAGE, LOOKUP_FAILED_MESSAGE};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{reason}")]
    Custom {
        status: StatusCode,
        reason: String,
        code: Option<&'static str>,
    },
    #[error("Isahc Error: {0}")]
    Isahc(#[from] IsahcError),
    #[error("Http Error: {0}")]
    Http(#[from] HttpError),
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("lookup backend responded with {status}")]
    Upstream { status: u16 },
}

#[derive(Serialize)]
struct ErrorJson {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{}", self);

        let status = self.status_code();
        let code = self.code().map(str::to_owned);
        (
            status,
            Json(ErrorJson {
                error: self.to_string(),
                code,
            }),
        )
            .into_response()
    }
}

impl Error {
    pub fn invalid_input() -> Self {
        Self::Custom {
            status: StatusCode::BAD_REQUEST,
            reason: INVALID_INPUT_MESSAGE.to_owned(),
            code: Some("invalid_input"),
        }
    }

    pub fn lookup_failed() -> Self {
        Self::Custom {
            status: StatusCode::BAD_GATEWAY,
            reason: LOOKUP_FAILED_MESSAGE.to_owned(),
            code: Some("lookup_failed"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Custom { status, .. } => *status,
            Error::Upstream { .. } | Error::Isahc(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Error::Custom { code, .. } => *code,
            Error::Isahc(_) => Some("http_client_error"),
            Error::Http(_) => Some("http_error"),
            Error::Json(_) => Some("json_error"),
            Error::Upstream { .. } => Some("upstream_error"),
        }
    }
}
