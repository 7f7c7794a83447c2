use std::time::Duration;

use isahc::{
    Request,
    config::Configurable,
    http::{Uri, header},
    prelude::AsyncReadResponseExt,
};
use serde_json::Value;

use crate::{Error, config::Lookup as LookupConfig};

use super::LookupRequest;

/// Posts lookup queries to the backend. One attempt per query.
#[derive(Clone)]
pub struct LookupClient {
    inner: isahc::HttpClient,
    url: Uri,
}

impl LookupClient {
    pub fn new(config: &LookupConfig) -> Result<Self, Error> {
        let url = config.url.parse::<Uri>().map_err(isahc::http::Error::from)?;
        let inner = isahc::HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(5))
            .default_header(
                "user-agent",
                format!("iplookup/{}", env!("CARGO_PKG_VERSION")),
            )
            .build()?;

        Ok(Self { inner, url })
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }

    pub async fn lookup(&self, request: &LookupRequest) -> Result<Value, Error> {
        debug!("lookup {} via {}", request.query, self.url);
        let body = serde_json::to_vec(request)?;
        let request = Request::post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)?;

        let mut response = self.inner.send_async(request).await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("lookup backend status: {status}, msg: {}", text.trim());
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Value>().await?)
    }
}
