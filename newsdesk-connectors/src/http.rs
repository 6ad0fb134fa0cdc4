use std::time::Duration;

use newsdesk_core::NewsdeskError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// Browser-like agent; some upstreams reject the reqwest default.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Build the shared HTTP client with a per-request timeout.
///
/// # Errors
/// Returns `Config` if the TLS backend cannot be initialised.
pub fn client(timeout: Duration) -> Result<Client, NewsdeskError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| NewsdeskError::Config(format!("http client: {e}")))
}

pub(crate) fn parse_base(connector: &'static str, raw: &str) -> Result<Url, NewsdeskError> {
    let mut url =
        Url::parse(raw).map_err(|e| NewsdeskError::connector(connector, format!("base url: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

pub(crate) fn endpoint(
    connector: &'static str,
    base: &Url,
    path: &str,
) -> Result<Url, NewsdeskError> {
    base.join(path)
        .map_err(|e| NewsdeskError::connector(connector, format!("url: {e}")))
}

/// Send `req` and decode a JSON body.
///
/// Transport failures never carry the request URL, which may hold credentials.
pub(crate) async fn get_json<T: DeserializeOwned>(
    connector: &'static str,
    req: RequestBuilder,
) -> Result<T, NewsdeskError> {
    let resp = req
        .send()
        .await
        .map_err(|e| NewsdeskError::connector(connector, e.without_url().to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(NewsdeskError::http(connector, status.as_u16()));
    }
    let body = resp
        .bytes()
        .await
        .map_err(|e| NewsdeskError::connector(connector, e.without_url().to_string()))?;
    serde_json::from_slice(&body).map_err(|e| NewsdeskError::data(format!("{connector}: {e}")))
}
