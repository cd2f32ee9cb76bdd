use crate::{Error, Result};
use async_trait::async_trait;
use http::Uri;
use std::{fmt, time::Duration};

/// The request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the body of a `GET` request. The speaker's whole protocol runs over
/// plain `GET`s, so this is the only seam between the client and the network.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Returns the body of a successful reply, or the reason there is none.
    async fn get(&self, uri: &Uri) -> Result<String>;
}

/// A [`Transport`] backed by a `reqwest` client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Fails only if the TLS backend or resolver can't be initialised.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, uri: &Uri) -> Result<String> {
        let url = uri.to_string();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        response.text().await.map_err(|e| classify(e, &url))
    }
}

fn classify(err: reqwest::Error, url: &str) -> Error {
    if err.is_timeout() {
        Error::Timeout(url.to_string())
    } else {
        Error::Http(err)
    }
}
