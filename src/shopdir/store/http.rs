//! HTTP data source for a remotely hosted `shops.json`.

use super::DataSource;
use crate::error::{Result, ShopdirError};
use crate::model::ShopRecord;
use reqwest::Client;
use tracing::debug;

const USER_AGENT: &str = concat!("shopdir/", env!("CARGO_PKG_VERSION"));

/// Fetches the shop list with a single GET.
///
/// Non-2xx responses are reported as [`ShopdirError::UnexpectedStatus`]; the
/// body is only parsed after the status check. No retries: the caller decides
/// what a failed load means.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// # Errors
    ///
    /// Returns [`ShopdirError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<ShopRecord>> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(url = %self.url, %status, "shops response");
        if !status.is_success() {
            return Err(ShopdirError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let records = serde_json::from_str(&body)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
