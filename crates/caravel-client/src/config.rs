//! Platform configuration accessor.

use reqwest::Method;
use serde_json::Value;

use crate::client::{PlatformClient, expect_success};
use crate::error::ClientResult;

const AUTH_PATH: &str = "/api/v2/config/auth";

/// Accessor for the platform configuration sub-path.
#[derive(Debug, Clone, Copy)]
pub struct ConfigClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> ConfigClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// Submit external identity server settings to the platform.
    pub async fn set_auth(&self, settings: &Value) -> ClientResult<()> {
        let response = self
            .client
            .send(Method::POST, AUTH_PATH, Some(settings))
            .await?;
        expect_success(response, "config", AUTH_PATH).await?;
        Ok(())
    }
}
