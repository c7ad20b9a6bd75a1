//! Install accessor: platform installation and version information.

use serde_json::Value;

use crate::client::PlatformClient;
use crate::error::ClientResult;

const INSTALL_PATH: &str = "/api/v1/install";

/// Accessor for the install sub-path.
#[derive(Debug, Clone, Copy)]
pub struct InstallClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> InstallClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// Fetch the platform install document.
    pub async fn get(&self) -> ClientResult<Value> {
        self.client.get_json(INSTALL_PATH, "install").await
    }
}
