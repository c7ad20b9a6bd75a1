//! Lock accessor: inspect, create, and clear platform locks.
//!
//! Internal locks are owned by the platform and must clear on their own;
//! external locks are created by administrators and can be deleted. Clearing
//! everything therefore means waiting for the internal set to drain before
//! deleting each external lock.

use std::time::Duration;

use reqwest::Method;
use serde_json::{Value, json};
use tokio::time::{Instant, sleep};

use crate::client::{PlatformClient, ensure_positive, expect_success};
use crate::error::{ClientError, ClientResult};
use crate::resource::{Resource, ResourceDescriptor};

/// Descriptor for platform locks.
pub static LOCK: ResourceDescriptor = ResourceDescriptor {
    kind: "lock",
    prefix: "/api/v1/lock",
    embedded_key: "external_locks",
    default_columns: &["self_href", "reason", "source"],
};

/// Default time allowed for internal locks to clear.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(300);

const MAX_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Snapshot of the platform lock endpoint.
#[derive(Debug, Clone)]
pub struct LockStatus {
    document: Value,
}

impl LockStatus {
    /// Whether any lock is currently held.
    #[must_use]
    pub fn locked(&self) -> bool {
        self.document
            .get("locked")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether the platform has quiesced administrative operations.
    #[must_use]
    pub fn quiesced(&self) -> bool {
        self.document
            .get("quiesced")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Internal locks currently held by the platform.
    #[must_use]
    pub fn internal_locks(&self) -> Vec<Resource> {
        self.embedded("internal_locks")
    }

    /// External locks created by administrators.
    #[must_use]
    pub fn external_locks(&self) -> Vec<Resource> {
        self.embedded("external_locks")
    }

    /// Raw status document.
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.document
    }

    fn embedded(&self, key: &str) -> Vec<Resource> {
        self.document
            .pointer(&format!("/_embedded/{key}"))
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .cloned()
                    .map(|document| Resource::new(&LOCK, document))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Accessor for the lock sub-path.
#[derive(Debug, Clone, Copy)]
pub struct LockClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> LockClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// Fetch the current lock status.
    pub async fn status(&self) -> ClientResult<LockStatus> {
        let document = self.client.get_json(LOCK.prefix, LOCK.kind).await?;
        Ok(LockStatus { document })
    }

    /// Create an external lock and return its id from the location header.
    pub async fn create(&self, reason: &str) -> ClientResult<String> {
        let body = json!({"reason": reason});
        let response = self
            .client
            .send(Method::POST, LOCK.prefix, Some(&body))
            .await?;
        let response = expect_success(response, LOCK.kind, LOCK.prefix).await?;
        response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::invalid_argument(
                    "lock creation response did not include a location header",
                )
            })
    }

    /// Delete one external lock by path id.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        LOCK.validate_id(id)?;
        let response = self.client.send(Method::DELETE, id, None).await?;
        expect_success(response, LOCK.kind, id).await?;
        Ok(())
    }

    /// Wait for internal locks to clear, then delete every external lock.
    ///
    /// Polls the status endpoint at `interval` (default: a tenth of the
    /// timeout, capped at 60s) until the internal set is empty, failing with
    /// [`ClientError::LockTimeout`] when the deadline passes. External lock
    /// ids are taken from each lock's self link.
    pub async fn delete_all(
        &self,
        timeout: Duration,
        interval: Option<Duration>,
    ) -> ClientResult<()> {
        ensure_positive(timeout, "timeout")?;
        let interval = interval.unwrap_or_else(|| (timeout / 10).min(MAX_POLL_INTERVAL));
        ensure_positive(interval, "interval")?;

        let deadline = Instant::now() + timeout;
        let status = loop {
            let status = self.status().await?;
            if status.internal_locks().is_empty() {
                break status;
            }
            if Instant::now() >= deadline {
                return Err(ClientError::LockTimeout { waited: timeout });
            }
            sleep(interval).await;
        };

        for lock in status.external_locks() {
            if let Some(href) = lock.self_href() {
                self.delete(href).await?;
            }
        }
        Ok(())
    }
}
