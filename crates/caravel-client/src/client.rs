//! Authenticated platform client and shared request plumbing.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::catalog::CatalogClient;
use crate::config::ConfigClient;
use crate::error::{ClientError, ClientResult};
use crate::install::InstallClient;
use crate::lock::LockClient;
use crate::profile::ClientConfig;
use crate::role::RoleClient;
use crate::user::UserClient;

pub(crate) const HEADER_SESSION: &str = "x-bd-session";
pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
const LOGIN_PATH: &str = "/api/v1/login";

/// Authenticated connection to a platform API endpoint.
///
/// Created once via [`PlatformClient::connect`] and reused for every request;
/// the session token captured at login rides along in the `x-bd-session`
/// header.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: Client,
    base_url: Url,
    session_href: String,
}

impl PlatformClient {
    /// Authenticate against the platform and return a ready-to-use client.
    ///
    /// Issues `POST /api/v1/login` with the profile credentials and stores
    /// the session href from the `location` response header.
    pub async fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url()?;

        if !config.verify_ssl && config.warn_ssl {
            tracing::warn!(host = %config.api_host, "TLS certificate verification is disabled");
        }

        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(&Uuid::new_v4().to_string())
            .map_err(|_| ClientError::config("request id contains invalid characters"))?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .default_headers(default_headers)
            .build()
            .map_err(|err| ClientError::config(format!("failed to build HTTP client: {err}")))?;

        let login_url = join(&base_url, LOGIN_PATH)?;
        let response = http
            .post(login_url)
            .json(&serde_json::json!({
                "name": config.username,
                "password": config.password,
            }))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: LOGIN_PATH.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::LoginFailed { status });
        }

        let session_href = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(ClientError::MissingSessionLocation)?;

        tracing::debug!(session = %session_href, "platform session created");

        Ok(Self {
            http,
            base_url,
            session_href,
        })
    }

    /// Session href captured at login (`/api/v1/session/<id>`).
    #[must_use]
    pub fn session_href(&self) -> &str {
        &self.session_href
    }

    /// Catalog accessor (`/api/v1/catalog`).
    #[must_use]
    pub const fn catalog(&self) -> CatalogClient<'_> {
        CatalogClient::new(self)
    }

    /// User accessor (`/api/v1/user`).
    #[must_use]
    pub const fn user(&self) -> UserClient<'_> {
        UserClient::new(self)
    }

    /// Role accessor (`/api/v1/role`).
    #[must_use]
    pub const fn role(&self) -> RoleClient<'_> {
        RoleClient::new(self)
    }

    /// Lock accessor (`/api/v1/lock`).
    #[must_use]
    pub const fn lock(&self) -> LockClient<'_> {
        LockClient::new(self)
    }

    /// Install accessor (`/api/v1/install`).
    #[must_use]
    pub const fn install(&self) -> InstallClient<'_> {
        InstallClient::new(self)
    }

    /// Platform configuration accessor (`/api/v2/config`).
    #[must_use]
    pub const fn config(&self) -> ConfigClient<'_> {
        ConfigClient::new(self)
    }

    /// Issue one request against the platform, stamping the session header.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ClientResult<Response> {
        let url = join(&self.base_url, path)?;
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(HEADER_SESSION, &self.session_href);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: path.to_string(),
                source,
            })?;
        tracing::debug!(%method, %url, status = %response.status(), "platform request");
        Ok(response)
    }

    /// Fetch a JSON document from the given path.
    pub(crate) async fn get_json(&self, path: &str, kind: &'static str) -> ClientResult<Value> {
        let response = self.send(Method::GET, path, None).await?;
        let response = expect_success(response, kind, path).await?;
        response
            .json()
            .await
            .map_err(|source| ClientError::Transport {
                operation: path.to_string(),
                source,
            })
    }
}

/// Reject non-success responses, surfacing 404 as a typed not-found.
pub(crate) async fn expect_success(
    response: Response,
    kind: &'static str,
    id: &str,
) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound {
            kind,
            id: id.to_string(),
        });
    }
    let operation = id.to_string();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus {
        operation,
        status,
        body,
    })
}

fn join(base: &Url, path: &str) -> ClientResult<Url> {
    base.join(path)
        .map_err(|err| ClientError::config(format!("invalid request path '{path}': {err}")))
}

/// Helper shared by accessors: duration must be strictly positive.
pub(crate) fn ensure_positive(value: Duration, name: &str) -> ClientResult<()> {
    if value.is_zero() {
        return Err(ClientError::invalid_argument(format!(
            "'{name}' must be positive"
        )));
    }
    Ok(())
}
