//! User accessor: list, fetch, create, and delete platform users.

use reqwest::Method;
use serde_json::json;

use crate::client::{PlatformClient, expect_success};
use crate::error::{ClientError, ClientResult};
use crate::resource::{Resource, ResourceDescriptor, ResourceList};

/// Descriptor for platform users.
pub static USER: ResourceDescriptor = ResourceDescriptor {
    kind: "user",
    prefix: "/api/v1/user",
    embedded_key: "users",
    default_columns: &["self_href", "label_name", "is_siteadmin", "is_external"],
};

/// Accessor for the user sub-path.
#[derive(Debug, Clone, Copy)]
pub struct UserClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> UserClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// List platform users.
    pub async fn list(&self) -> ClientResult<ResourceList> {
        let payload = self.client.get_json(USER.prefix, USER.kind).await?;
        Ok(ResourceList::from_payload(&USER, payload))
    }

    /// Fetch one user by path id.
    pub async fn get(&self, id: &str) -> ClientResult<Resource> {
        USER.validate_id(id)?;
        let document = self.client.get_json(id, USER.kind).await?;
        Ok(Resource::new(&USER, document))
    }

    /// Create a user and return the new resource id from the location header.
    pub async fn create(
        &self,
        name: &str,
        password: &str,
        description: &str,
        is_external: bool,
    ) -> ClientResult<String> {
        if name.trim().is_empty() {
            return Err(ClientError::invalid_argument(
                "'name' must be provided and must not be empty",
            ));
        }
        let body = json!({
            "label": {"name": name, "description": description},
            "password": password,
            "is_external": is_external,
        });
        let response = self
            .client
            .send(Method::POST, USER.prefix, Some(&body))
            .await?;
        let response = expect_success(response, USER.kind, USER.prefix).await?;
        response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::invalid_argument(
                    "user creation response did not include a location header",
                )
            })
    }

    /// Delete a user. The id must have the format `/api/v1/user/<digits>`.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        validate_user_id(id)?;
        let response = self.client.send(Method::DELETE, id, None).await?;
        expect_success(response, USER.kind, id).await?;
        Ok(())
    }
}

fn validate_user_id(id: &str) -> ClientResult<()> {
    USER.validate_id(id)?;
    let suffix = id
        .strip_prefix(USER.prefix)
        .and_then(|rest| rest.strip_prefix('/'));
    let numeric = suffix.is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));
    if !numeric {
        return Err(ClientError::invalid_argument(
            "'id' must have format '/api/v1/user/[0-9]+'",
        ));
    }
    Ok(())
}
