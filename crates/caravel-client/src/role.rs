//! Role accessor: list and fetch platform roles.

use crate::client::PlatformClient;
use crate::error::ClientResult;
use crate::resource::{Resource, ResourceDescriptor, ResourceList};

/// Descriptor for platform roles.
pub static ROLE: ResourceDescriptor = ResourceDescriptor {
    kind: "role",
    prefix: "/api/v1/role",
    embedded_key: "roles",
    default_columns: &["self_href", "label_name", "label_description"],
};

/// Accessor for the role sub-path.
#[derive(Debug, Clone, Copy)]
pub struct RoleClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> RoleClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// List platform roles.
    pub async fn list(&self) -> ClientResult<ResourceList> {
        let payload = self.client.get_json(ROLE.prefix, ROLE.kind).await?;
        Ok(ResourceList::from_payload(&ROLE, payload))
    }

    /// Fetch one role by path id.
    pub async fn get(&self, id: &str) -> ClientResult<Resource> {
        ROLE.validate_id(id)?;
        let document = self.client.get_json(id, ROLE.kind).await?;
        Ok(Resource::new(&ROLE, document))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use caravel_test_support::{mock_login, role_json};
    use httpmock::prelude::*;
    use serde_json::Value;

    use crate::client::tests::connected_client;

    #[tokio::test]
    async fn get_rejects_foreign_prefixes() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);

        let client = connected_client(&server).await?;
        let err = client.role().get("garbage").await.expect_err("prefix check");
        assert_eq!(err.to_string(), "'id' does not start with '/api/v1/role'");
        Ok(())
    }

    #[tokio::test]
    async fn get_exposes_label_attributes() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/role/1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(role_json());
        });

        let client = connected_client(&server).await?;
        let role = client.role().get("/api/v1/role/1").await?;
        assert_eq!(role.id(), Some("/api/v1/role/1"));
        assert_eq!(
            role.attr("label_name").and_then(Value::as_str),
            Some("Site Admin")
        );
        assert_eq!(
            role.attr("label.description").and_then(Value::as_str),
            Some("Role for Site Admin")
        );
        Ok(())
    }
}
