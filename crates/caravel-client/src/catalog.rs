//! Catalog accessor: list, fetch, install, and refresh catalog entries.

use reqwest::Method;
use serde_json::json;

use crate::client::{PlatformClient, expect_success};
use crate::error::ClientResult;
use crate::resource::{Resource, ResourceDescriptor, ResourceList};

/// Descriptor for catalog entries.
pub static CATALOG: ResourceDescriptor = ResourceDescriptor {
    kind: "catalog",
    prefix: "/api/v1/catalog",
    embedded_key: "independent_catalog_entries",
    default_columns: &["self_href", "label_name", "version", "state"],
};

/// Accessor for the catalog sub-path.
#[derive(Debug, Clone, Copy)]
pub struct CatalogClient<'a> {
    client: &'a PlatformClient,
}

impl<'a> CatalogClient<'a> {
    pub(crate) const fn new(client: &'a PlatformClient) -> Self {
        Self { client }
    }

    /// List independent catalog entries.
    pub async fn list(&self) -> ClientResult<ResourceList> {
        let payload = self.client.get_json(CATALOG.prefix, CATALOG.kind).await?;
        Ok(ResourceList::from_payload(&CATALOG, payload))
    }

    /// Fetch one catalog entry by path id.
    pub async fn get(&self, id: &str) -> ClientResult<Resource> {
        CATALOG.validate_id(id)?;
        let document = self.client.get_json(id, CATALOG.kind).await?;
        Ok(Resource::new(&CATALOG, document))
    }

    /// Request installation of a catalog entry.
    pub async fn install(&self, id: &str) -> ClientResult<()> {
        self.post_action(id, "install").await
    }

    /// Request a refresh of a catalog entry from its feed.
    pub async fn refresh(&self, id: &str) -> ClientResult<()> {
        self.post_action(id, "refresh").await
    }

    async fn post_action(&self, id: &str, action: &str) -> ClientResult<()> {
        CATALOG.validate_id(id)?;
        let body = json!({"action": action});
        let response = self.client.send(Method::POST, id, Some(&body)).await?;
        expect_success(response, CATALOG.kind, id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use caravel_test_support::{catalog_entry_json, catalog_list_json, mock_login};
    use httpmock::prelude::*;
    use serde_json::Value;

    use crate::client::tests::connected_client;
    use crate::error::ClientError;

    #[tokio::test]
    async fn get_rejects_ids_with_foreign_prefix() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);

        let client = connected_client(&server).await?;
        let err = client
            .catalog()
            .get("garbage")
            .await
            .expect_err("prefix check");
        assert_eq!(
            err.to_string(),
            "'id' does not start with '/api/v1/catalog'"
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_exposes_entry_attributes() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/catalog/99");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(catalog_entry_json("/api/v1/catalog/99"));
        });

        let client = connected_client(&server).await?;
        let entry = client.catalog().get("/api/v1/catalog/99").await?;

        assert_eq!(entry.id(), Some("/api/v1/catalog/99"));
        assert_eq!(
            entry.attr("distro_id").and_then(Value::as_str),
            Some("bluedata/spark240juphub7xssl")
        );
        assert_eq!(
            entry.attr("label_name").and_then(Value::as_str),
            Some("Spark240")
        );
        assert_eq!(
            entry.attr("documentation_mimetype").and_then(Value::as_str),
            Some("text/markdown")
        );
        assert_eq!(
            entry.attr("logo_checksum").and_then(Value::as_str),
            Some("1471eb59356066ed4a06130566764ea6")
        );
        assert_eq!(entry.attr("state").and_then(Value::as_str), Some("initialized"));
        Ok(())
    }

    #[tokio::test]
    async fn get_maps_404_to_not_found() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/catalog/101");
            then.status(404);
        });

        let client = connected_client(&server).await?;
        let err = client
            .catalog()
            .get("/api/v1/catalog/101")
            .await
            .expect_err("entry should be missing");
        assert_eq!(
            err.to_string(),
            "catalog not found with id: /api/v1/catalog/101"
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_collects_embedded_entries() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/catalog");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(catalog_list_json());
        });

        let client = connected_client(&server).await?;
        let entries = client.catalog().list().await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries.iter().next().and_then(Resource::self_href),
            Some("/api/v1/catalog/29")
        );
        Ok(())
    }

    #[tokio::test]
    async fn install_posts_the_install_action() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        let install = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/catalog/99")
                .json_body(serde_json::json!({"action": "install"}));
            then.status(204);
        });

        let client = connected_client(&server).await?;
        client.catalog().install("/api/v1/catalog/99").await?;
        install.assert();
        Ok(())
    }

    #[tokio::test]
    async fn refresh_posts_the_refresh_action() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        let refresh = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/catalog/99")
                .json_body(serde_json::json!({"action": "refresh"}));
            then.status(204);
        });

        let client = connected_client(&server).await?;
        client.catalog().refresh("/api/v1/catalog/99").await?;
        refresh.assert();
        Ok(())
    }

    #[tokio::test]
    async fn install_surfaces_not_found_entries() -> Result<()> {
        let server = MockServer::start_async().await;
        mock_login(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/catalog/101");
            then.status(404);
        });

        let client = connected_client(&server).await?;
        let err = client
            .catalog()
            .install("/api/v1/catalog/101")
            .await
            .expect_err("entry should be missing");
        assert!(matches!(err, ClientError::NotFound { kind: "catalog", .. }));
        Ok(())
    }
}
