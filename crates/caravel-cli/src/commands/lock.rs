//! `caravel lock` subcommands.

use std::time::Duration;

use caravel_client::PlatformClient;

use crate::cli::{CliResult, LockDeleteAllArgs, OutputFormat};
use crate::output;

pub(crate) async fn list(client: &PlatformClient, format: OutputFormat) -> CliResult<()> {
    let status = client.lock().status().await?;
    println!("{}", output::render_document(status.json(), format)?);
    Ok(())
}

/// Create an external lock and echo the new resource id.
pub(crate) async fn create(client: &PlatformClient, reason: &str) -> CliResult<()> {
    let id = client.lock().create(reason).await?;
    println!("{id}");
    Ok(())
}

pub(crate) async fn delete(client: &PlatformClient, id: &str) -> CliResult<()> {
    client.lock().delete(id).await?;
    Ok(())
}

pub(crate) async fn delete_all(
    client: &PlatformClient,
    args: &LockDeleteAllArgs,
) -> CliResult<()> {
    let timeout = Duration::from_secs(args.timeout_secs);
    let interval = args.poll_interval_secs.map(Duration::from_secs);
    client.lock().delete_all(timeout, interval).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use caravel_client::ClientConfig;
    use caravel_test_support::{lock_status_json, mock_login};
    use httpmock::prelude::*;

    async fn connected(server: &MockServer) -> Result<PlatformClient> {
        mock_login(server);
        let config = ClientConfig {
            api_host: server.host(),
            api_port: server.port(),
            use_ssl: false,
            username: "admin".to_string(),
            password: "admin123".to_string(),
            ..ClientConfig::default()
        };
        Ok(PlatformClient::connect(&config).await?)
    }

    #[tokio::test]
    async fn list_renders_the_status_document() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = connected(&server).await?;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/lock");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(lock_status_json(&[], &["/api/v1/lock/2"]));
        });

        list(&client, OutputFormat::Json)
            .await
            .map_err(|err| anyhow::anyhow!(err.display_message()))?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_clears_external_locks() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = connected(&server).await?;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/lock");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(lock_status_json(&[], &["/api/v1/lock/2"]));
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/lock/2");
            then.status(204);
        });

        let args = LockDeleteAllArgs {
            timeout_secs: 5,
            poll_interval_secs: None,
        };
        delete_all(&client, &args)
            .await
            .map_err(|err| anyhow::anyhow!(err.display_message()))?;
        delete_mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_rejects_zero_timeouts() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = connected(&server).await?;

        let args = LockDeleteAllArgs {
            timeout_secs: 0,
            poll_interval_secs: None,
        };
        let err = delete_all(&client, &args).await.expect_err("zero timeout");
        assert!(err.display_message().contains("timeout"));
        Ok(())
    }
}
