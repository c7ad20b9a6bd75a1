//! `caravel config` subcommands.

use std::path::Path;

use caravel_client::PlatformClient;
use serde_json::Value;

use crate::cli::{CliError, CliResult};

/// Read an identity-server settings file (YAML or JSON) and submit it.
pub(crate) async fn set_auth(client: &PlatformClient, file: &Path) -> CliResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|err| {
        CliError::validation(format!(
            "could not read settings file {}: {err}",
            file.display()
        ))
    })?;
    let settings: Value = serde_yaml::from_str(&contents).map_err(|err| {
        CliError::validation(format!(
            "settings file {} is not valid YAML or JSON: {err}",
            file.display()
        ))
    })?;
    client.config().set_auth(&settings).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use caravel_client::ClientConfig;
    use caravel_test_support::mock_login;
    use httpmock::prelude::*;
    use std::fs;
    use std::path::PathBuf;

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

    fn temp_settings(name: &str, contents: &str) -> Result<PathBuf> {
        let mut path = std::env::temp_dir();
        path.push(format!("caravel-auth-test-{}-{name}", std::process::id()));
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[tokio::test]
    async fn set_auth_submits_the_parsed_settings() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = connected(&server).await?;
        let auth = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/config/auth")
                .json_body(serde_json::json!({
                    "external_identity_server": {
                        "host": "1.1.1.1",
                        "port": 636,
                    }
                }));
            then.status(200);
        });

        let path = temp_settings(
            "auth.yaml",
            "external_identity_server:\n  host: 1.1.1.1\n  port: 636\n",
        )?;
        set_auth(&client, &path)
            .await
            .map_err(|err| anyhow::anyhow!(err.display_message()))?;
        auth.assert();
        fs::remove_file(path)?;
        Ok(())
    }

    #[tokio::test]
    async fn set_auth_reports_missing_files_as_validation_errors() -> Result<()> {
        let server = MockServer::start_async().await;
        let client = connected(&server).await?;

        let err = set_auth(&client, Path::new("/no/such/settings.yaml"))
            .await
            .expect_err("missing file");
        assert!(matches!(err, CliError::Validation(_)));
        Ok(())
    }
}
