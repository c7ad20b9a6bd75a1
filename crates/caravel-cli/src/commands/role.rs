//! `caravel role` subcommands.

use caravel_client::PlatformClient;

use crate::cli::{CliResult, ListArgs, OutputFormat};
use crate::output;

pub(crate) async fn list(
    client: &PlatformClient,
    args: &ListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let roles = client.role().list().await?;
    let rendered = if let Some(expression) = &args.query {
        output::render_query(&roles.query(expression)?, format)?
    } else {
        output::render_list(&roles, &args.columns, format)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) async fn get(client: &PlatformClient, id: &str, format: OutputFormat) -> CliResult<()> {
    let role = client.role().get(id).await?;
    println!("{}", output::render_document(role.json(), format)?);
    Ok(())
}
