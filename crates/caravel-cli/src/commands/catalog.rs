//! `caravel catalog` subcommands.

use caravel_client::PlatformClient;

use crate::cli::{CliResult, ListArgs, OutputFormat};
use crate::output;

pub(crate) async fn list(
    client: &PlatformClient,
    args: &ListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let entries = client.catalog().list().await?;
    let rendered = if let Some(expression) = &args.query {
        output::render_query(&entries.query(expression)?, format)?
    } else {
        output::render_list(&entries, &args.columns, format)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) async fn get(client: &PlatformClient, id: &str, format: OutputFormat) -> CliResult<()> {
    let entry = client.catalog().get(id).await?;
    println!("{}", output::render_document(entry.json(), format)?);
    Ok(())
}

pub(crate) async fn install(client: &PlatformClient, id: &str) -> CliResult<()> {
    client.catalog().install(id).await?;
    Ok(())
}

pub(crate) async fn refresh(client: &PlatformClient, id: &str) -> CliResult<()> {
    client.catalog().refresh(id).await?;
    Ok(())
}
