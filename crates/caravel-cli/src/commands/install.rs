//! `caravel install` subcommands.

use caravel_client::PlatformClient;

use crate::cli::{CliResult, OutputFormat};
use crate::output;

pub(crate) async fn get(client: &PlatformClient, format: OutputFormat) -> CliResult<()> {
    let document = client.install().get().await?;
    println!("{}", output::render_document(&document, format)?);
    Ok(())
}
