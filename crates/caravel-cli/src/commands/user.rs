//! `caravel user` subcommands.

use caravel_client::PlatformClient;

use crate::cli::{CliResult, ListArgs, OutputFormat, UserCreateArgs};
use crate::output;

pub(crate) async fn list(
    client: &PlatformClient,
    args: &ListArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let users = client.user().list().await?;
    let rendered = if let Some(expression) = &args.query {
        output::render_query(&users.query(expression)?, format)?
    } else {
        output::render_list(&users, &args.columns, format)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) async fn get(client: &PlatformClient, id: &str, format: OutputFormat) -> CliResult<()> {
    let user = client.user().get(id).await?;
    println!("{}", output::render_document(user.json(), format)?);
    Ok(())
}

/// Create a user and echo the new resource id.
pub(crate) async fn create(client: &PlatformClient, args: &UserCreateArgs) -> CliResult<()> {
    let id = client
        .user()
        .create(&args.name, &args.password, &args.description, args.external)
        .await?;
    println!("{id}");
    Ok(())
}

pub(crate) async fn delete(client: &PlatformClient, id: &str) -> CliResult<()> {
    client.user().delete(id).await?;
    Ok(())
}
