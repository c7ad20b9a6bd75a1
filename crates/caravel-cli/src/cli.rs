//! Argument parsing, profile resolution, and command dispatch.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use caravel_client::{ClientConfig, ClientError, PlatformClient};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOCK_TIMEOUT_SECS: u64 = 300;

/// Parses CLI arguments, executes the requested command, and maps any error
/// to standard error plus a non-zero exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    tracing::debug!(host = %config.api_host, port = config.api_port, "connecting");
    let client = PlatformClient::connect(&config).await?;
    let format = cli.output;

    match cli.command {
        Command::Catalog(catalog) => match catalog {
            CatalogCommand::List(args) => commands::catalog::list(&client, &args, format).await,
            CatalogCommand::Get(args) => commands::catalog::get(&client, &args.id, format).await,
            CatalogCommand::Install(args) => commands::catalog::install(&client, &args.id).await,
            CatalogCommand::Refresh(args) => commands::catalog::refresh(&client, &args.id).await,
        },
        Command::User(user) => match user {
            UserCommand::List(args) => commands::user::list(&client, &args, format).await,
            UserCommand::Get(args) => commands::user::get(&client, &args.id, format).await,
            UserCommand::Create(args) => commands::user::create(&client, &args).await,
            UserCommand::Delete(args) => commands::user::delete(&client, &args.id).await,
        },
        Command::Role(role) => match role {
            RoleCommand::List(args) => commands::role::list(&client, &args, format).await,
            RoleCommand::Get(args) => commands::role::get(&client, &args.id, format).await,
        },
        Command::Lock(lock) => match lock {
            LockCommand::List => commands::lock::list(&client, format).await,
            LockCommand::Create(args) => commands::lock::create(&client, &args.reason).await,
            LockCommand::Delete(args) => commands::lock::delete(&client, &args.id).await,
            LockCommand::DeleteAll(args) => commands::lock::delete_all(&client, &args).await,
        },
        Command::Install(install) => match install {
            InstallCommand::Get => commands::install::get(&client, format).await,
        },
        Command::Config(config_command) => match config_command {
            ConfigCommand::SetAuth(args) => commands::config::set_auth(&client, &args.file).await,
        },
    }
}

#[derive(Parser)]
#[command(
    name = "caravel",
    about = "Command-line client for the container platform management API"
)]
pub(crate) struct Cli {
    /// Connection profile file (TOML with a [default] table).
    #[arg(long, global = true, env = "CARAVEL_CONFIG_FILE")]
    config_file: Option<PathBuf>,
    #[arg(long, global = true, env = "CARAVEL_API_HOST")]
    api_host: Option<String>,
    #[arg(long, global = true, env = "CARAVEL_API_PORT")]
    api_port: Option<u16>,
    #[arg(long, global = true, env = "CARAVEL_USERNAME")]
    username: Option<String>,
    #[arg(long, global = true, env = "CARAVEL_PASSWORD")]
    password: Option<String>,
    /// Use plain http instead of https.
    #[arg(long, global = true)]
    no_ssl: bool,
    /// Skip TLS certificate verification.
    #[arg(long, global = true)]
    no_verify_ssl: bool,
    #[arg(
        long,
        global = true,
        env = "CARAVEL_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value = "table",
        help = "Select output format for commands that render data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(subcommand)]
    Catalog(CatalogCommand),
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    Role(RoleCommand),
    #[command(subcommand)]
    Lock(LockCommand),
    #[command(subcommand)]
    Install(InstallCommand),
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum CatalogCommand {
    List(ListArgs),
    Get(IdArgs),
    Install(IdArgs),
    Refresh(IdArgs),
}

#[derive(Subcommand)]
enum UserCommand {
    List(ListArgs),
    Get(IdArgs),
    Create(UserCreateArgs),
    Delete(IdArgs),
}

#[derive(Subcommand)]
enum RoleCommand {
    List(ListArgs),
    Get(IdArgs),
}

#[derive(Subcommand)]
enum LockCommand {
    List,
    Create(LockCreateArgs),
    Delete(IdArgs),
    DeleteAll(LockDeleteAllArgs),
}

#[derive(Subcommand)]
enum InstallCommand {
    Get,
}

#[derive(Subcommand)]
enum ConfigCommand {
    SetAuth(FileArgs),
}

#[derive(Args, Default)]
pub(crate) struct ListArgs {
    /// Columns to project (dotted paths or flattened aliases).
    #[arg(long, value_delimiter = ',')]
    pub(crate) columns: Vec<String>,
    /// JSONPath expression applied to the raw list payload.
    #[arg(long)]
    pub(crate) query: Option<String>,
}

#[derive(Args)]
pub(crate) struct IdArgs {
    /// Path-like resource id (e.g. /api/v1/catalog/99).
    pub(crate) id: String,
}

#[derive(Args)]
pub(crate) struct UserCreateArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) password: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// Mark the user as externally managed (LDAP/AD).
    #[arg(long)]
    pub(crate) external: bool,
}

#[derive(Args)]
pub(crate) struct LockCreateArgs {
    #[arg(long)]
    pub(crate) reason: String,
}

#[derive(Args)]
pub(crate) struct LockDeleteAllArgs {
    /// Seconds to wait for internal locks to clear.
    #[arg(long, default_value_t = DEFAULT_LOCK_TIMEOUT_SECS)]
    pub(crate) timeout_secs: u64,
    /// Seconds between lock status polls.
    #[arg(long)]
    pub(crate) poll_interval_secs: Option<u64>,
}

#[derive(Args)]
pub(crate) struct FileArgs {
    #[arg(short = 'f', long = "file")]
    pub(crate) file: PathBuf,
}

/// Output format for commands that render data.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Bordered table for lists, YAML for single documents.
    #[default]
    Table,
    /// Whitespace-separated values, one row per line.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// CLI-level error distinguishing validation from operational failures.
///
/// Both map to exit code 1: the CLI contract is that any failure prints to
/// standard error and exits non-zero, with stdout reserved for data.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        1
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidArgument { message } | ClientError::Config { message } => {
                Self::Validation(message)
            }
            other => Self::Failure(other.into()),
        }
    }
}

fn resolve_config(cli: &Cli) -> CliResult<ClientConfig> {
    let mut config = if let Some(path) = &cli.config_file {
        ClientConfig::from_config_file(path)?
    } else if let Some(path) = ClientConfig::default_config_path().filter(|path| path.is_file()) {
        ClientConfig::from_config_file(&path)?
    } else {
        ClientConfig::default()
    };

    if let Some(host) = &cli.api_host {
        config.api_host.clone_from(host);
    }
    if let Some(port) = cli.api_port {
        config.api_port = port;
    }
    if let Some(username) = &cli.username {
        config.username.clone_from(username);
    }
    if let Some(password) = &cli.password {
        config.password.clone_from(password);
    }
    if cli.no_ssl {
        config.use_ssl = false;
    }
    if cli.no_verify_ssl {
        config.verify_ssl = false;
        config.warn_ssl = true;
    }
    config.timeout = Duration::from_secs(cli.timeout);

    if config.timeout.is_zero() {
        return Err(CliError::validation("--timeout must be positive"));
    }
    if config.username.is_empty() {
        return Err(CliError::validation(
            "username is required (config file, --username, or CARAVEL_USERNAME)",
        ));
    }
    if config.password.is_empty() {
        config.password = prompt_password()?;
    }

    Ok(config)
}

fn prompt_password() -> CliResult<String> {
    if !io::stdin().is_terminal() {
        return Err(CliError::validation(
            "password is required (config file, --password, or CARAVEL_PASSWORD) when running non-interactively",
        ));
    }
    let password = rpassword::prompt_password("Password: ")
        .map_err(|err| CliError::failure(anyhow::anyhow!("failed to read password: {err}")))?;
    if password.trim().is_empty() {
        return Err(CliError::validation("password cannot be empty"));
    }
    Ok(password.trim().to_string())
}
