#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Client library for a container-platform management REST API.
//!
//! Layout:
//! - `profile.rs`: connection profiles (env vars, TOML file)
//! - `client.rs`: authenticated session and request plumbing
//! - `resource.rs`: generic resource/list model over platform JSON payloads
//! - `catalog.rs`, `user.rs`, `role.rs`, `lock.rs`, `install.rs`,
//!   `config.rs`: one accessor per REST sub-path

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod install;
pub mod lock;
pub mod profile;
pub mod resource;
pub mod role;
pub mod user;

pub use catalog::CatalogClient;
pub use client::PlatformClient;
pub use config::ConfigClient;
pub use error::{ClientError, ClientResult};
pub use install::InstallClient;
pub use lock::{DEFAULT_LOCK_TIMEOUT, LockClient, LockStatus};
pub use profile::ClientConfig;
pub use resource::{Resource, ResourceDescriptor, ResourceList};
pub use role::RoleClient;
pub use user::UserClient;
