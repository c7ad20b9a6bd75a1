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
#![allow(clippy::redundant_pub_crate)]

//! Command-line wrapper around the platform client library.
//!
//! Layout:
//! - `cli.rs`: argument parsing, profile resolution, and command dispatch
//! - `commands/`: one handler module per resource accessor
//! - `output.rs`: table/text/JSON/YAML renderers
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod output;

pub use cli::run;
