//! One handler module per platform resource accessor.
//!
//! Handlers print data to stdout and leave stderr to the error path in
//! `cli::run`. Mutating commands print nothing on success except where a
//! newly created resource id is worth echoing back.

pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod install;
pub(crate) mod lock;
pub(crate) mod role;
pub(crate) mod user;
