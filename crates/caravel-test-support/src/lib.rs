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

//! Canned platform payloads and mock-server helpers shared across test suites.

pub mod fixtures;

pub use fixtures::{
    SESSION_HREF, catalog_entry_json, catalog_list_json, lock_status_json, mock_login, role_json,
    user_json, user_list_json,
};
