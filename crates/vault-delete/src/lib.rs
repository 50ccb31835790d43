//! vault-delete library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! - [`application`] – the delete-file plugin, written against host ports.
//! - [`infrastructure`] – a local-directory host implementing those ports.

pub mod application;
pub mod infrastructure;
