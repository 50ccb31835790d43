//! Domain layer: pure types with no I/O.

pub mod event;
pub mod file;
pub mod settings;
