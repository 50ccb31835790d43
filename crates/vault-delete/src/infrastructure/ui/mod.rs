//! Terminal adapters for the host's user-facing ports.
//!
//! The local host has no GUI, so each UI capability the plugin expects is
//! rendered as text:
//!
//! - **`notice`**         – notices become `[notice] ...` lines on stderr.
//! - **`console`**        – diagnostic lines go through `tracing`.
//! - **`settings_view`**  – the settings panel is drawn as plain text.
//! - **`command_palette`** – command ids are resolved to plugin handlers.

pub mod command_palette;
pub mod console;
pub mod notice;
pub mod settings_view;
