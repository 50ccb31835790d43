//! [`Console`] adapter writing diagnostic lines through `tracing`.

use tracing::{error, info};

use crate::application::host::Console;

/// Target used for every plugin diagnostic line, so they can be filtered with
/// `RUST_LOG=vault_delete::console=info`.
pub const CONSOLE_TARGET: &str = "vault_delete::console";

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, line: &str) {
        info!(target: CONSOLE_TARGET, "{line}");
    }

    fn error(&self, line: &str) {
        error!(target: CONSOLE_TARGET, "{line}");
    }
}
