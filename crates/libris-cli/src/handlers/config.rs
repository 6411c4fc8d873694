//! Config command handler.

use libris_core::AppConfig;

/// Print the resolved configuration with secrets masked.
pub fn execute(config: &AppConfig) {
    print!("{}", config.redacted());
}
