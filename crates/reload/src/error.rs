//! CLI error types.

use reload_config::ConfigError;
use reload_server::ReloadError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Server(#[from] ReloadError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
