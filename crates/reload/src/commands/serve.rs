//! `reload serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use reload_config::{CliSettings, Config};
use reload_server::{RELOAD_PATH, SCRIPT_PATH, ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover reload.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, `host:port` or `:port` (overrides config, default :3000).
    #[arg(short, long, env = "RELOAD_ADDR")]
    addr: Option<String>,

    /// Directory served at `/` (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Mark requests as development mode.
    #[arg(long)]
    development: bool,

    /// Mark requests as production mode.
    #[arg(long, conflicts_with = "development")]
    no_development: bool,

    /// Enable verbose output (request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let server_config = server_config_from(&config)?;
        tracing::debug!(
            config_path = ?config.config_path,
            addr = %server_config.addr,
            root = %server_config.root.display(),
            development = server_config.development,
            "Resolved server configuration"
        );

        output.info(&format!("Starting server on {}", server_config.addr));
        output.info(&format!("Serving: {}", server_config.root.display()));
        if server_config.development {
            output.info("Mode: development");
        } else {
            output.info("Mode: production");
        }
        output.highlight(&format!(
            "Hot reload: {RELOAD_PATH} (client script {SCRIPT_PATH}, token {})",
            server_config.reload.token()
        ));

        run_server(server_config).await?;

        Ok(())
    }

    /// Build CLI settings from args.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            addr: self.addr.clone(),
            root: self.root.clone(),
            development: self.resolve_development(),
        }
    }

    /// Resolve `development` from --development/--no-development flags.
    fn resolve_development(&self) -> Option<bool> {
        self.no_development
            .then_some(false)
            .or(self.development.then_some(true))
    }
}

/// Turn the loaded configuration into a server configuration.
///
/// The session token is generated here, once per process.
fn server_config_from(config: &Config) -> Result<ServerConfig, CliError> {
    Ok(ServerConfig {
        addr: config.listen_addr()?.to_string(),
        root: config.root_resolved.clone(),
        development: config.reload.development,
        reload: reload_server::Config::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    fn parse(argv: &[&str]) -> ServeArgs {
        TestCli::try_parse_from(std::iter::once("reload").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let settings = parse(&[]).cli_settings();

        assert_eq!(settings.development, None);
        assert_eq!(settings.root, None);
    }

    #[test]
    fn test_development_flags() {
        assert_eq!(parse(&["--development"]).resolve_development(), Some(true));
        assert_eq!(
            parse(&["--no-development"]).resolve_development(),
            Some(false)
        );
    }

    #[test]
    fn test_development_flags_conflict() {
        let result = TestCli::try_parse_from(["reload", "--development", "--no-development"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_addr_and_root() {
        let settings = parse(&["--addr", ":4000", "--root", "public"]).cli_settings();

        assert_eq!(settings.addr.as_deref(), Some(":4000"));
        assert_eq!(settings.root, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_server_config_expands_short_addr() {
        let mut config = Config::default();
        config.server.addr = ":3000".to_owned();

        let server_config = server_config_from(&config).unwrap();

        assert_eq!(server_config.addr, "0.0.0.0:3000");
        assert!(!server_config.development);
    }
}
