//! proxy-trust
//!
//! Runs at container startup, before the application serves traffic.
//!
//! ```text
//!   environment ──▶ loader ──▶ ProxyTrustConfig ──┬──▶ check   (log summary)
//!                                                 ├──▶ render  (settings file)
//!                                                 └──▶ headers (effective names)
//! ```
//!
//! A missing address list with trust enabled aborts with a non-zero exit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use proxy_trust::config::{load_from_process_env, render, ProxyTrustConfig, SettingsFormat};
use proxy_trust::observability::logging::init_logging;
use proxy_trust::security::ForwardedHeaders;

#[derive(Parser)]
#[command(name = "proxy-trust")]
#[command(about = "Load reverse proxy trust settings from the environment", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "info", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the settings, logging a summary
    Check,
    /// Write the generated settings file
    Render {
        #[arg(short, long, value_enum, default_value_t = SettingsFormat::Toml)]
        format: SettingsFormat,

        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the effective forwarded header names as JSON
    Headers,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = match load_from_process_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Reverse proxy configuration rejected");
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Check => log_summary(&config),
        Commands::Render { format, output } => {
            let content = render(&config, format)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    tracing::info!(path = %path.display(), ?format, "Settings file written");
                }
                None => print!("{}", content),
            }
        }
        Commands::Headers => {
            let headers = ForwardedHeaders::from_config(&config);
            println!("{}", serde_json::to_string_pretty(&headers)?);
        }
    }

    Ok(())
}

fn log_summary(config: &ProxyTrustConfig) {
    if !config.enabled {
        tracing::info!("Reverse proxy trust disabled");
        return;
    }

    if config.trusts_nobody() {
        tracing::warn!(
            "Reverse proxy trust enabled but every address entry was empty; no proxy will be trusted"
        );
    }

    let headers = ForwardedHeaders::from_config(config);
    tracing::info!(
        addresses = ?config.addresses(),
        client_ip_header = %headers.client_ip,
        proto_header = %headers.proto,
        host_header = %headers.host,
        port_header = %headers.port,
        forwarded_header = %headers.forwarded,
        overrides = config.override_count(),
        "Reverse proxy trust enabled"
    );
}
