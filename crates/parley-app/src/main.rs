mod app_state;
mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use parley_ai::ChatError;
use parley_common::ConfigError;
use parley_config::ParleyConfig;
use tracing_subscriber::EnvFilter;

use app_state::{build_clients, resolve_credential, run_chat_loop, ChatApp, Sidebar};

/// Crates whose logs are enabled by `--log-level` / `[logging] level`.
const LOG_TARGETS: [&str; 3] = ["parley", "parley_ai", "parley_config"];

fn init_logging(level: &str) {
    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        match format!("{target}={level}").parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("invalid log level {level:?}: {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &cli::Args) -> Result<(ParleyConfig, Option<ConfigError>), ConfigError> {
    match parley_config::load_config(args.config.as_deref()) {
        Ok(config) => Ok((config, None)),
        // An explicit --config must load; the default location may fall back.
        Err(e) if args.config.is_some() => Err(e),
        Err(e) => Ok((ParleyConfig::default(), Some(e))),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();

    let args = cli::parse();

    let loaded = load_config(&args);
    let level = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok((config, _)) => config.logging.level.as_str().to_string(),
        Err(_) => "info".to_string(),
    });
    init_logging(&level);

    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok((config, None)) => config,
        Ok((config, Some(e))) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            config
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let sidebar = match Sidebar::from_config(&config, &args) {
        Ok(sidebar) => sidebar,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let api_key = match resolve_credential(&config) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, ChatError::MissingCredential) {
                eprintln!("Add OPENAI_API_KEY to your environment or a .env file.");
            }
            return ExitCode::FAILURE;
        }
    };

    let clients = match build_clients(&config, &api_key) {
        Ok(clients) => clients,
        Err(e) => {
            eprintln!("Error: failed to create HTTP clients: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.directory));

    let mut app = ChatApp::new(config, sidebar, clients, output_dir);

    let result = run_chat_loop(&mut app, args.transcribe.clone()).await;
    tracing::info!("Shutdown complete");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
