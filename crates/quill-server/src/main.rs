use std::sync::Arc;

use clap::Parser;

use quill_llm::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use quill_llm::OpenAiClient;
use quill_server::logging::init_logging;
use quill_server::server::{run_server, ServerConfig};
use quill_server::state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "quill-server")]
#[command(about = "Quill AI Text Tools HTTP Server")]
#[command(version)]
struct Cli {
    /// API key for the completion endpoint (required)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Chat completions API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Log level (overrides RUST_LOG)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    tracing::info!("Starting Quill Server on port {}", cli.port);
    tracing::info!("  Base URL: {}", cli.base_url);
    tracing::info!("  Model: {}", cli.model);

    let client = OpenAiClient::new(cli.api_key)
        .with_base_url(cli.base_url)
        .with_model(cli.model);

    let state = AppState::new(Arc::new(client));

    let config = ServerConfig {
        port: cli.port,
        ..Default::default()
    };

    run_server(state, config).await
}
