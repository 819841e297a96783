use datadog_k8s_mcp::config::ClientConfig;
use datadog_k8s_mcp::server::Server;
use dotenvy::dotenv;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // RUST_LOG wins; otherwise LOG_LEVEL, defaulting to warnings and errors only
    if env::var("RUST_LOG").is_err() {
        // TODO: Audit that the environment access only happens in single-threaded code.
        unsafe {
            env::set_var(
                "RUST_LOG",
                env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            )
        };
    }
    env_logger::init();

    let config = ClientConfig::from_env();
    if config.credentials().is_err() {
        log::warn!("DD_API_KEY or DD_APP_KEY not set; tool calls will report missing credentials");
    }

    Server::new(config).run().await?;

    Ok(())
}
