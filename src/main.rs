use navigate_icm20649::{init_tracing, run_poller};
use tracing::error;

#[tokio::main]
async fn main() {
    // RUST_LOG=debug for raw samples and bank switches, RUST_LOG=info for normal
    init_tracing();

    // Load configuration from CONFIG_PATH or default
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());

    if let Err(e) = run_poller(&config_path).await {
        error!("[error] {}", e);
        std::process::exit(1);
    }
}
