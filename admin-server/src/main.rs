use admin_server::{setup_environment, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    tracing::info!("Tisorah admin server starting...");

    // 2. Configuration
    let config = Config::from_env();
    if config.admin_password.is_empty() && config.is_production() {
        anyhow::bail!("ADMIN_PASSWORD must be set in production");
    }

    // 3. Server state (backend clients, token service)
    let state = ServerState::initialize(&config);

    // 4. HTTP server
    let server = Server::with_state(config, state);
    server.run().await
}
