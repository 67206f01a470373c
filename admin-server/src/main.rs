use admin_server::{AppState, Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log)?;

    tracing::info!(environment = %config.environment, "admin-server starting");

    let state = match AppState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Error connecting to the database: {e}");
            return Err(e.into());
        }
    };

    if let Err(e) = Server::new(config, state).run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
