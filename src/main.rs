use football_tournament_api::{config::Config, error::StartupError, routes, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    startup::init_tracing();

    tracing::info!("Starting api server...");

    if let Err(err) = run().await {
        tracing::error!("Fatal: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let pool = startup::connect_to_database(&config).await?;

    let app = routes::router(pool.clone());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    startup::disconnect_from_database(pool).await;

    Ok(())
}
