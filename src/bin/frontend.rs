use football_tournament_api::{config::FrontendConfig, error::StartupError, proxy, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Fatal: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = FrontendConfig::from_env()?;
    let client = reqwest::Client::builder().build()?;

    let app = proxy::router(&config.backend_url, client);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Frontend listening on {}, proxying /api to {}", addr, config.backend_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
