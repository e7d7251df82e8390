use optic_ledger::domain::{Address, SelfIdentity};
use optic_ledger::{api, config::Config, db::init_db, ChainSource, HttpChainSource, Repository};
use optic_ledger::ThresholdEstimator;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let identity = match Address::from_str(&config.self_address).and_then(SelfIdentity::new) {
        Ok(identity) => identity,
        Err(e) => {
            eprintln!("Invalid SELF_ADDRESS: {}", e);
            std::process::exit(1);
        }
    };

    let estimator = match ThresholdEstimator::from_config(&config) {
        Ok(est) => est,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let repo = Arc::new(Repository::new(pool));
    let source: Arc<dyn ChainSource> = Arc::new(HttpChainSource::from_config(&config));

    tracing::info!(
        "Running as {} (account {})",
        identity.address,
        identity.account_id
    );

    let app = api::create_router(api::AppState::new(repo, source, identity, estimator));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
