use sk_server::{
    AppState, Cli, Command, build_router, logger, seed::seed_default_user,
    sweeper::spawn_rate_limit_sweeper,
};

use sk_auth::{LoginRateLimiter, TokenService};
use sk_config::Config;
use sk_db::UserRepository;

use std::error::Error;
use std::net::SocketAddr;

use clap::Parser;
use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting sk-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = sk_db::connect(&database_path, config.database.max_connections).await?;

    let result = match cli.command() {
        Command::Serve => serve(&config, pool.clone()).await,
        Command::Migrate { seed } => migrate(&pool, seed).await,
        Command::Seed => migrate(&pool, true).await,
        Command::Rollback => sk_db::rollback_migrations(&pool)
            .await
            .map_err(Into::into),
    };

    pool.close().await;

    if let Err(ref e) = result {
        error!("{}", e);
    }
    result
}

async fn migrate(pool: &SqlitePool, seed: bool) -> Result<(), Box<dyn Error>> {
    sk_db::run_migrations(pool).await?;

    if seed {
        seed_default_user(&UserRepository::new(pool.clone())).await?;
    }

    Ok(())
}

async fn serve(config: &Config, pool: SqlitePool) -> Result<(), Box<dyn Error>> {
    info!("Running database migrations...");
    sk_db::run_migrations(&pool).await?;

    let secret = config.auth.require_jwt_secret()?;
    let tokens = TokenService::with_hs256(secret.as_bytes(), config.auth.token_ttl());
    info!(
        "JWT: HS256 tokens, ttl {}s",
        config.auth.token_ttl().as_secs()
    );

    let login_limiter = LoginRateLimiter::new(sk_auth::RateLimitConfig {
        max_attempts: config.rate_limit.max_attempts,
        window: config.rate_limit.window(),
    });

    let mut state = AppState::new(pool, tokens, login_limiter, config.pagination.clone());

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_prometheus(handle),
        Err(e) => warn!("Prometheus recorder not installed: {}", e),
    }

    let sweeper = config.rate_limit.sweep_interval().map(|every| {
        info!("Rate limit sweep every {}s", every.as_secs());
        spawn_rate_limit_sweeper(state.login_limiter.clone(), every, state.metrics.clone())
    });

    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
