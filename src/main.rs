use clap::Parser;
use roster::config::{Cli, Config, default_config_dir, default_config_path};
use roster::db::Database;
use roster::handler::AppState;
use roster::router::{RouterConfig, build_router};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // With --config, data (the database file) lives next to the config file.
    // Otherwise both live in ~/.roster/
    let (config_path, data_dir) = match args.config_path {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            (path, dir)
        }
        None => (default_config_path(), default_config_dir()),
    };

    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("failed to create data directory {:?}: {}", data_dir, e);
        std::process::exit(1);
    }

    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("roster.svc starting");

    let cfg = Config::new(&config_path.to_string_lossy()).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = ?config_path, "failed to load config file");
        std::process::exit(1);
    });
    let db = Database::new(&cfg, &data_dir).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup database");
        std::process::exit(1);
    });
    if let Err(e) = db.sync().await {
        tracing::warn!(error = %e, "initial replica sync failed, serving local copy");
    }

    let app = build_router(AppState::new(db), &RouterConfig::from_config(&cfg));

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let cancellation_token = CancellationToken::new();
    let signal_token = cancellation_token.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("ctrl+c signal received, preparing to shutdown");
                signal_token.cancel();
            }
            Err(e) => tracing::error!(error = %e, "failed to listen for ctrl+c"),
        }
    });

    tracing::info!("roster.svc running on {}", &address);
    let server = axum::serve(listener, app).with_graceful_shutdown(cancellation_token.cancelled_owned());
    if let Err(err) = server.await {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }

    tracing::info!("roster.svc going off, graceful shutdown complete");
}
