use std::env;
use std::sync::Arc;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uac::core::{AppState, AutocompleteConfig};
use uac::database::UserDbClient;
use uac::router::init_router;
use uac::welcome::welcome;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    dotenv::dotenv().ok();
    let run_mode = env::var("UAC_MODE").unwrap_or_else(|_| "development".into());

    let config = match AutocompleteConfig::new_config(&run_mode) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Unable to load the configuration: {}", err);
            std::process::exit(1);
        }
    };
    init_logging(&config.log_level);
    welcome(&run_mode);

    //exit application if the user directory is unreachable
    let user_directory = match UserDbClient::new(&config.user_db).await {
        Ok(client) => client,
        Err(_) => std::process::exit(1),
    };

    let url = format!("{}:{}", config.uac_url, config.uac_port);
    let app: Router = init_router(AppState {
        env: config,
        user_directory: Arc::new(user_directory),
    });

    let listener = match TcpListener::bind(&url).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Unable to bind {url}: {}", err);
            std::process::exit(1);
        }
    };
    info!("Server is listening on: {url}");
    if let Err(err) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!("Server stopped unexpectedly: {}", err);
        std::process::exit(1);
    }
    info!("Stopping user autocomplete...");
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install the Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install the SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
