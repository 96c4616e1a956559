// # contactd - Contact Book Daemon
//
// The contactd daemon is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing the runtime
// 3. Opening the contact store
// 4. Serving the web application until a shutdown signal arrives
//
// All contact behavior (storage, validation, flash notices) lives in
// contact-core; the routes live in the contactd library crate. This file
// only wires them together.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `CONTACTD_BIND`: Address to listen on (default: 0.0.0.0:3000)
// - `CONTACTD_STORE_TYPE`: Type of contact store (file, memory; default: file)
// - `CONTACTD_STORE_PATH`: Path to the collection file when the store type
//   is file (default: data/contacts.json)
// - `CONTACTD_FLASH_TTL_SECS`: How many seconds an uncollected flash notice
//   stays claimable (default: 60)
// - `CONTACTD_LOG_LEVEL`: Log level (trace, debug, info, warn, error;
//   default: info)
//
// ## Example
//
// ```bash
// export CONTACTD_BIND=127.0.0.1:3000
// export CONTACTD_STORE_TYPE=file
// export CONTACTD_STORE_PATH=/var/lib/contactd/contacts.json
//
// contactd
// ```

use std::env;
use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Result;
use contact_core::{AppConfig, FlashConfig, FlashStore, StoreConfig};
use tokio::net::TcpListener;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum ContactdExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<ContactdExitCode> for ExitCode {
    fn from(code: ContactdExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    bind: String,
    store_type: String,
    store_path: String,
    flash_ttl_secs: u64,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self {
            bind: env::var("CONTACTD_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            store_type: env::var("CONTACTD_STORE_TYPE").unwrap_or_else(|_| "file".to_string()),
            store_path: env::var("CONTACTD_STORE_PATH")
                .unwrap_or_else(|_| contact_core::config::DEFAULT_STORE_PATH.to_string()),
            flash_ttl_secs: env::var("CONTACTD_FLASH_TTL_SECS")
                .ok()
                .map(|s| s.parse().unwrap_or(60))
                .unwrap_or(60),
            log_level: env::var("CONTACTD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // Validate bind address
        if self.bind.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "CONTACTD_BIND '{}' is not a valid socket address. \
                Set it via: export CONTACTD_BIND=0.0.0.0:3000",
                self.bind
            );
        }

        // Validate store type
        match self.store_type.as_str() {
            "file" | "memory" => {}
            _ => anyhow::bail!(
                "CONTACTD_STORE_TYPE '{}' is not supported. \
                Supported types: file, memory",
                self.store_type
            ),
        }

        // Validate store path for file store. The missing parent directory
        // case is fine: the store creates it on first use.
        if self.store_type == "file" && self.store_path.is_empty() {
            anyhow::bail!(
                "CONTACTD_STORE_PATH cannot be empty when CONTACTD_STORE_TYPE=file. \
                Set it via: export CONTACTD_STORE_PATH=/var/lib/contactd/contacts.json"
            );
        }

        // Validate flash TTL range
        if !(1..=3600).contains(&self.flash_ttl_secs) {
            anyhow::bail!(
                "CONTACTD_FLASH_TTL_SECS must be between 1 and 3600 seconds. Got: {}",
                self.flash_ttl_secs
            );
        }

        // Validate log level
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "CONTACTD_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = Config::from_env();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return ContactdExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ContactdExitCode::ConfigError.into();
    }

    info!("Starting contactd daemon");

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return ContactdExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_server(config).await {
            error!("Server error: {}", e);
            ContactdExitCode::RuntimeError
        } else {
            ContactdExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Open the store, build the router, and serve until a signal arrives
async fn run_server(config: Config) -> Result<()> {
    let app_config = AppConfig {
        store: match config.store_type.as_str() {
            "memory" => StoreConfig::Memory,
            _ => StoreConfig::File {
                path: config.store_path.clone(),
            },
        },
        flash: FlashConfig {
            ttl_secs: config.flash_ttl_secs,
        },
    };
    app_config.validate()?;

    let store = contact_core::store::open(&app_config.store).await?;
    let flash = FlashStore::new(&app_config.flash);
    info!("Contact store ready: {}", app_config.store.type_name());

    let app = contactd::build_router(contactd::AppState::new(store, flash));

    let addr: SocketAddr = config.bind.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("contactd listening on {}", addr);

    // Register signal handlers before serving so registration failures
    // surface as startup errors
    #[cfg(unix)]
    let shutdown = {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        async move {
            tokio::select! {
                _ = sigterm.recv() => info!("Received SIGTERM"),
                _ = sigint.recv() => info!("Received SIGINT"),
            }
        }
    };

    #[cfg(not(unix))]
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received CTRL-C");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown.await;
            info!("Shutting down daemon");
        })
        .await?;

    info!("contactd stopped");
    Ok(())
}
