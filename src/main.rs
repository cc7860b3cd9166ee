//! Concierge server binary.
//!
//! Loads `AppConfig`, wires adapters into `ConciergeAppState`, and serves
//! the axum router until SIGINT/SIGTERM.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use concierge::adapters::http::{app_router, with_service_layers, ConciergeAppState};
use concierge::adapters::{
    BlandConfig, BlandDispatcher, CachedDirectorySource, CsvDirectorySource,
    InMemorySessionStore, SharedPasswordVerifier, TieredTableVerifier,
};
use concierge::config::{AccessConfig, AccessMode, AppConfig, DirectoryConfig, DispatchConfig};
use concierge::ports::{CredentialVerifier, DirectorySource};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let verifier = build_verifier(&config.access)?;
    let directory = build_directory(&config.directory);
    let dispatcher = build_dispatcher(&config.dispatch)?;

    tracing::info!(
        scheme = verifier.scheme(),
        directory = %directory.describe(),
        environment = ?config.server.environment,
        "concierge starting"
    );

    let sessions = InMemorySessionStore::with_idle_ttl(config.server.session_idle_timeout());
    let sweeper = sessions.spawn_sweeper(SESSION_SWEEP_INTERVAL);

    let state = ConciergeAppState::new(
        verifier,
        Arc::new(sessions),
        directory,
        Arc::new(dispatcher),
    )
    .with_default_callback_phone(config.dispatch.default_callback_phone.clone());

    let app = with_service_layers(app_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_verifier(access: &AccessConfig) -> Result<Arc<dyn CredentialVerifier>, Box<dyn Error>> {
    match access.mode {
        AccessMode::Password => {
            let password = access
                .password
                .clone()
                .ok_or("access.password is required in password mode")?;
            Ok(Arc::new(SharedPasswordVerifier::new(password)))
        }
        AccessMode::Tiered => {
            let table = access.access_table()?;
            tracing::debug!(tiers = table.tier_count(), "loaded access table");
            Ok(Arc::new(TieredTableVerifier::new(table)))
        }
    }
}

fn build_directory(directory: &DirectoryConfig) -> Arc<dyn DirectorySource> {
    let csv = CsvDirectorySource::new(&directory.source_path);
    if directory.cache {
        Arc::new(CachedDirectorySource::new(csv))
    } else {
        Arc::new(csv)
    }
}

fn build_dispatcher(dispatch: &DispatchConfig) -> Result<BlandDispatcher, Box<dyn Error>> {
    if !dispatch.has_usable_api_key() {
        tracing::warn!("dispatch.api_key missing or too short; calls will be refused");
    }

    let bland = BlandConfig::new(dispatch.api_key.clone())
        .with_base_url(dispatch.base_url.clone())
        .with_voice(dispatch.voice.clone())
        .with_model(dispatch.model.clone())
        .with_wait_for_greeting(dispatch.wait_for_greeting)
        .with_timeout(dispatch.timeout());

    Ok(BlandDispatcher::new(bland)?)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            tracing::warn!("could not register signal handlers; falling back to ctrl-c");
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutdown signal received");
}
