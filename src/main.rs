use daily_checklist::calendar::{Clock, FixedClock, SystemClock};
use daily_checklist::ticker::DayTicker;
use daily_checklist::{router, AppState, Config, JsonFileStorage, Storage};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let storage = JsonFileStorage::new(&config.data_path);
    let store = storage.load().await;
    info!(
        "loaded {} day records from {}",
        store.len(),
        storage.path().display()
    );

    let clock: Arc<dyn Clock> = match config.fixed_date {
        Some(date) => {
            info!("today pinned to {date}");
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };
    let (ticker, today) = DayTicker::new(clock, config.tick);
    let ticker = ticker.spawn();

    let state = AppState::new(store, Arc::new(storage), today);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.shutdown().await;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c"),
        _ = terminate => info!("received SIGTERM"),
    }
}
