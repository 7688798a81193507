use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use xuetang_app::app::api::routes;
use xuetang_app::config::ConfigHandler;
use xuetang_app::service_handler::ScheduleServiceHandler;
use xuetang_core::config::load_config;
use xuetang_service::schedule::{InMemorySessionStore, NoopCalendarSync, ScheduleService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Xuetang schedule server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let service = ScheduleService::from_config(
        &config.schedule,
        Arc::new(InMemorySessionStore::new()),
        Arc::new(NoopCalendarSync),
    )?;

    tracing::info!(
        timezone = %config.schedule.timezone,
        max_occurrences = config.schedule.max_occurrences,
        "Schedule service ready"
    );

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(ScheduleServiceHandler {
            service: Arc::new(service),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr} ({})", config.server.origin());

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
