//! SubscriptionBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, trace, warn};

use SubscriptionBot::{
    config::{LoggingConfig, Settings},
    database::Database,
    handlers,
    middleware::AdminFilter,
    models::SCHEMA,
    state::{self, ChatStorage},
    utils::{errors::Result, logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so settings parse errors are visible
    let logging_config = LoggingConfig::load()?;
    let _log_guard = logging::init_logging(&logging_config)?;

    info!("Starting {}...", SubscriptionBot::info());

    let settings = Settings::load()?;
    if let Err(e) = settings.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e);
    }

    let methods: Vec<String> = settings
        .payment
        .enabled_methods()
        .iter()
        .map(ToString::to_string)
        .collect();
    info!(payment_methods = ?methods, admins = settings.telegram.admin_ids.len(), "Configuration loaded");

    let bot = Bot::new(&settings.telegram.token);
    let storage = state::new_storage();
    let database = Database::new(&settings.database)?;

    // The pool is released on every exit path, including failed init
    let result = run(bot, storage, &database, &settings).await;
    database.close().await;

    match &result {
        Ok(()) => info!("SubscriptionBot has been shut down."),
        Err(e) => error!(error = %e, "SubscriptionBot stopped with an error"),
    }
    result
}

/// Create the schema, then poll for updates until a stop signal arrives
/// or the polling task ends on its own
async fn run(
    bot: Bot,
    storage: Arc<ChatStorage>,
    database: &Database,
    settings: &Settings,
) -> Result<()> {
    info!("Initializing database schema...");
    database.init(SCHEMA).await?;

    let admin_filter = AdminFilter::new(settings.telegram.admin_ids.iter().copied());
    if admin_filter.is_empty() {
        warn!("No admin IDs configured, admin-only routes will ignore every update");
    }

    let mut dispatcher = Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![admin_filter, settings.access, storage])
        .default_handler(|upd| async move {
            trace!(update_id = ?upd.id, "Update not handled");
        })
        .build();

    let shutdown = dispatcher.shutdown_token();
    let mut polling = tokio::spawn(async move { dispatcher.dispatch().await });

    info!("Starting bot with polling mode...");

    tokio::select! {
        joined = &mut polling => {
            warn!("Polling stopped without a shutdown signal");
            return joined.map_err(Into::into);
        }
        _ = wait_for_shutdown() => {
            info!("Shutdown signal received, stopping dispatcher");
        }
    }

    match shutdown.shutdown() {
        Ok(stopped) => stopped.await,
        Err(_) => {
            // not running yet; there is nothing to drain
            polling.abort();
        }
    }

    match polling.await {
        Ok(()) => Ok(()),
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
