use crate::config::AppConfig;
use crate::polling::start_polling;
use crate::refresh::{HttpReadingSource, Refresher};
use crate::state::DisplayCell;
use crate::tray::{render_display_updates, setup_tray};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::Manager;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file in repository root
    dotenvy::from_filename("../.env").ok();

    let config = AppConfig::from_env();
    info!(config = ?config, "Configuration loaded");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            // Menu bar only, no Dock icon
            #[cfg(target_os = "macos")]
            app.set_activation_policy(tauri::ActivationPolicy::Accessory);

            let cell = DisplayCell::new();
            let refresher = Refresher::new(HttpReadingSource::from_config(&config), cell.clone());

            let detail_item = setup_tray(app, refresher.clone(), config.dashboard_url.clone())?;

            // Create cancellation token for graceful shutdown
            let cancel_token = CancellationToken::new();

            // Create shutdown flag to prevent infinite exit loop
            let shutdown_started = Arc::new(AtomicBool::new(false));

            // Renderer first, so the initial fetch is not missed
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(render_display_updates(
                app_handle,
                detail_item,
                cell.subscribe(),
                cancel_token.child_token(),
            ));

            // Start background polling task
            tauri::async_runtime::spawn(start_polling(
                refresher,
                config.poll_interval(),
                cancel_token.child_token(),
            ));

            // Store state for shutdown handling
            app.manage(cancel_token);
            app.manage(shutdown_started);

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let tauri::RunEvent::ExitRequested { api, .. } = event {
                // Check if shutdown has already been initiated
                let shutdown_flag = app_handle.state::<Arc<AtomicBool>>();

                if shutdown_flag.swap(true, Ordering::SeqCst) {
                    // Shutdown already initiated, allow exit to proceed
                    return;
                }

                info!("Exit requested, initiating graceful shutdown");

                // Prevent immediate exit to perform cleanup
                api.prevent_exit();

                // Stop polling and rendering
                let token = app_handle.state::<CancellationToken>();
                token.cancel();

                info!("Graceful shutdown complete");

                // Trigger exit again - this time the flag is set so it won't prevent
                app_handle.exit(0);
            }
        });
}
