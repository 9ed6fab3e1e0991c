use crate::icon::{ICON_SIZE, generate_level_icon};
use crate::refresh::{ReadingSource, Refresher};
use crate::state::{DisplayState, LOADING_DETAIL};
use tauri::menu::{MenuBuilder, MenuItem, MenuItemBuilder};
use tauri::tray::TrayIconBuilder;
use tauri::{App, AppHandle};
use tauri_plugin_opener::OpenerExt;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub const TRAY_ID: &str = "main";

const MENU_HEADER: &str = "header";
const MENU_DETAIL: &str = "detail";
const MENU_REFRESH: &str = "refresh";
const MENU_DASHBOARD: &str = "dashboard";
const MENU_QUIT: &str = "quit";

const HEADER_TEXT: &str = "Tashkent Air Quality";

fn level_icon(state: &DisplayState) -> tauri::image::Image<'static> {
    tauri::image::Image::new_owned(generate_level_icon(state.level), ICON_SIZE, ICON_SIZE)
}

/// Build the tray icon and its menu. Returns the detail line so the renderer can update it.
pub fn setup_tray<S: ReadingSource>(
    app: &App,
    refresher: Refresher<S>,
    dashboard_url: String,
) -> Result<MenuItem<tauri::Wry>, Box<dyn std::error::Error>> {
    let header_item = MenuItemBuilder::with_id(MENU_HEADER, HEADER_TEXT)
        .enabled(false)
        .build(app)?;
    let detail_item = MenuItemBuilder::with_id(MENU_DETAIL, LOADING_DETAIL)
        .enabled(false)
        .build(app)?;
    let refresh_item = MenuItemBuilder::with_id(MENU_REFRESH, "Refresh")
        .accelerator("CmdOrCtrl+R")
        .build(app)?;
    let dashboard_item = MenuItemBuilder::with_id(MENU_DASHBOARD, "Open Dashboard").build(app)?;
    let quit_item = MenuItemBuilder::with_id(MENU_QUIT, "Quit")
        .accelerator("CmdOrCtrl+Q")
        .build(app)?;

    let menu = MenuBuilder::new(app)
        .item(&header_item)
        .item(&detail_item)
        .separator()
        .item(&refresh_item)
        .item(&dashboard_item)
        .separator()
        .item(&quit_item)
        .build()?;

    let initial = refresher.cell().current();

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(level_icon(&initial))
        .icon_as_template(false)
        .title(&initial.title)
        .tooltip(&initial.detail)
        .menu(&menu)
        .on_menu_event(move |app, event| match event.id.as_ref() {
            MENU_REFRESH => {
                tauri::async_runtime::spawn(refresher.begin_manual_refresh());
            }
            MENU_DASHBOARD => open_dashboard(app, &dashboard_url),
            MENU_QUIT => app.exit(0),
            _ => {}
        })
        .build(app)?;

    info!("Tray icon created successfully");

    Ok(detail_item)
}

/// Open the dashboard in the default browser. Failures are logged only.
pub fn open_dashboard(app: &AppHandle, url: &str) {
    info!(url, "Opening dashboard");
    if let Err(e) = app.opener().open_url(url, None::<&str>) {
        error!("Failed to open dashboard: {}", e);
    }
}

/// Push a display state into the tray title, tooltip, icon, and detail line
pub fn apply_display_state(
    app: &AppHandle,
    detail_item: &MenuItem<tauri::Wry>,
    state: &DisplayState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tray = app.tray_by_id(TRAY_ID).ok_or("Tray not found")?;

    tray.set_title(Some(&state.title))?;
    tray.set_tooltip(Some(&state.detail))?;
    tray.set_icon(Some(level_icon(state)))?;
    detail_item.set_text(&state.detail)?;

    Ok(())
}

/// The only code that writes to the tray. Applies every new [`DisplayState`] until cancelled.
pub async fn render_display_updates(
    app: AppHandle,
    detail_item: MenuItem<tauri::Wry>,
    mut rx: watch::Receiver<DisplayState>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    // All senders dropped, nothing more will arrive
                    break;
                }
            }
        }

        let state = rx.borrow_and_update().clone();
        debug!(title = %state.title, detail = %state.detail, "Rendering display state");

        if let Err(e) = apply_display_state(&app, &detail_item, &state) {
            error!("Failed to update tray: {}", e);
        }
    }

    debug!("Tray renderer stopped");
}
