pub mod menu;

use std::sync::Mutex;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_opener::OpenerExt;
use tidenotes_core::{
    is_openable_url, link_segments, parse_tags, render_html, BackendConfig, ModalState, Note,
    NoteStore, RestBackend, Segment,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// State shared by every command: the note store and the dialog state.
///
/// The store is stateless and thread-safe on its own; the modal state is the
/// one piece of mutable UI state kept on the Rust side.
pub struct AppState {
    store: NoteStore,
    modal: Mutex<ModalState>,
}

/// Version info shown by Help → About.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub core_version: String,
}

#[tauri::command]
fn app_info() -> AppInfo {
    AppInfo {
        name: "Tide Notes".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        core_version: tidenotes_core::core_version().to_string(),
    }
}

#[tauri::command]
fn list_notes(
    state: State<AppState>,
    query: String,
    offset: u32,
    limit: u32,
) -> Result<Vec<Note>, String> {
    state
        .store
        .list(&query, offset, limit)
        .map_err(|e| e.user_message())
}

#[tauri::command]
fn add_note(state: State<AppState>, content: String, tags: String) -> bool {
    state.store.add(&content, &parse_tags(&tags))
}

#[tauri::command]
fn update_note(state: State<AppState>, id: i64, content: String, tags: String) -> bool {
    state.store.update(id, &content, &parse_tags(&tags))
}

#[tauri::command]
fn delete_note(state: State<AppState>, id: i64) -> bool {
    state.store.delete(id)
}

#[tauri::command]
fn view_note(state: State<AppState>, note: Note) -> ModalState {
    let mut modal = state.modal.lock().expect("Mutex poisoned");
    modal.open_view(note);
    modal.clone()
}

#[tauri::command]
fn edit_note(state: State<AppState>, note: Note) -> ModalState {
    let mut modal = state.modal.lock().expect("Mutex poisoned");
    modal.open_edit(note);
    modal.clone()
}

#[tauri::command]
fn confirm_delete(state: State<AppState>, id: i64) -> ModalState {
    let mut modal = state.modal.lock().expect("Mutex poisoned");
    modal.request_delete(id);
    modal.clone()
}

#[tauri::command]
fn close_dialog(state: State<AppState>) -> ModalState {
    let mut modal = state.modal.lock().expect("Mutex poisoned");
    modal.close();
    modal.clone()
}

#[tauri::command]
fn render_note_html(content: String) -> String {
    render_html(&content)
}

#[tauri::command]
fn note_segments(content: String) -> Vec<Segment> {
    link_segments(&content)
}

/// Opens a note link in the system browser. Non-http(s) URLs are refused.
#[tauri::command]
fn open_link(app: AppHandle, url: String) -> Result<(), String> {
    if !is_openable_url(&url) {
        return Err(format!("refusing to open non-http(s) link: {url}"));
    }
    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| format!("Failed to open link: {e}"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Pick up SUPABASE_URL / SUPABASE_KEY from a local .env during development.
    dotenv::dotenv().ok();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let config = BackendConfig::from_env()?;
            let backend = RestBackend::new(&config)?;
            app.manage(AppState {
                store: NoteStore::new(Box::new(backend)),
                modal: Mutex::new(ModalState::default()),
            });

            let menu = menu::build_menu(app.handle())?;
            app.set_menu(menu)?;
            Ok(())
        })
        .on_menu_event(|app, event| {
            let action = match event.id().as_ref() {
                "edit_add_note" => "add-note",
                "edit_find" => "find",
                "view_refresh" => "refresh",
                "help_about" => "about",
                _ => return, // Ignore unknown events
            };

            // The frontend owns the forms; just tell it what was picked.
            app.emit("menu-action", action).ok();
        })
        .invoke_handler(tauri::generate_handler![
            app_info,
            list_notes,
            add_note,
            update_note,
            delete_note,
            view_note,
            edit_note,
            confirm_delete,
            close_dialog,
            render_note_html,
            note_segments,
            open_link
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
