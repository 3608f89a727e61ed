//! Application menu construction for Tide Notes.

use tauri::{menu::*, AppHandle, Runtime};

/// Builds the application menu with File, Edit, View, and Help submenus.
///
/// # Errors
///
/// Returns [`tauri::Error`] if any menu item or submenu fails to build.
pub fn build_menu<R: Runtime>(app: &AppHandle<R>) -> Result<Menu<R>, tauri::Error> {
    let menu = MenuBuilder::new(app)
        .items(&[
            // File menu
            &SubmenuBuilder::new(app, "File")
                .items(&[
                    &PredefinedMenuItem::close_window(app, None)?,
                    &PredefinedMenuItem::quit(app, None)?,
                ])
                .build()?,

            // Edit menu
            &SubmenuBuilder::new(app, "Edit")
                .items(&[
                    &MenuItemBuilder::with_id("edit_add_note", "Add Note")
                        .accelerator("CmdOrCtrl+N")
                        .build(app)?,
                    &MenuItemBuilder::with_id("edit_find", "Find Notes...")
                        .accelerator("CmdOrCtrl+F")
                        .build(app)?,
                    &PredefinedMenuItem::separator(app)?,
                    &PredefinedMenuItem::undo(app, None)?,
                    &PredefinedMenuItem::redo(app, None)?,
                    &PredefinedMenuItem::copy(app, None)?,
                    &PredefinedMenuItem::paste(app, None)?,
                ])
                .build()?,

            // View menu
            &SubmenuBuilder::new(app, "View")
                .items(&[
                    &PredefinedMenuItem::fullscreen(app, None)?,
                    &PredefinedMenuItem::separator(app)?,
                    &MenuItemBuilder::with_id("view_refresh", "Refresh")
                        .accelerator("CmdOrCtrl+R")
                        .build(app)?,
                ])
                .build()?,

            // Help menu
            &SubmenuBuilder::new(app, "Help")
                .items(&[
                    &MenuItemBuilder::with_id("help_about", "About Tide Notes")
                        .build(app)?,
                ])
                .build()?,
        ])
        .build()?;

    Ok(menu)
}
