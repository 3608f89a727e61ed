//! Explicit dialog lifecycle for the note list.
//!
//! At most one dialog is open at a time; opening a dialog replaces whatever
//! was open before. The enum is serde-tagged so the frontend receives
//! `{"type": "Viewing", "note": {...}}` over the IPC channel and renders the
//! matching dialog, instead of juggling ad-hoc show/hide flags.

use crate::Note;
use serde::{Deserialize, Serialize};

/// Which dialog, if any, is currently open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModalState {
    /// No dialog open.
    #[default]
    None,
    /// The read-only note details dialog.
    Viewing { note: Note },
    /// The edit form, pre-filled with the note being edited.
    Editing { note: Note },
    /// The delete confirmation prompt for the note with this id.
    ConfirmingDelete { id: i64 },
}

impl ModalState {
    /// Opens the note details dialog.
    pub fn open_view(&mut self, note: Note) {
        *self = Self::Viewing { note };
    }

    /// Opens the edit dialog.
    pub fn open_edit(&mut self, note: Note) {
        *self = Self::Editing { note };
    }

    /// Opens the delete confirmation prompt.
    pub fn request_delete(&mut self, id: i64) {
        *self = Self::ConfirmingDelete { id };
    }

    /// Closes whatever dialog is open.
    pub fn close(&mut self) {
        *self = Self::None;
    }

    /// Returns whether any dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self != Self::None
    }
}
