//! The note store façade: UI actions in, backend calls out.

use crate::{NewNote, Note, NoteChanges, NotesBackend, Result};
use chrono::Utc;

/// Thin façade translating the four note operations into backend calls.
///
/// The backend is injected at construction, so the remote service is an
/// explicit collaborator of whoever builds the store — there is no shared
/// module-level connection handle.
///
/// Mutating operations signal failure as a plain `bool`: any backend error
/// is logged here and reported to the caller as `false`, with no retry and
/// no distinction between failure kinds. `list` propagates its error so the
/// presentation layer can show a retry prompt.
pub struct NoteStore {
    backend: Box<dyn NotesBackend>,
}

impl NoteStore {
    /// Creates a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn NotesBackend>) -> Self {
        Self { backend }
    }

    /// Inserts a new note with both timestamps set to the current time.
    pub fn add(&self, content: &str, tags: &[String]) -> bool {
        let now = Utc::now();
        let row = NewNote {
            content: content.to_string(),
            tags: tags.to_vec(),
            created_at: now,
            updated_at: now,
        };
        match self.backend.insert(&row) {
            Ok(_) => true,
            Err(e) => {
                log::error!("failed to add note: {e}");
                false
            }
        }
    }

    /// Replaces content and tags of the note matching `id` and refreshes
    /// `updated_at`. Last writer wins; there is no concurrency check.
    pub fn update(&self, id: i64, content: &str, tags: &[String]) -> bool {
        let changes = NoteChanges {
            content: content.to_string(),
            tags: tags.to_vec(),
            updated_at: Utc::now(),
        };
        match self.backend.update(id, &changes) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to update note {id}: {e}");
                false
            }
        }
    }

    /// Hard-deletes the note matching `id`.
    pub fn delete(&self, id: i64) -> bool {
        match self.backend.delete(id) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to delete note {id}: {e}");
                false
            }
        }
    }

    /// Lists notes, newest first.
    ///
    /// With a blank (or all-whitespace) query the backend pages the result
    /// itself. With a non-blank query the whole ordered set is fetched and
    /// filtered here by case-insensitive substring match on content or any
    /// tag; `offset`/`limit` are then applied to the filtered sequence.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure unchanged.
    pub fn list(&self, query: &str, offset: u32, limit: u32) -> Result<Vec<Note>> {
        let query = query.trim();
        if query.is_empty() {
            return self.backend.select_page(offset, limit);
        }

        let needle = query.to_lowercase();
        let notes = self.backend.select_all()?;
        Ok(notes
            .into_iter()
            .filter(|note| note.matches(&needle))
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TideNotesError;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Backend fake with the same observable contract as the remote table:
    /// ids assigned on insert, selection ordered by `created_at` descending.
    #[derive(Default)]
    struct InMemoryBackend {
        rows: Mutex<Vec<Note>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryBackend {
        fn ordered_rows(&self) -> Vec<Note> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
            rows
        }
    }

    impl NotesBackend for InMemoryBackend {
        fn insert(&self, row: &NewNote) -> Result<Note> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let note = Note {
                id: *next_id,
                content: row.content.clone(),
                tags: row.tags.clone(),
                created_at: row.created_at,
                updated_at: row.updated_at,
            };
            self.rows.lock().unwrap().push(note.clone());
            Ok(note)
        }

        fn update(&self, id: i64, changes: &NoteChanges) -> Result<()> {
            for note in self.rows.lock().unwrap().iter_mut() {
                if note.id == id {
                    note.content = changes.content.clone();
                    note.tags = changes.tags.clone();
                    note.updated_at = changes.updated_at;
                }
            }
            Ok(())
        }

        fn delete(&self, id: i64) -> Result<()> {
            self.rows.lock().unwrap().retain(|note| note.id != id);
            Ok(())
        }

        fn select_page(&self, offset: u32, limit: u32) -> Result<Vec<Note>> {
            Ok(self
                .ordered_rows()
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }

        fn select_all(&self) -> Result<Vec<Note>> {
            Ok(self.ordered_rows())
        }
    }

    /// Backend fake where every call fails.
    struct FailingBackend;

    impl NotesBackend for FailingBackend {
        fn insert(&self, _row: &NewNote) -> Result<Note> {
            Err(down())
        }
        fn update(&self, _id: i64, _changes: &NoteChanges) -> Result<()> {
            Err(down())
        }
        fn delete(&self, _id: i64) -> Result<()> {
            Err(down())
        }
        fn select_page(&self, _offset: u32, _limit: u32) -> Result<Vec<Note>> {
            Err(down())
        }
        fn select_all(&self) -> Result<Vec<Note>> {
            Err(down())
        }
    }

    fn down() -> TideNotesError {
        TideNotesError::Backend {
            status: 503,
            body: "service unavailable".to_string(),
        }
    }

    fn store() -> NoteStore {
        NoteStore::new(Box::<InMemoryBackend>::default())
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_add_then_list_includes_note_with_tags() {
        let store = store();
        assert!(store.add("Buy milk", &crate::parse_tags("shopping, home")));

        let notes = store.list("", 0, 10).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "Buy milk");
        assert_eq!(notes[0].tags, vec!["shopping", "home"]);
        assert_eq!(notes[0].created_at, notes[0].updated_at);
    }

    #[test]
    fn test_update_replaces_content_and_refreshes_updated_at() {
        let store = store();
        assert!(store.add("draft", &tags(&["old"])));
        let before = store.list("", 0, 10).unwrap().remove(0);

        // Utc::now() has sub-millisecond resolution, but leave no room for a
        // tie on coarse clocks.
        std::thread::sleep(Duration::from_millis(2));
        assert!(store.update(before.id, "final", &tags(&["new"])));

        let after = store.list("", 0, 10).unwrap().remove(0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.content, "final");
        assert_eq!(after.tags, vec!["new"]);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn test_delete_removes_note() {
        let store = store();
        assert!(store.add("keep", &[]));
        assert!(store.add("drop", &[]));
        let doomed = store
            .list("", 0, 10)
            .unwrap()
            .into_iter()
            .find(|n| n.content == "drop")
            .unwrap();

        assert!(store.delete(doomed.id));

        let remaining = store.list("", 0, 10).unwrap();
        assert!(remaining.iter().all(|n| n.id != doomed.id));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn test_blank_query_pages_newest_first() {
        let store = store();
        for i in 0..5 {
            assert!(store.add(&format!("note {i}"), &[]));
        }

        let first_page = store.list("", 0, 2).unwrap();
        let second_page = store.list("  ", 2, 2).unwrap();
        assert_eq!(first_page.len(), 2);
        assert_eq!(second_page.len(), 2);
        assert_eq!(first_page[0].content, "note 4");
        assert_eq!(second_page[0].content, "note 2");
    }

    #[test]
    fn test_search_matches_content_and_tags_case_insensitively() {
        let store = store();
        assert!(store.add("Call the FOOd bank", &[]));
        assert!(store.add("unrelated", &tags(&["Foo"])));
        assert!(store.add("nothing here", &tags(&["bar"])));

        let hits = store.list("foo", 0, 10).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|n| n.matches("foo")));
    }

    #[test]
    fn test_search_applies_offset_and_limit_after_filtering() {
        let store = store();
        for i in 0..4 {
            assert!(store.add(&format!("project {i}"), &[]));
        }
        assert!(store.add("something else", &[]));

        let page = store.list("project", 1, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].content, "project 2");
        assert_eq!(page[1].content, "project 1");
    }

    #[test]
    fn test_mutations_report_false_on_backend_failure() {
        let store = NoteStore::new(Box::new(FailingBackend));
        assert!(!store.add("content", &[]));
        assert!(!store.update(1, "content", &[]));
        assert!(!store.delete(1));
    }

    #[test]
    fn test_list_propagates_backend_failure() {
        let store = NoteStore::new(Box::new(FailingBackend));
        assert!(store.list("", 0, 10).is_err());
        assert!(store.list("query", 0, 10).is_err());
    }
}
