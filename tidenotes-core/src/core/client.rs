//! HTTP client for the hosted notes backend.
//!
//! The backend is a Postgres table exposed through a PostgREST-style REST
//! interface: filters ride in the query string (`id=eq.7`), ordering and
//! paging are the `order`/`offset`/`limit` parameters, and inserts return
//! the created row when asked to with `Prefer: return=representation`.
//!
//! [`NotesBackend`] is the seam between the store façade and the wire; the
//! façade only ever sees this trait, so tests can substitute an in-memory
//! implementation and the desktop shell injects a [`RestBackend`].

use crate::{BackendConfig, NewNote, Note, NoteChanges, Result, TideNotesError};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;

/// The five operations the remote data service is consumed as.
///
/// One blocking call per operation; no retry, no caching. Implementations
/// must be thread-safe so the desktop shell can hold one store in managed
/// state and call it from any command thread.
pub trait NotesBackend: Send + Sync {
    /// Inserts `row` and returns the created note, id assigned by the backend.
    fn insert(&self, row: &NewNote) -> Result<Note>;
    /// Applies `changes` to the row matching `id`. Last writer wins.
    fn update(&self, id: i64, changes: &NoteChanges) -> Result<()>;
    /// Hard-deletes the row matching `id`.
    fn delete(&self, id: i64) -> Result<()>;
    /// Returns rows ordered by `created_at` descending within
    /// `[offset, offset + limit)`.
    fn select_page(&self, offset: u32, limit: u32) -> Result<Vec<Note>>;
    /// Returns every row, ordered by `created_at` descending.
    fn select_all(&self) -> Result<Vec<Note>>;
}

/// [`NotesBackend`] implementation speaking to the hosted REST interface.
pub struct RestBackend {
    http: Client,
    table_url: String,
    api_key: String,
}

impl RestBackend {
    /// Builds a client for the `notes` table of the configured project.
    ///
    /// # Errors
    ///
    /// Returns [`TideNotesError::Http`] if the underlying HTTP client cannot
    /// be constructed (e.g. no TLS backend available).
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            table_url: format!("{}/rest/v1/notes", config.url),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, self.table_url.as_str())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

impl NotesBackend for RestBackend {
    fn insert(&self, row: &NewNote) -> Result<Note> {
        let reply = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(row)
            .send()?;
        let mut rows: Vec<Note> = check(reply)?.json()?;
        rows.pop()
            .ok_or_else(|| TideNotesError::UnexpectedReply("insert returned no rows".to_string()))
    }

    fn update(&self, id: i64, changes: &NoteChanges) -> Result<()> {
        let reply = self
            .request(Method::PATCH)
            .query(&[("id", id_filter(id))])
            .json(changes)
            .send()?;
        check(reply)?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let reply = self
            .request(Method::DELETE)
            .query(&[("id", id_filter(id))])
            .send()?;
        check(reply)?;
        Ok(())
    }

    fn select_page(&self, offset: u32, limit: u32) -> Result<Vec<Note>> {
        let reply = self
            .request(Method::GET)
            .query(ordered_select())
            .query(&page_params(offset, limit))
            .send()?;
        Ok(check(reply)?.json()?)
    }

    fn select_all(&self) -> Result<Vec<Note>> {
        let reply = self.request(Method::GET).query(ordered_select()).send()?;
        Ok(check(reply)?.json()?)
    }
}

/// Converts a non-success reply into [`TideNotesError::Backend`].
fn check(reply: Response) -> Result<Response> {
    let status = reply.status();
    if status.is_success() {
        return Ok(reply);
    }
    let body = reply.text().unwrap_or_default();
    Err(TideNotesError::Backend {
        status: status.as_u16(),
        body,
    })
}

fn id_filter(id: i64) -> String {
    format!("eq.{id}")
}

fn ordered_select() -> &'static [(&'static str, &'static str)] {
    &[("select", "*"), ("order", "created_at.desc")]
}

fn page_params(offset: u32, limit: u32) -> [(&'static str, String); 2] {
    [("offset", offset.to_string()), ("limit", limit.to_string())]
}
