//! Show snippet use case

use crate::domain::Snippet;
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Fetch one of the owner's snippets by id.
pub fn show_snippet(store: &impl SnippetStore, owner_id: &str, id: &str) -> Result<Snippet> {
    store.get(id, owner_id)
}
