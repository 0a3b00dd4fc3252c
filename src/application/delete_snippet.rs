//! Delete snippet use case

use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Remove one of the owner's snippets.
pub fn delete_snippet(store: &impl SnippetStore, owner_id: &str, id: &str) -> Result<()> {
    store.delete(id, owner_id)
}
