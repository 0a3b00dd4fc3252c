//! Record usage use case

use crate::domain::Snippet;
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Mark a snippet as used: bump its usage count and last-used timestamp.
pub fn record_usage(store: &impl SnippetStore, owner_id: &str, id: &str) -> Result<Snippet> {
    let mut snippet = store.get(id, owner_id)?;
    snippet.record_usage();
    store.update(&snippet)?;
    Ok(snippet)
}
