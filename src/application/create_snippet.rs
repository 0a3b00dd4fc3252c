//! Create snippet use case

use crate::domain::{Snippet, SnippetDraft};
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Validate a draft, classify its code, and persist the new snippet.
pub fn create_snippet(
    store: &impl SnippetStore,
    owner_id: &str,
    draft: SnippetDraft,
) -> Result<Snippet> {
    // A folder reference must point at one of the owner's folders.
    if let Some(folder_id) = &draft.folder_id {
        store.get_folder(folder_id, owner_id)?;
    }

    let snippet = Snippet::create(owner_id, draft)?;
    store.insert(&snippet)?;
    Ok(snippet)
}
