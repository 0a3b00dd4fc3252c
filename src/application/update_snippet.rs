//! Update snippet use case

use crate::domain::{FolderChange, Snippet, SnippetPatch};
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Apply a partial patch to one of the owner's snippets.
pub fn update_snippet(
    store: &impl SnippetStore,
    owner_id: &str,
    id: &str,
    patch: SnippetPatch,
) -> Result<Snippet> {
    if let FolderChange::Assign(folder_id) = &patch.folder {
        store.get_folder(folder_id, owner_id)?;
    }

    let mut snippet = store.get(id, owner_id)?;
    snippet.apply_patch(patch)?;
    store.update(&snippet)?;
    Ok(snippet)
}
