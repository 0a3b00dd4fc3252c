//! Folder management use cases

use crate::application::list_snippets::{list_snippets, SnippetPage};
use crate::domain::{Folder, ListRequest};
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// Create a folder for the owner.
pub fn create_folder(
    store: &impl SnippetStore,
    owner_id: &str,
    name: &str,
    description: Option<String>,
) -> Result<Folder> {
    let folder = Folder::create(owner_id, name, description)?;
    store.insert_folder(&folder)?;
    Ok(folder)
}

/// The owner's folders, sorted by name.
pub fn list_folders(store: &impl SnippetStore, owner_id: &str) -> Result<Vec<Folder>> {
    store.list_folders(owner_id)
}

/// Rename a folder and/or replace its description.
pub fn update_folder(
    store: &impl SnippetStore,
    owner_id: &str,
    id: &str,
    name: Option<&str>,
    description: Option<String>,
) -> Result<Folder> {
    let mut folder = store.get_folder(id, owner_id)?;
    if let Some(name) = name {
        folder.rename(name)?;
    }
    if description.is_some() {
        folder.set_description(description);
    }
    store.update_folder(&folder)?;
    Ok(folder)
}

/// Delete a folder, detaching its snippets first.
///
/// Snippets are never deleted: each referencing snippet has its `folder_id`
/// cleared before the folder document is removed. Returns how many snippets
/// were detached.
pub fn delete_folder(store: &impl SnippetStore, owner_id: &str, id: &str) -> Result<usize> {
    store.get_folder(id, owner_id)?;
    let detached = store.clear_folder_refs(id, owner_id)?;
    store.delete_folder(id, owner_id)?;
    Ok(detached)
}

/// List the snippets inside one folder, with the usual list options.
pub fn folder_snippets(
    store: &impl SnippetStore,
    owner_id: &str,
    folder_id: &str,
    request: &ListRequest,
) -> Result<SnippetPage> {
    store.get_folder(folder_id, owner_id)?;
    let mut request = request.clone();
    request.folder_id = Some(folder_id.to_string());
    list_snippets(store, owner_id, &request)
}
