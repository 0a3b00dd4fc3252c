//! File system snippet store
//!
//! Each snippet and folder is one TOML document under the `.snipstash`
//! directory. Filtering, sorting, and paging happen in memory after a
//! document scan; the store never interprets queries beyond executing a
//! validated `QueryPlan`.

use crate::domain::{Folder, QueryPlan, Snippet, SnippetFilter};
use crate::error::{Result, SnipStashError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract store for snippet and folder documents.
///
/// All read operations are owner-scoped: a record belonging to another owner
/// behaves exactly like a record that does not exist.
pub trait SnippetStore {
    fn insert(&self, snippet: &Snippet) -> Result<()>;
    fn get(&self, id: &str, owner_id: &str) -> Result<Snippet>;
    fn update(&self, snippet: &Snippet) -> Result<()>;
    fn delete(&self, id: &str, owner_id: &str) -> Result<()>;

    /// Execute a validated plan: filter, sort, page.
    fn find(&self, plan: &QueryPlan) -> Result<Vec<Snippet>>;

    /// Count every record matching the filter, ignoring any page window.
    fn count(&self, filter: &SnippetFilter) -> Result<usize>;

    fn insert_folder(&self, folder: &Folder) -> Result<()>;
    fn get_folder(&self, id: &str, owner_id: &str) -> Result<Folder>;
    fn update_folder(&self, folder: &Folder) -> Result<()>;
    fn delete_folder(&self, id: &str, owner_id: &str) -> Result<()>;

    /// The owner's folders, sorted by name.
    fn list_folders(&self, owner_id: &str) -> Result<Vec<Folder>>;

    /// Clear `folder_id` on every one of the owner's snippets referencing
    /// the folder. Returns how many snippets were touched.
    fn clear_folder_refs(&self, folder_id: &str, owner_id: &str) -> Result<usize>;
}

/// File system implementation of SnippetStore
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the stash root by walking up from the current directory.
    /// First checks the SNIPSTASH_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check SNIPSTASH_ROOT environment variable first
        if let Ok(root_path) = std::env::var("SNIPSTASH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_stash_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(SnipStashError::Config(format!(
                    "SNIPSTASH_ROOT is set to '{}' but no .snipstash directory found. \
                    Run 'snipstash init' in that directory or unset SNIPSTASH_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the stash root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_stash_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .snipstash
                    return Err(SnipStashError::NotStashDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_stash_dir(path: &Path) -> bool {
        path.join(".snipstash").is_dir()
    }

    /// Check if .snipstash directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_stash_dir(&self.root)
    }

    /// Create the .snipstash directory structure
    pub fn initialize(&self) -> Result<()> {
        let stash_dir = self.root.join(".snipstash");

        if stash_dir.exists() {
            return Err(SnipStashError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(stash_dir.join("snippets"))?;
        fs::create_dir_all(stash_dir.join("folders"))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn snippets_dir(&self) -> PathBuf {
        self.root.join(".snipstash").join("snippets")
    }

    fn folders_dir(&self) -> PathBuf {
        self.root.join(".snipstash").join("folders")
    }

    fn document_path(dir: &Path, id: &str) -> Option<PathBuf> {
        // Ids are opaque tokens; anything that would escape the document
        // directory is treated as absent.
        if id.is_empty() || id.contains(['/', '\\', '.']) {
            return None;
        }
        Some(dir.join(format!("{}.toml", id)))
    }

    fn write_document<T: serde::Serialize>(path: &Path, document: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(document)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn scan_documents<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
        let mut documents = Vec::new();
        if !dir.exists() {
            return Ok(documents);
        }

        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let is_toml = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(".toml"));
            if !is_toml {
                continue;
            }
            let contents = fs::read_to_string(entry.path())?;
            documents.push(toml::from_str(&contents)?);
        }

        Ok(documents)
    }

    fn read_snippet(&self, id: &str) -> Result<Snippet> {
        let path = Self::document_path(&self.snippets_dir(), id)
            .ok_or_else(|| SnipStashError::SnippetNotFound(id.to_string()))?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnipStashError::SnippetNotFound(id.to_string())
            } else {
                SnipStashError::Io(e)
            }
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn read_folder(&self, id: &str) -> Result<Folder> {
        let path = Self::document_path(&self.folders_dir(), id)
            .ok_or_else(|| SnipStashError::FolderNotFound(id.to_string()))?;
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnipStashError::FolderNotFound(id.to_string())
            } else {
                SnipStashError::Io(e)
            }
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

impl SnippetStore for FileSystemStore {
    fn insert(&self, snippet: &Snippet) -> Result<()> {
        let path = Self::document_path(&self.snippets_dir(), &snippet.id)
            .ok_or_else(|| SnipStashError::SnippetNotFound(snippet.id.clone()))?;
        Self::write_document(&path, snippet)
    }

    fn get(&self, id: &str, owner_id: &str) -> Result<Snippet> {
        let snippet = self.read_snippet(id)?;
        if snippet.owner_id != owner_id {
            // Another owner's record is indistinguishable from a missing one.
            return Err(SnipStashError::SnippetNotFound(id.to_string()));
        }
        Ok(snippet)
    }

    fn update(&self, snippet: &Snippet) -> Result<()> {
        // The document must already exist for the same owner.
        self.get(&snippet.id, &snippet.owner_id)?;
        let path = Self::document_path(&self.snippets_dir(), &snippet.id)
            .ok_or_else(|| SnipStashError::SnippetNotFound(snippet.id.clone()))?;
        Self::write_document(&path, snippet)
    }

    fn delete(&self, id: &str, owner_id: &str) -> Result<()> {
        self.get(id, owner_id)?;
        let path = Self::document_path(&self.snippets_dir(), id)
            .ok_or_else(|| SnipStashError::SnippetNotFound(id.to_string()))?;
        fs::remove_file(path)?;
        Ok(())
    }

    fn find(&self, plan: &QueryPlan) -> Result<Vec<Snippet>> {
        let mut snippets: Vec<Snippet> = Self::scan_documents(&self.snippets_dir())?
            .into_iter()
            .filter(|snippet| plan.filter.matches(snippet))
            .collect();
        plan.sort.sort(&mut snippets);
        Ok(plan.window.apply(snippets))
    }

    fn count(&self, filter: &SnippetFilter) -> Result<usize> {
        let snippets: Vec<Snippet> = Self::scan_documents(&self.snippets_dir())?;
        Ok(snippets
            .iter()
            .filter(|snippet| filter.matches(snippet))
            .count())
    }

    fn insert_folder(&self, folder: &Folder) -> Result<()> {
        let path = Self::document_path(&self.folders_dir(), &folder.id)
            .ok_or_else(|| SnipStashError::FolderNotFound(folder.id.clone()))?;
        Self::write_document(&path, folder)
    }

    fn get_folder(&self, id: &str, owner_id: &str) -> Result<Folder> {
        let folder = self.read_folder(id)?;
        if folder.owner_id != owner_id {
            return Err(SnipStashError::FolderNotFound(id.to_string()));
        }
        Ok(folder)
    }

    fn update_folder(&self, folder: &Folder) -> Result<()> {
        self.get_folder(&folder.id, &folder.owner_id)?;
        let path = Self::document_path(&self.folders_dir(), &folder.id)
            .ok_or_else(|| SnipStashError::FolderNotFound(folder.id.clone()))?;
        Self::write_document(&path, folder)
    }

    fn delete_folder(&self, id: &str, owner_id: &str) -> Result<()> {
        self.get_folder(id, owner_id)?;
        let path = Self::document_path(&self.folders_dir(), id)
            .ok_or_else(|| SnipStashError::FolderNotFound(id.to_string()))?;
        fs::remove_file(path)?;
        Ok(())
    }

    fn list_folders(&self, owner_id: &str) -> Result<Vec<Folder>> {
        let mut folders: Vec<Folder> = Self::scan_documents(&self.folders_dir())?
            .into_iter()
            .filter(|folder: &Folder| folder.owner_id == owner_id)
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    fn clear_folder_refs(&self, folder_id: &str, owner_id: &str) -> Result<usize> {
        let snippets: Vec<Snippet> = Self::scan_documents(&self.snippets_dir())?;
        let mut cleared = 0;

        for mut snippet in snippets {
            if snippet.owner_id != owner_id {
                continue;
            }
            if snippet.folder_id.as_deref() != Some(folder_id) {
                continue;
            }
            snippet.folder_id = None;
            let path = Self::document_path(&self.snippets_dir(), &snippet.id)
                .ok_or_else(|| SnipStashError::SnippetNotFound(snippet.id.clone()))?;
            Self::write_document(&path, &snippet)?;
            cleared += 1;
        }

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListRequest, SnippetDraft};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_store() -> (TempDir, FileSystemStore) {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        (temp, store)
    }

    fn snippet(owner: &str, title: &str) -> Snippet {
        Snippet::create(
            owner,
            SnippetDraft {
                title: title.to_string(),
                description: None,
                code: "let x = 1;".to_string(),
                language: "javascript".to_string(),
                user_tags: vec![],
                folder_id: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_creates_structure() {
        let (temp, _store) = initialized_store();
        assert!(temp.path().join(".snipstash/snippets").is_dir());
        assert!(temp.path().join(".snipstash/folders").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, store) = initialized_store();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_insert_and_get_snippet() {
        let (_temp, store) = initialized_store();
        let snippet = snippet("user-1", "Test");
        store.insert(&snippet).unwrap();

        let loaded = store.get(&snippet.id, "user-1").unwrap();
        assert_eq!(loaded.title, "Test");
        assert_eq!(loaded.owner_id, "user-1");
    }

    #[test]
    fn test_get_is_owner_scoped() {
        let (_temp, store) = initialized_store();
        let snippet = snippet("user-a", "Private");
        store.insert(&snippet).unwrap();

        let result = store.get(&snippet.id, "user-b");
        match result.unwrap_err() {
            SnipStashError::SnippetNotFound(id) => assert_eq!(id, snippet.id),
            other => panic!("Expected SnippetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_missing_snippet() {
        let (_temp, store) = initialized_store();
        assert!(matches!(
            store.get("no-such-id", "user-1"),
            Err(SnipStashError::SnippetNotFound(_))
        ));
    }

    #[test]
    fn test_get_rejects_path_like_ids() {
        let (_temp, store) = initialized_store();
        assert!(matches!(
            store.get("../config", "user-1"),
            Err(SnipStashError::SnippetNotFound(_))
        ));
    }

    #[test]
    fn test_update_round_trips() {
        let (_temp, store) = initialized_store();
        let mut snippet = snippet("user-1", "Before");
        store.insert(&snippet).unwrap();

        snippet.title = "After".to_string();
        store.update(&snippet).unwrap();

        let loaded = store.get(&snippet.id, "user-1").unwrap();
        assert_eq!(loaded.title, "After");
    }

    #[test]
    fn test_delete_removes_document() {
        let (_temp, store) = initialized_store();
        let snippet = snippet("user-1", "Gone");
        store.insert(&snippet).unwrap();

        store.delete(&snippet.id, "user-1").unwrap();
        assert!(store.get(&snippet.id, "user-1").is_err());
    }

    #[test]
    fn test_delete_is_owner_scoped() {
        let (_temp, store) = initialized_store();
        let snippet = snippet("user-a", "Private");
        store.insert(&snippet).unwrap();

        assert!(store.delete(&snippet.id, "user-b").is_err());
        // Still present for the real owner.
        assert!(store.get(&snippet.id, "user-a").is_ok());
    }

    #[test]
    fn test_find_filters_and_pages() {
        let (_temp, store) = initialized_store();
        for i in 0..25 {
            store.insert(&snippet("user-1", &format!("Item {:02}", i))).unwrap();
        }
        store.insert(&snippet("user-2", "Other")).unwrap();

        let request = ListRequest {
            page: Some(3),
            limit: Some(10),
            ..Default::default()
        };
        let plan = QueryPlan::build("user-1", &request).unwrap();

        let page = store.find(&plan).unwrap();
        assert_eq!(page.len(), 5);

        let total = store.count(&plan.filter).unwrap();
        assert_eq!(total, 25);
        assert_eq!(plan.pagination(total).pages, 3);
    }

    #[test]
    fn test_find_sorts_by_title() {
        let (_temp, store) = initialized_store();
        store.insert(&snippet("user-1", "Banana")).unwrap();
        store.insert(&snippet("user-1", "Apple")).unwrap();
        store.insert(&snippet("user-1", "Cherry")).unwrap();

        let request = ListRequest {
            sort_by: Some("title".to_string()),
            sort_order: Some("asc".to_string()),
            ..Default::default()
        };
        let plan = QueryPlan::build("user-1", &request).unwrap();

        let results = store.find(&plan).unwrap();
        let titles: Vec<&str> = results.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_folder_crud_and_listing() {
        let (_temp, store) = initialized_store();
        let beta = Folder::create("user-1", "Beta", None).unwrap();
        let alpha = Folder::create("user-1", "Alpha", None).unwrap();
        let other = Folder::create("user-2", "Elsewhere", None).unwrap();
        store.insert_folder(&beta).unwrap();
        store.insert_folder(&alpha).unwrap();
        store.insert_folder(&other).unwrap();

        let folders = store.list_folders("user-1").unwrap();
        let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);

        store.delete_folder(&alpha.id, "user-1").unwrap();
        assert!(store.get_folder(&alpha.id, "user-1").is_err());
    }

    #[test]
    fn test_clear_folder_refs() {
        let (_temp, store) = initialized_store();
        let folder = Folder::create("user-1", "Utils", None).unwrap();
        store.insert_folder(&folder).unwrap();

        let mut inside = snippet("user-1", "Inside");
        inside.folder_id = Some(folder.id.clone());
        let outside = snippet("user-1", "Outside");
        let foreign = {
            let mut s = snippet("user-2", "Foreign");
            s.folder_id = Some(folder.id.clone());
            s
        };
        store.insert(&inside).unwrap();
        store.insert(&outside).unwrap();
        store.insert(&foreign).unwrap();

        let cleared = store.clear_folder_refs(&folder.id, "user-1").unwrap();
        assert_eq!(cleared, 1);

        let reloaded = store.get(&inside.id, "user-1").unwrap();
        assert!(reloaded.folder_id.is_none());

        // Another owner's snippet is untouched.
        let foreign_reloaded = store.get(&foreign.id, "user-2").unwrap();
        assert_eq!(foreign_reloaded.folder_id.as_deref(), Some(folder.id.as_str()));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".snipstash")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = FileSystemStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_without_stash() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemStore::discover_from(temp.path());
        match result.unwrap_err() {
            SnipStashError::NotStashDirectory(_) => {}
            _ => panic!("Expected NotStashDirectory error"),
        }
    }

    #[test]
    fn test_discover_with_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SNIPSTASH_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".snipstash")).unwrap();

        std::env::set_var("SNIPSTASH_ROOT", temp.path());

        let store = FileSystemStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SNIPSTASH_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("SNIPSTASH_ROOT", temp.path());

        let result = FileSystemStore::discover();
        match result.unwrap_err() {
            SnipStashError::Config(msg) => {
                assert!(msg.contains("no .snipstash directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }
}
