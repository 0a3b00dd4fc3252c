//! Domain layer - Business logic and domain models

pub mod language;
pub mod query;
pub mod snippet;
pub mod tags;

pub use language::Language;
pub use query::{ListRequest, Pagination, QueryPlan, SnippetFilter, SortField, SortOrder};
pub use snippet::{Folder, FolderChange, Snippet, SnippetDraft, SnippetPatch};
