//! List request normalization and query planning
//!
//! A raw list request is normalized into a `QueryPlan`: a filter predicate,
//! a sort spec, and a page window. The planner validates everything up front
//! so the store never sees an invalid request, and it performs no I/O itself.

use crate::domain::snippet::Snippet;
use crate::domain::Language;
use crate::error::{Result, SnipStashError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Raw, unvalidated list request as it arrives from the caller.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub search: Option<String>,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub folder_id: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Fields a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Created,
    Updated,
    Title,
    Language,
    Usage,
    LastUsed,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Created => "created",
            SortField::Updated => "updated",
            SortField::Title => "title",
            SortField::Language => "language",
            SortField::Usage => "usage",
            SortField::LastUsed => "last-used",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "created" => Ok(SortField::Created),
            "updated" => Ok(SortField::Updated),
            "title" => Ok(SortField::Title),
            "language" => Ok(SortField::Language),
            "usage" => Ok(SortField::Usage),
            "last-used" => Ok(SortField::LastUsed),
            other => Err(format!("unknown sort field: '{}'", other)),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: '{}'", other)),
        }
    }
}

/// Validated filter predicate. Every filter is scoped to one owner.
#[derive(Debug, Clone)]
pub struct SnippetFilter {
    owner_id: String,
    search: Option<String>,
    language: Option<Language>,
    tags: Vec<String>,
    folder_id: Option<String>,
}

impl SnippetFilter {
    /// A filter that matches all of the owner's snippets.
    pub fn for_owner(owner_id: &str) -> Self {
        SnippetFilter {
            owner_id: owner_id.to_string(),
            search: None,
            language: None,
            tags: Vec::new(),
            folder_id: None,
        }
    }

    /// Restrict the filter to one folder.
    pub fn in_folder(mut self, folder_id: &str) -> Self {
        self.folder_id = Some(folder_id.to_string());
        self
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        if snippet.owner_id != self.owner_id {
            return false;
        }
        if let Some(needle) = &self.search {
            let title = snippet.title.to_lowercase();
            let code = snippet.code.to_lowercase();
            let description = snippet
                .description
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default();
            if !title.contains(needle)
                && !code.contains(needle)
                && !description.contains(needle)
            {
                return false;
            }
        }
        if let Some(language) = self.language {
            if snippet.language != language {
                return false;
            }
        }
        if !self.tags.is_empty() {
            // Match-any over the union of user and auto tags.
            let all = snippet.all_tags();
            if !self.tags.iter().any(|tag| all.contains(tag)) {
                return false;
            }
        }
        if let Some(folder_id) = &self.folder_id {
            if snippet.folder_id.as_deref() != Some(folder_id.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Validated sort field + direction.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn compare(&self, a: &Snippet, b: &Snippet) -> Ordering {
        let ordering = match self.field {
            SortField::Created => a.created_at.cmp(&b.created_at),
            SortField::Updated => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Language => a.language.as_str().cmp(b.language.as_str()),
            SortField::Usage => a.usage_count.cmp(&b.usage_count),
            SortField::LastUsed => a.last_used_at.cmp(&b.last_used_at),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn sort(&self, snippets: &mut [Snippet]) {
        snippets.sort_by(|a, b| self.compare(a, b));
    }
}

/// Zero-based window into the sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn apply(&self, snippets: Vec<Snippet>) -> Vec<Snippet> {
        snippets
            .into_iter()
            .skip(self.skip)
            .take(self.limit)
            .collect()
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

/// Fully validated, executable list query.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub filter: SnippetFilter,
    pub sort: SortSpec,
    pub window: PageWindow,
    page: u32,
    limit: u32,
}

impl QueryPlan {
    /// Normalize and validate a raw request into an executable plan.
    pub fn build(owner_id: &str, request: &ListRequest) -> Result<Self> {
        let page = request.page.unwrap_or(1);
        if page < 1 {
            return Err(SnipStashError::InvalidRequest(
                "page must be at least 1".to_string(),
            ));
        }
        let limit = request.limit.unwrap_or(10);
        if limit < 1 {
            return Err(SnipStashError::InvalidRequest(
                "limit must be at least 1".to_string(),
            ));
        }

        let field = match &request.sort_by {
            Some(raw) => raw.parse().map_err(SnipStashError::InvalidRequest)?,
            None => SortField::Created,
        };
        let order = match &request.sort_order {
            Some(raw) => raw.parse().map_err(SnipStashError::InvalidRequest)?,
            None => SortOrder::Desc,
        };

        let language = match &request.language {
            Some(raw) => Some(
                raw.parse::<Language>()
                    .map_err(SnipStashError::InvalidRequest)?,
            ),
            None => None,
        };

        let search = request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let tags: Vec<String> = request
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Ok(QueryPlan {
            filter: SnippetFilter {
                owner_id: owner_id.to_string(),
                search,
                language,
                tags,
                folder_id: request.folder_id.clone(),
            },
            sort: SortSpec { field, order },
            window: PageWindow {
                skip: (page as usize - 1) * limit as usize,
                limit: limit as usize,
            },
            page,
            limit,
        })
    }

    /// Pagination metadata for a known total match count.
    pub fn pagination(&self, total: usize) -> Pagination {
        Pagination {
            total,
            page: self.page,
            limit: self.limit,
            pages: total.div_ceil(self.limit as usize) as u32,
        }
    }
}
