//! Snippet and folder records

use crate::domain::tags::{classify, Category};
use crate::domain::Language;
use crate::error::{Result, SnipStashError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A stored code snippet.
///
/// `auto_tags` is derived from `code` and `language` and is recomputed on
/// every change to either; it is never edited directly. `folder_id` is a weak
/// reference: the folder may be deleted out from under it, in which case the
/// field is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub code: String,
    pub language: Language,
    #[serde(default)]
    pub user_tags: BTreeSet<String>,
    #[serde(default)]
    pub auto_tags: BTreeSet<Category>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a snippet.
#[derive(Debug, Clone, Default)]
pub struct SnippetDraft {
    pub title: String,
    pub description: Option<String>,
    pub code: String,
    pub language: String,
    pub user_tags: Vec<String>,
    pub folder_id: Option<String>,
}

/// Partial update for a snippet. Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub user_tags: Option<Vec<String>>,
    pub folder: FolderChange,
}

/// How a patch affects the snippet's folder assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FolderChange {
    /// Leave the current assignment as-is
    #[default]
    Keep,
    /// Move the snippet into the given folder
    Assign(String),
    /// Remove the snippet from its folder
    Clear,
}

impl Snippet {
    /// Create a new snippet for `owner_id`, classifying its code.
    pub fn create(owner_id: &str, draft: SnippetDraft) -> Result<Self> {
        let title = required_text("title", &draft.title)?;
        let code = required_code(&draft.code)?;
        let language: Language = draft
            .language
            .parse()
            .map_err(SnipStashError::InvalidRequest)?;
        let auto_tags = classify(&code, language.as_str());
        let now = Utc::now();

        Ok(Snippet {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title,
            description: optional_text(draft.description),
            code,
            language,
            user_tags: normalize_tags(&draft.user_tags),
            auto_tags,
            folder_id: draft.folder_id,
            usage_count: 0,
            last_used_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update.
    ///
    /// When the patch touches `code` or `language`, auto tags are recomputed
    /// from the effective values after the patch. The stored language is used
    /// when the patch does not carry one.
    pub fn apply_patch(&mut self, patch: SnippetPatch) -> Result<()> {
        let language = match &patch.language {
            Some(raw) => Some(raw.parse::<Language>().map_err(SnipStashError::InvalidRequest)?),
            None => None,
        };
        let title = match &patch.title {
            Some(raw) => Some(required_text("title", raw)?),
            None => None,
        };
        let code = match patch.code {
            Some(raw) => Some(required_code(&raw)?),
            None => None,
        };

        let reclassify = code.is_some() || language.is_some();

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = optional_text(Some(description));
        }
        if let Some(code) = code {
            self.code = code;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(tags) = patch.user_tags {
            self.user_tags = normalize_tags(&tags);
        }
        match patch.folder {
            FolderChange::Keep => {}
            FolderChange::Assign(folder_id) => self.folder_id = Some(folder_id),
            FolderChange::Clear => self.folder_id = None,
        }

        if reclassify {
            self.auto_tags = classify(&self.code, self.language.as_str());
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record that the snippet was used (copied, pasted, executed).
    pub fn record_usage(&mut self) {
        self.usage_count += 1;
        let now = Utc::now();
        self.last_used_at = Some(now);
        self.updated_at = now;
    }

    /// Union of user and auto tags, as displayed and as searched.
    pub fn all_tags(&self) -> BTreeSet<String> {
        let mut tags = self.user_tags.clone();
        tags.extend(self.auto_tags.iter().map(|c| c.to_string()));
        tags
    }
}

/// A named grouping of snippets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    pub fn create(owner_id: &str, name: &str, description: Option<String>) -> Result<Self> {
        let name = required_text("folder name", name)?;
        let now = Utc::now();
        Ok(Folder {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name,
            description: optional_text(description),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = required_text("folder name", name)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = optional_text(description);
        self.updated_at = Utc::now();
    }
}

/// Trim tags, drop empties, deduplicate. Case is preserved.
pub fn normalize_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SnipStashError::InvalidRequest(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn required_code(value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(SnipStashError::InvalidRequest(
            "code must not be empty".to_string(),
        ));
    }
    Ok(value.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
