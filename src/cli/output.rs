//! Output formatting utilities

use crate::application::SnippetPage;
use crate::domain::{Folder, Snippet};

/// Format one page of snippets for display
pub fn format_snippet_list(page: &SnippetPage) -> String {
    if page.items.is_empty() {
        return "No snippets found".to_string();
    }

    let mut output = String::new();
    for snippet in &page.items {
        output.push_str(&format!(
            "{}  {:<10}  {}\n",
            snippet.id, snippet.language, snippet.title
        ));
        let tags = snippet.all_tags();
        if !tags.is_empty() {
            let line = tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!("{:38}{}\n", "", line));
        }
    }
    output.push_str(&format!(
        "\nPage {} of {} ({} snippets)\n",
        page.pagination.page, page.pagination.pages, page.pagination.total
    ));
    output
}

/// Format a single snippet in full
pub fn format_snippet(snippet: &Snippet) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", snippet.title));
    output.push_str(&format!("id:        {}\n", snippet.id));
    output.push_str(&format!("language:  {}\n", snippet.language));
    if let Some(description) = &snippet.description {
        output.push_str(&format!("about:     {}\n", description));
    }
    if let Some(folder_id) = &snippet.folder_id {
        output.push_str(&format!("folder:    {}\n", folder_id));
    }

    let tags = snippet.all_tags();
    if !tags.is_empty() {
        let line = tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&format!("tags:      {}\n", line));
    }

    output.push_str(&format!("used:      {} times", snippet.usage_count));
    if let Some(last_used) = snippet.last_used_at {
        output.push_str(&format!(" (last {})", last_used.to_rfc3339()));
    }
    output.push('\n');
    output.push_str(&format!("created:   {}\n", snippet.created_at.to_rfc3339()));
    output.push_str(&format!("updated:   {}\n", snippet.updated_at.to_rfc3339()));
    output.push('\n');
    output.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Format a list of folders for display
pub fn format_folder_list(folders: &[Folder]) -> String {
    if folders.is_empty() {
        return "No folders found".to_string();
    }

    let mut output = String::new();
    for folder in folders {
        match &folder.description {
            Some(description) => {
                output.push_str(&format!("{}  {}  ({})\n", folder.id, folder.name, description))
            }
            None => output.push_str(&format!("{}  {}\n", folder.id, folder.name)),
        }
    }
    output
}
