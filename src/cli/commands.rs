//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipstash")]
#[command(about = "Terminal code snippet manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new snippet stash
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Add a new snippet (code read from --file or stdin)
    Add {
        /// Snippet title
        #[arg(short, long)]
        title: String,

        /// Snippet language (e.g. javascript, python, rust)
        #[arg(short, long)]
        language: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,

        /// Read the code body from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// User tag (repeatable)
        #[arg(short = 'g', long = "tag")]
        tags: Vec<String>,

        /// Folder id to place the snippet in
        #[arg(long)]
        folder: Option<String>,
    },

    /// List snippets with optional filters
    List {
        /// Case-insensitive text search over title, code, and description
        #[arg(short, long)]
        search: Option<String>,

        /// Only snippets in this language
        #[arg(short, long)]
        language: Option<String>,

        /// Only snippets carrying this tag, user or auto (repeatable)
        #[arg(short = 'g', long = "tag")]
        tags: Vec<String>,

        /// Only snippets in this folder
        #[arg(long)]
        folder: Option<String>,

        /// Sort field (created, updated, title, language, usage, last-used)
        #[arg(long)]
        sort: Option<String>,

        /// Sort order (asc, desc)
        #[arg(long)]
        order: Option<String>,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,

        /// Page size
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },

    /// Show a snippet in full
    Show {
        /// Snippet id
        id: String,
    },

    /// Edit snippet fields
    Edit {
        /// Snippet id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New language
        #[arg(short, long)]
        language: Option<String>,

        /// Read a new code body from this file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Read a new code body from stdin
        #[arg(long)]
        stdin: bool,

        /// Replace the user tags (repeatable)
        #[arg(short = 'g', long = "tag")]
        tags: Option<Vec<String>>,

        /// Move the snippet into this folder
        #[arg(long)]
        folder: Option<String>,

        /// Remove the snippet from its folder
        #[arg(long, conflicts_with = "folder")]
        no_folder: bool,
    },

    /// Remove a snippet
    Rm {
        /// Snippet id
        id: String,
    },

    /// Record a usage and print the snippet's code
    Use {
        /// Snippet id
        id: String,
    },

    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a folder
    Add {
        /// Folder name
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List folders
    Ls,

    /// Rename a folder or change its description
    Edit {
        /// Folder id
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a folder (its snippets are kept, just detached)
    Rm {
        /// Folder id
        id: String,
    },

    /// List the snippets inside a folder
    Show {
        /// Folder id
        id: String,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,

        /// Page size
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },
}
