//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, FolderCommands};
pub use output::{format_folder_list, format_snippet, format_snippet_list};
