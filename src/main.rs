use clap::Parser;
use snipstash::application::manage_folders;
use snipstash::application::{
    create_snippet, delete_snippet, init, list_snippets, record_usage, show_snippet,
    update_snippet, ConfigService,
};
use snipstash::cli::{
    format_folder_list, format_snippet, format_snippet_list, Cli, Commands, FolderCommands,
};
use snipstash::domain::{FolderChange, ListRequest, SnippetDraft, SnippetPatch};
use snipstash::error::SnipStashError;
use snipstash::infrastructure::FileSystemStore;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the stash and resolve the acting user.
fn open_store() -> Result<(FileSystemStore, String), SnipStashError> {
    let store = FileSystemStore::discover()?;
    let config = store.load_config()?;
    let user = config.get_user();
    Ok((store, user))
}

/// Read a code body from a file, or from stdin when no file is given.
fn read_code(file: Option<PathBuf>) -> Result<String, SnipStashError> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

fn run(cli: Cli) -> Result<(), SnipStashError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Config { key, value, list } => {
            let store = FileSystemStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("user = {}", config.user);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: snipstash config [--list | <key> [<value>]]");
                println!("Valid keys: user, created");
                Ok(())
            }
        }

        Commands::Add {
            title,
            language,
            description,
            file,
            tags,
            folder,
        } => {
            let (store, user) = open_store()?;
            let code = read_code(file)?;
            let snippet = create_snippet(
                &store,
                &user,
                SnippetDraft {
                    title,
                    description,
                    code,
                    language,
                    user_tags: tags,
                    folder_id: folder,
                },
            )?;
            println!("Added snippet {}", snippet.id);
            let auto: Vec<String> = snippet.auto_tags.iter().map(|c| c.to_string()).collect();
            if !auto.is_empty() {
                println!("Auto tags: {}", auto.join(", "));
            }
            Ok(())
        }

        Commands::List {
            search,
            language,
            tags,
            folder,
            sort,
            order,
            page,
            limit,
        } => {
            let (store, user) = open_store()?;
            let request = ListRequest {
                search,
                language,
                tags,
                folder_id: folder,
                sort_by: sort,
                sort_order: order,
                page,
                limit,
            };
            let result = list_snippets(&store, &user, &request)?;
            print!("{}", format_snippet_list(&result));
            Ok(())
        }

        Commands::Show { id } => {
            let (store, user) = open_store()?;
            let snippet = show_snippet(&store, &user, &id)?;
            print!("{}", format_snippet(&snippet));
            Ok(())
        }

        Commands::Edit {
            id,
            title,
            description,
            language,
            file,
            stdin,
            tags,
            folder,
            no_folder,
        } => {
            let (store, user) = open_store()?;
            let code = if file.is_some() {
                Some(read_code(file)?)
            } else if stdin {
                Some(read_code(None)?)
            } else {
                None
            };
            let patch = SnippetPatch {
                title,
                description,
                code,
                language,
                user_tags: tags,
                folder: if no_folder {
                    FolderChange::Clear
                } else if let Some(folder_id) = folder {
                    FolderChange::Assign(folder_id)
                } else {
                    FolderChange::Keep
                },
            };
            let snippet = update_snippet(&store, &user, &id, patch)?;
            println!("Updated snippet {}", snippet.id);
            Ok(())
        }

        Commands::Rm { id } => {
            let (store, user) = open_store()?;
            delete_snippet(&store, &user, &id)?;
            println!("Deleted snippet {}", id);
            Ok(())
        }

        Commands::Use { id } => {
            let (store, user) = open_store()?;
            let snippet = record_usage(&store, &user, &id)?;
            print!("{}", snippet.code);
            if !snippet.code.ends_with('\n') {
                println!();
            }
            Ok(())
        }

        Commands::Folder { command } => {
            let (store, user) = open_store()?;
            match command {
                FolderCommands::Add { name, description } => {
                    let folder = manage_folders::create_folder(&store, &user, &name, description)?;
                    println!("Added folder {}", folder.id);
                    Ok(())
                }
                FolderCommands::Ls => {
                    let folders = manage_folders::list_folders(&store, &user)?;
                    print!("{}", format_folder_list(&folders));
                    Ok(())
                }
                FolderCommands::Edit {
                    id,
                    name,
                    description,
                } => {
                    let folder = manage_folders::update_folder(
                        &store,
                        &user,
                        &id,
                        name.as_deref(),
                        description,
                    )?;
                    println!("Updated folder {}", folder.id);
                    Ok(())
                }
                FolderCommands::Rm { id } => {
                    let detached = manage_folders::delete_folder(&store, &user, &id)?;
                    println!("Deleted folder {} ({} snippets detached)", id, detached);
                    Ok(())
                }
                FolderCommands::Show { id, page, limit } => {
                    let request = ListRequest {
                        page,
                        limit,
                        ..Default::default()
                    };
                    let result = manage_folders::folder_snippets(&store, &user, &id, &request)?;
                    print!("{}", format_snippet_list(&result));
                    Ok(())
                }
            }
        }
    }
}
