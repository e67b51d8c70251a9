use crate::content::Library;
use crate::model::Category;

use super::commands::{Cli, Commands, ListArgs, ShowArgs};
use super::output;

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown category '{0}' (expected projects, research, or blog)")]
    UnknownCategory(String),
    #[error("no item with id '{0}'")]
    UnknownItem(String),
    #[error("could not serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Dispatch a parsed CLI invocation against the built-in library
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let library = Library::builtin();
    match cli.command {
        Some(Commands::List(args)) => cmd_list(&library, &args, cli.json),
        Some(Commands::Show(args)) => cmd_show(&library, &args, cli.json),
        Some(Commands::Folders) => cmd_folders(cli.json),
        // No subcommand is handled in main (launches the TUI)
        None => Ok(()),
    }
}

fn cmd_list(library: &Library, args: &ListArgs, json: bool) -> Result<(), CliError> {
    let categories: Vec<Category> = match &args.category {
        Some(name) => {
            let category = Category::parse(name)
                .ok_or_else(|| CliError::UnknownCategory(name.clone()))?;
            vec![category]
        }
        None => library.categories().collect(),
    };

    if json {
        let listing: Vec<output::CategoryListJson> = categories
            .iter()
            .map(|&category| output::CategoryListJson {
                category,
                items: library
                    .sorted_by_year(category)
                    .into_iter()
                    .map(output::ItemJson::from)
                    .collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for (i, &category) in categories.iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::print_category(category, &library.sorted_by_year(category));
        }
    }
    Ok(())
}

fn cmd_show(library: &Library, args: &ShowArgs, json: bool) -> Result<(), CliError> {
    let (category, item) = library
        .find_anywhere(&args.id)
        .ok_or_else(|| CliError::UnknownItem(args.id.clone()))?;

    if json {
        let detail = output::ItemWithCategoryJson {
            category,
            item: output::ItemJson::from(item),
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        output::print_item(category, item);
    }
    Ok(())
}

fn cmd_folders(json: bool) -> Result<(), CliError> {
    if json {
        let folders: Vec<output::FolderJson> = crate::model::Folder::ALL
            .iter()
            .map(|f| output::FolderJson {
                label: f.label().to_string(),
                category: f.category(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&folders)?);
    } else {
        output::print_folders();
    }
    Ok(())
}
