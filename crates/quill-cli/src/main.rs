//! Quill CLI - categorized notes with tags, due dates, and export

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{CategoryCommands, Cli, Commands, TagCommands};
use crate::commands::add::AddOptions;
use crate::commands::edit::EditOptions;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quill_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = commands::common::resolve_db_path(cli.db_path);

    match cli.command {
        Some(Commands::Category { command }) => match command {
            CategoryCommands::Add { name } => commands::category::run_add(&name, &db_path),
            CategoryCommands::List { json } => commands::category::run_list(json, &db_path),
            CategoryCommands::Delete { name } => commands::category::run_delete(&name, &db_path),
        },
        Some(Commands::Add {
            category,
            template,
            title,
            due,
            tags,
            content,
        }) => commands::add::run_add(
            AddOptions {
                category,
                template,
                title,
                due,
                tags,
                content,
            },
            &db_path,
        ),
        Some(Commands::List {
            category,
            tags,
            search,
            json,
        }) => commands::list::run_list(
            category.as_deref(),
            &tags,
            search.as_deref(),
            json,
            &db_path,
        ),
        Some(Commands::Search {
            query,
            category,
            tags,
            json,
        }) => commands::search::run_search(&query, category.as_deref(), &tags, json, &db_path),
        Some(Commands::Show { id }) => commands::show::run_show(&id, &db_path),
        Some(Commands::Edit {
            id,
            title,
            status,
            due,
            clear_due,
            category,
            content,
        }) => commands::edit::run_edit(
            EditOptions {
                id,
                title,
                status,
                due,
                clear_due,
                category,
                content,
            },
            &db_path,
        ),
        Some(Commands::Delete { id }) => commands::delete::run_delete(&id, &db_path),
        Some(Commands::Move { id, before, after }) => {
            commands::move_cmd::run_move(&id, before.as_deref(), after.as_deref(), &db_path)
        }
        Some(Commands::Tag { command }) => match command {
            TagCommands::Add { id, tag } => commands::tag::run_add(&id, &tag, &db_path),
            TagCommands::Remove { id, tag } => commands::tag::run_remove(&id, &tag, &db_path),
            TagCommands::List { json } => commands::tag::run_list(json, &db_path),
        },
        Some(Commands::Export { id, format, output }) => {
            commands::export::run_export(&id, format.to_format(), output.as_deref(), &db_path)
        }
        Some(Commands::Share { id }) => commands::share::run_share(&id, &db_path),
        Some(Commands::Completions { shell, output }) => {
            commands::completions::run_completions(shell, output.as_deref())
        }
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
