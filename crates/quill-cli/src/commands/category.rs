use std::path::Path;

use serde::Serialize;

use crate::commands::common::{open_notebook, resolve_category_id, short_id};
use crate::error::CliError;

pub fn run_add(name: &str, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let id = notebook.add_category(name)?;
    println!("{id}");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CategoryListItem {
    pub id: String,
    pub name: String,
    pub notes: usize,
}

pub fn run_list(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let notebook = open_notebook(db_path)?;
    let items: Vec<CategoryListItem> = notebook
        .categories()
        .iter()
        .map(|category| CategoryListItem {
            id: category.id.as_str(),
            name: category.name.clone(),
            notes: notebook
                .notes()
                .iter()
                .filter(|note| note.category_id == category.id)
                .count(),
        })
        .collect();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!(
                "{:<13}  {:<24}  {} note(s)",
                short_id(&item.id),
                item.name,
                item.notes
            );
        }
    }
    Ok(())
}

pub fn run_delete(name: &str, db_path: &Path) -> Result<(), CliError> {
    let mut notebook = open_notebook(db_path)?;
    let id = resolve_category_id(&notebook, name)?;
    let name = notebook
        .category(id)
        .map_or_else(String::new, |category| category.name.clone());
    let cascaded = notebook.delete_category(id)?;
    println!("Removed category '{name}' and {cascaded} note(s)");
    Ok(())
}
