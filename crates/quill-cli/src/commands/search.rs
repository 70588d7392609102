use std::path::Path;

use crate::commands::common::normalize_search_query;
use crate::commands::list;
use crate::error::CliError;

pub fn run_search(
    query: &str,
    category: Option<&str>,
    tags: &[String],
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let query = normalize_search_query(query)?;
    list::run_list(category, tags, Some(&query), as_json, db_path)
}
