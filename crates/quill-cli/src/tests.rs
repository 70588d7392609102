use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use chrono::NaiveDate;
use quill_core::export::ExportFormat;
use quill_core::models::Status;
use quill_core::store::MemoryStore;
use quill_core::Notebook;

use crate::cli::{CompletionShell, StatusArg, TemplateArg};
use crate::commands;
use crate::commands::add::AddOptions;
use crate::commands::common::{
    build_filter, default_editor, format_note_lines, format_relative_time, normalize_content,
    normalize_note_identifier, normalize_search_query, note_preview, note_to_list_item,
    open_notebook, parse_due_arg, resolve_category_id, resolve_note_id, short_id, truncate_chars,
};
use crate::commands::edit::EditOptions;
use crate::error::CliError;

fn temp_db() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.db");
    (dir, path)
}

fn add_note(db: &std::path::Path, category: &str, title: &str, content: &str) -> String {
    commands::add::run_add(
        AddOptions {
            category: category.to_string(),
            template: None,
            title: Some(title.to_string()),
            due: None,
            tags: Vec::new(),
            content: vec![content.to_string()],
        },
        db,
    )
    .unwrap();
    let notebook = open_notebook(db).unwrap();
    let note = notebook
        .notes()
        .iter()
        .find(|note| note.title == title)
        .unwrap();
    note.id.as_str()
}

#[test]
fn test_normalize_note_identifier_trims() {
    assert_eq!(normalize_note_identifier("  abc  ").unwrap(), "abc");
    assert!(matches!(
        normalize_note_identifier("   "),
        Err(CliError::EmptyNoteId)
    ));
}

#[test]
fn test_normalize_search_query_rejects_empty() {
    assert_eq!(normalize_search_query(" milk ").unwrap(), "milk");
    assert!(matches!(
        normalize_search_query(""),
        Err(CliError::EmptySearchQuery)
    ));
}

#[test]
fn test_normalize_content() {
    assert_eq!(normalize_content("  hello  "), Some("hello".to_string()));
    assert_eq!(normalize_content("   "), None);
}

#[test]
fn test_parse_due_arg() {
    assert_eq!(
        parse_due_arg("2026-09-01").unwrap(),
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    );
    assert!(matches!(
        parse_due_arg("tomorrow"),
        Err(CliError::InvalidDueDate(_))
    ));
}

#[test]
fn test_short_id_truncates() {
    assert_eq!(short_id("0123456789abcdef"), "0123456789abc");
    assert_eq!(short_id("abc"), "abc");
}

#[test]
fn test_truncate_chars_collapses_and_truncates() {
    assert_eq!(truncate_chars("a   b\n c", 10), "a b c");
    assert_eq!(truncate_chars("abcdefghij", 6), "abc...");
}

#[test]
fn test_format_relative_time() {
    assert_eq!(format_relative_time(0, 30_000), "just now");
    assert_eq!(format_relative_time(0, 300_000), "5m ago");
    assert_eq!(format_relative_time(0, 10_800_000), "3h ago");
    assert_eq!(format_relative_time(0, 172_800_000), "2d ago");
    assert_eq!(format_relative_time(0, 1_209_600_000), "2w ago");
    assert_eq!(format_relative_time(0, 7_776_000_000), "3mo ago");
    assert_eq!(format_relative_time(0, 63_072_000_000), "2y ago");
}

#[test]
fn test_default_editor_is_platform_fallback() {
    let editor = default_editor();
    if cfg!(target_os = "windows") {
        assert_eq!(editor, "notepad");
    } else {
        assert_eq!(editor, "vi");
    }
}

#[test]
fn test_resolve_note_id_by_full_id() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    let first = notebook.add_note(work, None).unwrap().id;
    notebook.add_note(work, None).unwrap();

    assert_eq!(resolve_note_id(&notebook, &first.as_str()).unwrap(), first);
}

#[test]
fn test_resolve_note_id_by_unique_prefix() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    let only = notebook.add_note(work, None).unwrap().id;

    // Version 7 IDs lead with the millisecond timestamp, so every current
    // ID starts with a zero nibble.
    assert_eq!(resolve_note_id(&notebook, "0").unwrap(), only);
}

#[test]
fn test_resolve_note_id_ambiguous_prefix() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    notebook.add_note(work, None).unwrap();
    notebook.add_note(work, None).unwrap();

    let error = resolve_note_id(&notebook, "0").unwrap_err();
    assert!(matches!(error, CliError::AmbiguousNoteId(_)));
    assert!(error.to_string().contains("ambiguous"));
}

#[test]
fn test_resolve_note_id_not_found() {
    let notebook = Notebook::load(MemoryStore::new()).unwrap();
    assert!(matches!(
        resolve_note_id(&notebook, "zzzzzz"),
        Err(CliError::NoteNotFound(_))
    ));
}

#[test]
fn test_resolve_category_id_by_name_is_case_insensitive() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();

    assert_eq!(resolve_category_id(&notebook, "work").unwrap(), work);
    assert_eq!(resolve_category_id(&notebook, " WORK ").unwrap(), work);
}

#[test]
fn test_resolve_category_id_by_full_id() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();

    assert_eq!(resolve_category_id(&notebook, &work.as_str()).unwrap(), work);
}

#[test]
fn test_resolve_category_id_not_found() {
    let notebook = Notebook::load(MemoryStore::new()).unwrap();
    assert!(matches!(
        resolve_category_id(&notebook, "Hobby"),
        Err(CliError::CategoryNotFound(_))
    ));
    assert!(matches!(
        resolve_category_id(&notebook, "  "),
        Err(CliError::EmptyCategory)
    ));
}

#[test]
fn test_build_filter_resolves_category_and_copies_selectors() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();

    let filter = build_filter(
        &notebook,
        Some("work"),
        &["urgent".to_string()],
        Some("milk"),
    )
    .unwrap();
    assert_eq!(filter.category, Some(work));
    assert_eq!(filter.search, "milk");
    assert_eq!(filter.tags, vec!["urgent".to_string()]);

    assert!(matches!(
        build_filter(&notebook, Some("Hobby"), &[], None),
        Err(CliError::CategoryNotFound(_))
    ));
}

#[test]
fn test_format_note_lines_shows_metadata() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    let mut note = notebook.add_note(work, None).unwrap();
    note.title = "Quarterly plan".to_string();
    note.status = Status::InProgress;
    note.due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
    note.tags = vec!["planning".to_string()];
    notebook.update_note(note).unwrap();

    let notes: Vec<_> = notebook.notes().iter().collect();
    let lines = format_note_lines(&notes);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Quarterly plan"));
    assert!(lines[0].contains("In Progress"));
    assert!(lines[0].contains("2026-09-01"));
    assert!(lines[0].contains("#planning"));
}

#[test]
fn test_note_preview_strips_markup_and_keeps_first_line() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    let mut note = notebook.add_note(work, None).unwrap();
    note.content = "<p>First line</p>\n<p>Second line</p>".to_string();
    notebook.update_note(note.clone()).unwrap();

    assert_eq!(
        note_preview(notebook.note(note.id).unwrap(), 80),
        "First line"
    );
}

#[test]
fn test_note_to_list_item_shape() {
    let mut notebook = Notebook::load(MemoryStore::new()).unwrap();
    let work = notebook.add_category("Work").unwrap();
    let mut note = notebook.add_note(work, None).unwrap();
    note.title = "Planning".to_string();
    note.content = "<p>Q3 goals</p>".to_string();
    note.status = Status::InProgress;
    notebook.update_note(note.clone()).unwrap();

    let item = note_to_list_item(&notebook, notebook.note(note.id).unwrap());
    assert_eq!(item.category, "Work");
    assert_eq!(item.status, "In Progress");
    assert_eq!(item.color, "#4169E1");
    assert_eq!(item.preview, "Q3 goals");

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["title"], "Planning");
    assert_eq!(json["due_date"], serde_json::Value::Null);
}

#[test]
fn test_status_and_template_args_map_to_core() {
    assert_eq!(StatusArg::InProgress.to_status(), Status::InProgress);
    assert_eq!(StatusArg::OnHold.to_status(), Status::OnHold);
    assert_eq!(
        TemplateArg::Academic.to_template().title(),
        "Academic Notes"
    );
}

#[test]
fn test_add_command_round_trip() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    commands::add::run_add(
        AddOptions {
            category: "Work".to_string(),
            template: None,
            title: Some("Standup notes".to_string()),
            due: Some("2026-09-01".to_string()),
            tags: vec!["Sync".to_string()],
            content: vec!["<p>Discuss".to_string(), "roadmap</p>".to_string()],
        },
        &db,
    )
    .unwrap();

    let notebook = open_notebook(&db).unwrap();
    assert_eq!(notebook.notes().len(), 1);
    let note = &notebook.notes()[0];
    assert_eq!(note.title, "Standup notes");
    assert_eq!(note.content, "<p>Discuss roadmap</p>");
    assert_eq!(note.tags, vec!["sync".to_string()]);
    assert_eq!(note.due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
    assert_eq!(
        notebook.category(note.category_id).unwrap().name,
        "Work"
    );
}

#[test]
fn test_add_command_with_template_keeps_seeded_content() {
    let (_dir, db) = temp_db();
    commands::category::run_add("School", &db).unwrap();
    commands::add::run_add(
        AddOptions {
            category: "School".to_string(),
            template: Some(TemplateArg::Academic),
            title: None,
            due: None,
            tags: Vec::new(),
            content: Vec::new(),
        },
        &db,
    )
    .unwrap();

    let notebook = open_notebook(&db).unwrap();
    let note = &notebook.notes()[0];
    assert_eq!(note.title, "Academic Notes");
    assert!(note.content.contains("## Key Concepts"));
}

#[test]
fn test_add_command_rejects_bad_due_date() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let error = commands::add::run_add(
        AddOptions {
            category: "Work".to_string(),
            template: None,
            title: None,
            due: Some("next week".to_string()),
            tags: Vec::new(),
            content: vec!["body".to_string()],
        },
        &db,
    )
    .unwrap_err();
    assert!(matches!(error, CliError::InvalidDueDate(_)));

    // Validation happens before the note is created.
    let notebook = open_notebook(&db).unwrap();
    assert!(notebook.notes().is_empty());
}

#[test]
fn test_edit_command_updates_metadata_without_editor() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Draft", "body");

    commands::edit::run_edit(
        EditOptions {
            id: id.clone(),
            title: Some("Renamed".to_string()),
            status: Some(StatusArg::Completed),
            due: Some("2026-10-01".to_string()),
            clear_due: false,
            category: None,
            content: false,
        },
        &db,
    )
    .unwrap();

    let notebook = open_notebook(&db).unwrap();
    let note = &notebook.notes()[0];
    assert_eq!(note.title, "Renamed");
    assert_eq!(note.status, Status::Completed);
    assert_eq!(note.due_date, NaiveDate::from_ymd_opt(2026, 10, 1));
}

#[test]
fn test_edit_command_moves_note_between_categories() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    commands::category::run_add("Personal", &db).unwrap();
    let id = add_note(&db, "Work", "Errand", "body");

    commands::edit::run_edit(
        EditOptions {
            id,
            title: None,
            status: None,
            due: None,
            clear_due: false,
            category: Some("personal".to_string()),
            content: false,
        },
        &db,
    )
    .unwrap();

    let notebook = open_notebook(&db).unwrap();
    let note = &notebook.notes()[0];
    assert_eq!(
        notebook.category(note.category_id).unwrap().name,
        "Personal"
    );
}

#[test]
fn test_delete_command_removes_note() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Draft", "body");

    commands::delete::run_delete(&id, &db).unwrap();

    let notebook = open_notebook(&db).unwrap();
    assert!(notebook.notes().is_empty());
}

#[test]
fn test_category_delete_cascades_notes() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    commands::category::run_add("Personal", &db).unwrap();
    add_note(&db, "Work", "First", "body");
    add_note(&db, "Work", "Second", "body");
    add_note(&db, "Personal", "Keep", "body");

    commands::category::run_delete("Work", &db).unwrap();

    let notebook = open_notebook(&db).unwrap();
    assert_eq!(notebook.categories().len(), 1);
    assert_eq!(notebook.notes().len(), 1);
    assert_eq!(notebook.notes()[0].title, "Keep");
}

#[test]
fn test_move_command_reorders_notes() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let a = add_note(&db, "Work", "a", "body");
    add_note(&db, "Work", "b", "body");
    let c = add_note(&db, "Work", "c", "body");

    commands::move_cmd::run_move(&c, Some(a.as_str()), None, &db).unwrap();

    let notebook = open_notebook(&db).unwrap();
    let titles: Vec<&str> = notebook
        .notes()
        .iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[test]
fn test_move_command_requires_target() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "a", "body");

    let error = commands::move_cmd::run_move(&id, None, None, &db).unwrap_err();
    assert!(matches!(error, CliError::MoveTargetRequired));
}

#[test]
fn test_tag_commands_round_trip() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Draft", "body");

    commands::tag::run_add(&id, " Urgent ", &db).unwrap();
    let notebook = open_notebook(&db).unwrap();
    assert_eq!(notebook.notes()[0].tags, vec!["urgent".to_string()]);
    drop(notebook);

    let error = commands::tag::run_add(&id, "urgent", &db).unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(quill_core::Error::InvalidInput(_))
    ));

    commands::tag::run_remove(&id, "urgent", &db).unwrap();
    let notebook = open_notebook(&db).unwrap();
    assert!(notebook.notes()[0].tags.is_empty());
}

#[test]
fn test_export_command_writes_plain_text_file() {
    let (dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Greeting", "<p>Hello <b>world</b></p>");

    let out = dir.path().join("note.txt");
    commands::export::run_export(&id, ExportFormat::Text, Some(&out), &db).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Greeting\n\nHello world");
}

#[test]
fn test_export_command_writes_pdf_file() {
    let (dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Greeting", "<p>Hello</p>");

    let out = dir.path().join("note.pdf");
    commands::export::run_export(&id, ExportFormat::Pdf, Some(&out), &db).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_share_command_without_handler_is_unsupported() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    let id = add_note(&db, "Work", "Draft", "body");

    std::env::remove_var("QUILL_SHARE_CMD");
    let error = commands::share::run_share(&id, &db).unwrap_err();
    assert!(matches!(error, CliError::ShareUnsupported));
}

#[test]
fn test_list_command_smoke() {
    let (_dir, db) = temp_db();
    commands::category::run_add("Work", &db).unwrap();
    add_note(&db, "Work", "Draft", "body");

    commands::list::run_list(Some("work"), &[], None, false, &db).unwrap();
    commands::list::run_list(None, &[], Some("body"), true, &db).unwrap();
}

#[test]
fn test_search_command_rejects_blank_query() {
    let (_dir, db) = temp_db();
    let error = commands::search::run_search("   ", None, &[], false, &db).unwrap_err();
    assert!(matches!(error, CliError::EmptySearchQuery));
}

#[test]
fn test_completions_command_writes_script() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("quill.bash");
    commands::completions::run_completions(CompletionShell::Bash, Some(&out)).unwrap();

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains("quill"));
}
