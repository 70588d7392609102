use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use quill_core::export;
use quill_core::models::{Status, Template};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Categorized notes with tags, due dates, and export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local notebook file
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Category name, ID, or unique ID prefix
        #[arg(short, long, value_name = "CATEGORY")]
        category: String,
        /// Seed title and content from a template
        #[arg(long, value_enum)]
        template: Option<TemplateArg>,
        /// Note title
        #[arg(long)]
        title: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        due: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Note content; read from stdin or the editor when omitted
        content: Vec<String>,
    },
    /// List notes
    List {
        /// Only notes in this category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Only notes carrying this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Only notes whose title or content contains this text
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes by title and content
    Search {
        /// Search query
        query: String,
        /// Only notes in this category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Only notes carrying this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a note in full
    Show {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Edit a note's content or metadata
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// New due date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        /// Move the note to another category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Open the editor on the note content
        #[arg(long)]
        content: bool,
    },
    /// Delete a note
    Delete {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Move a note relative to another note
    Move {
        /// Note ID or unique ID prefix
        id: String,
        /// Place the note immediately before this note
        #[arg(long, value_name = "ID", conflicts_with = "after")]
        before: Option<String>,
        /// Place the note immediately after this note
        #[arg(long, value_name = "ID")]
        after: Option<String>,
    },
    /// Manage note tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Export a note to a file
    Export {
        /// Note ID or unique ID prefix
        id: String,
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,
        /// Optional output path (derived from the note title when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Hand a note's text to the configured share command
    Share {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a category
    Add {
        /// Category name
        name: String,
    },
    /// List categories with note counts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a category and every note in it
    Delete {
        /// Category name, ID, or unique ID prefix
        name: String,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag to a note
    Add {
        /// Note ID or unique ID prefix
        id: String,
        /// Tag to add
        tag: String,
    },
    /// Remove a tag from a note
    Remove {
        /// Note ID or unique ID prefix
        id: String,
        /// Tag to remove
        tag: String,
    },
    /// List all tags with note counts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Pdf,
}

impl ExportFormat {
    pub const fn to_format(self) -> export::ExportFormat {
        match self {
            Self::Txt => export::ExportFormat::Text,
            Self::Pdf => export::ExportFormat::Pdf,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TemplateArg {
    Academic,
    Work,
    Personal,
}

impl TemplateArg {
    pub const fn to_template(self) -> Template {
        match self {
            Self::Academic => Template::Academic,
            Self::Work => Template::Work,
            Self::Personal => Template::Personal,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusArg {
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl StatusArg {
    pub const fn to_status(self) -> Status {
        match self {
            Self::Pending => Status::Pending,
            Self::InProgress => Status::InProgress,
            Self::Completed => Status::Completed,
            Self::OnHold => Status::OnHold,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
