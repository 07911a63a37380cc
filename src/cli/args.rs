// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::BASE_URL_ENV;
use crate::domain::{EntityId, NoteForm};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(short = 'u', long, value_name = "URL", env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (notes, categories, tags or config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage tags
    Tags {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Note fields as typed on the command line
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    /// Note title
    #[arg(long)]
    pub title: String,

    /// Note body
    #[arg(long, default_value = "")]
    pub content: String,

    /// Comma-separated category names
    #[arg(long, default_value = "")]
    pub categories: String,

    /// Comma-separated tag names
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Mark the note as done (dated note shape only)
    #[arg(long)]
    pub done: bool,
}

impl From<NoteFields> for NoteForm {
    fn from(fields: NoteFields) -> Self {
        NoteForm {
            title: fields.title,
            content: fields.content,
            categories: fields.categories,
            tags: fields.tags,
            done: fields.done,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteAction {
    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one note
    Show {
        #[arg(value_name = "NOTE_ID")]
        id: EntityId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Create {
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Replace a note's fields
    Update {
        #[arg(value_name = "NOTE_ID")]
        id: EntityId,

        #[command(flatten)]
        fields: NoteFields,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        id: EntityId,
    },

    /// Add an existing category to a note
    AttachCategory {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "CATEGORY_ID")]
        category_id: EntityId,
    },

    /// Swap one of a note's categories for another
    ReplaceCategory {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "CATEGORY_ID")]
        category_id: EntityId,
        #[arg(value_name = "NEW_CATEGORY_ID")]
        new_category_id: EntityId,
    },

    /// Remove a category from a note
    DetachCategory {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "CATEGORY_ID")]
        category_id: EntityId,
    },

    /// Add an existing tag to a note
    AttachTag {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "TAG_ID")]
        tag_id: EntityId,
    },

    /// Swap one of a note's tags for another
    ReplaceTag {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "TAG_ID")]
        tag_id: EntityId,
        #[arg(value_name = "NEW_TAG_ID")]
        new_tag_id: EntityId,
    },

    /// Remove a tag from a note
    DetachTag {
        #[arg(value_name = "NOTE_ID")]
        note_id: EntityId,
        #[arg(value_name = "TAG_ID")]
        tag_id: EntityId,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategoryAction {
    /// List all categories
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one category
    Show {
        #[arg(value_name = "CATEGORY_ID")]
        id: EntityId,
        #[arg(long)]
        json: bool,
    },

    /// Create a category
    Create {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename a category
    Update {
        #[arg(value_name = "CATEGORY_ID")]
        id: EntityId,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a category
    Delete {
        #[arg(value_name = "CATEGORY_ID")]
        id: EntityId,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TagAction {
    /// List all tags
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one tag
    Show {
        #[arg(value_name = "TAG_ID")]
        id: EntityId,
        #[arg(long)]
        json: bool,
    },

    /// Create a tag
    Create {
        #[arg(value_name = "NAME")]
        name: String,

        /// Hex colour, defaults to #000000
        #[arg(long)]
        colour: Option<String>,
    },

    /// Rename or recolour a tag
    Update {
        #[arg(value_name = "TAG_ID")]
        id: EntityId,
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long)]
        colour: Option<String>,
    },

    /// Delete a tag
    Delete {
        #[arg(value_name = "TAG_ID")]
        id: EntityId,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
