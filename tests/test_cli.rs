use clap::Parser;
use notes_client::cli::args::{
    Args, CategoryAction, Command, ConfigAction, NoteAction, NoteFields, TagAction,
};
use notes_client::domain::EntityId;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notes-client", "list"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without resource subcommand");
}

#[test]
fn given_notes_list_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notes-client", "notes", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Notes {
            action: NoteAction::List { json },
        } => assert!(!json),
        _ => panic!("Expected notes list command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_note_create_when_parsing_then_collects_fields_with_defaults() {
    // Arrange
    let args = vec![
        "notes-client",
        "notes",
        "create",
        "--title",
        "Shopping",
        "--categories",
        "Home, ",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Notes {
            action: NoteAction::Create { fields },
        } => assert_eq!(
            fields,
            NoteFields {
                title: "Shopping".to_string(),
                content: String::new(),
                categories: "Home, ".to_string(),
                tags: String::new(),
                done: false,
            }
        ),
        _ => panic!("Expected notes create command"),
    }
}

#[test]
fn given_note_create_without_title_when_parsing_then_fails() {
    let args = vec!["notes-client", "notes", "create", "--content", "body"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_note_delete_when_parsing_then_parses_id() {
    // Arrange
    let args = vec!["notes-client", "notes", "delete", "42"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Notes {
            action: NoteAction::Delete { id },
        } => assert_eq!(id, EntityId::from(42)),
        _ => panic!("Expected notes delete command"),
    }
}

#[test]
fn given_id_with_slash_when_parsing_then_fails() {
    let args = vec!["notes-client", "tags", "delete", "1/../2"];

    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_dot_segment_id_when_parsing_then_fails() {
    let delete = vec!["notes-client", "categories", "delete", ".."];
    let replace = vec!["notes-client", "notes", "replace-category", "1", "..", "3"];

    assert!(Args::try_parse_from(delete).is_err());
    assert!(Args::try_parse_from(replace).is_err());
}

#[test]
fn given_replace_category_when_parsing_then_reads_three_ids() {
    let args = vec!["notes-client", "notes", "replace-category", "1", "2", "3"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Notes {
            action:
                NoteAction::ReplaceCategory {
                    note_id,
                    category_id,
                    new_category_id,
                },
        } => {
            assert_eq!(note_id, EntityId::from(1));
            assert_eq!(category_id, EntityId::from(2));
            assert_eq!(new_category_id, EntityId::from(3));
        }
        _ => panic!("Expected notes replace-category command"),
    }
}

#[test]
fn given_tag_create_with_colour_when_parsing_then_keeps_colour() {
    let args = vec!["notes-client", "tags", "create", "urgent", "--colour", "#ff0000"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Tags {
            action: TagAction::Create { name, colour },
        } => {
            assert_eq!(name, "urgent");
            assert_eq!(colour.as_deref(), Some("#ff0000"));
        }
        _ => panic!("Expected tags create command"),
    }
}

#[test]
fn given_category_show_with_json_when_parsing_then_json_is_true() {
    let args = vec!["notes-client", "categories", "show", "--json", "5"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Categories {
            action: CategoryAction::Show { id, json },
        } => {
            assert_eq!(id, EntityId::from(5));
            assert!(json);
        }
        _ => panic!("Expected categories show command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "notes-client",
        "categories",
        "list",
        "-u",
        "http://notes.internal:9000",
        "-c",
        "/etc/notes-client.toml",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.base_url.as_deref(), Some("http://notes.internal:9000"));
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/etc/notes-client.toml"))
    );
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_config_init_with_force_when_parsing_then_force_is_true() {
    let args = vec!["notes-client", "config", "init", "--force"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("Expected config init command"),
    }
}
