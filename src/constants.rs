// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and where it is used.

/// Backend address used when neither config nor flags name one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Colour given to tags created without one.
///
/// Used in: `domain/tag.rs`, `domain/note.rs`
pub const DEFAULT_TAG_COLOUR: &str = "#000000";

/// Directory under the platform config dir that holds the config file.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "notes-client";

/// Config file name inside `CONFIG_DIR_NAME`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the backend address.
///
/// Used in: `cli/args.rs`
pub const BASE_URL_ENV: &str = "NOTES_API_URL";
