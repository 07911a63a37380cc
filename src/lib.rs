// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use crate::application::{
    ApiClient, CategoriesController, NotesController, Resource, ResourceController, TagsController,
    Transport,
};
use crate::cli::args::{
    Args, CategoryAction, Command, ConfigAction, NoteAction, NoteFields, TagAction,
};
use crate::domain::{CategoryDraft, DomainError, EntityId, NoteForm, TagDraft};
use crate::infrastructure::{Config, ReqwestTransport};
use crate::ports::{TerminalNotifier, TerminalPresenter};

pub fn run(args: Args) -> Result<ExitCode> {
    debug!(?args, "Starting notes-client with arguments");

    // Initialize configuration
    if let Command::Config {
        action: ConfigAction::Init { force },
    } = &args.command
    {
        return init_config(args.config.as_deref(), *force);
    }
    let config = Config::resolve(args.config.as_deref(), args.base_url.as_deref())?;
    debug!(?config, "Resolved configuration");

    // Execute use case
    let outcome = match args.command {
        Command::Notes { action } => run_notes(action, connect(&config)?, &config),
        Command::Categories { action } => run_categories(action, connect(&config)?),
        Command::Tags { action } => run_tags(action, connect(&config)?),
        // `config init` returned above
        Command::Config { .. } => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    };

    // Failures were already shown to the user by the notifier
    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "Action failed");
            ExitCode::FAILURE
        }
    })
}

fn connect(config: &Config) -> Result<ApiClient<ReqwestTransport>> {
    let transport = ReqwestTransport::new()?;
    let api = ApiClient::new(config.api.base_url.clone(), transport);
    debug!(base_url = api.base_url(), "Using backend");
    Ok(api)
}

fn controller<R: Resource, T: Transport>(api: ApiClient<T>) -> ResourceController<R, T> {
    ResourceController::new(api, Box::new(TerminalNotifier::new()))
}

fn print_view<R: Resource, T: Transport>(controller: &ResourceController<R, T>) {
    print!("{}", TerminalPresenter::new().render(controller.view()));
}

fn print_json<R: Resource, T: Transport, V: Serialize + ?Sized>(
    controller: &ResourceController<R, T>,
    value: &V,
) -> Result<(), DomainError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        controller.report(DomainError::RequestFailed(format!(
            "Failed to format JSON: {}",
            e
        )))
    })?;
    println!("{}", text);
    Ok(())
}

fn print_entity<R: Resource, T: Transport>(
    controller: &mut ResourceController<R, T>,
    id: &EntityId,
    json: bool,
) -> Result<(), DomainError> {
    let entity = controller.show(id)?;
    if json {
        print_json(controller, &entity)
    } else {
        print!("{}", TerminalPresenter::new().render_row(R::KIND, &R::row(&entity)));
        Ok(())
    }
}

fn print_list<R: Resource, T: Transport>(
    controller: &mut ResourceController<R, T>,
    json: bool,
) -> Result<(), DomainError> {
    controller.load_all()?;
    if json {
        print_json(controller, controller.entities())
    } else {
        print_view(controller);
        Ok(())
    }
}

fn run_notes<T: Transport>(
    action: NoteAction,
    api: ApiClient<T>,
    config: &Config,
) -> Result<(), DomainError> {
    let mut notes: NotesController<T> = controller(api);
    let draft = |fields: NoteFields| {
        NoteForm::from(fields).into_draft(config.notes.shape, Local::now().date_naive())
    };

    match action {
        NoteAction::List { json } => return print_list(&mut notes, json),
        NoteAction::Show { id, json } => return print_entity(&mut notes, &id, json),
        NoteAction::Create { fields } => {
            notes.create(&draft(fields))?;
        }
        NoteAction::Update { id, fields } => {
            notes.update(&id, &draft(fields))?;
        }
        NoteAction::Delete { id } => notes.remove(&id)?,
        NoteAction::AttachCategory {
            note_id,
            category_id,
        } => {
            notes.attach_category(&note_id, &category_id)?;
        }
        NoteAction::ReplaceCategory {
            note_id,
            category_id,
            new_category_id,
        } => {
            notes.replace_category(&note_id, &category_id, &new_category_id)?;
        }
        NoteAction::DetachCategory {
            note_id,
            category_id,
        } => notes.detach_category(&note_id, &category_id)?,
        NoteAction::AttachTag { note_id, tag_id } => {
            notes.attach_tag(&note_id, &tag_id)?;
        }
        NoteAction::ReplaceTag {
            note_id,
            tag_id,
            new_tag_id,
        } => {
            notes.replace_tag(&note_id, &tag_id, &new_tag_id)?;
        }
        NoteAction::DetachTag { note_id, tag_id } => notes.detach_tag(&note_id, &tag_id)?,
    }

    print_view(&notes);
    Ok(())
}

fn run_categories<T: Transport>(
    action: CategoryAction,
    api: ApiClient<T>,
) -> Result<(), DomainError> {
    let mut categories: CategoriesController<T> = controller(api);

    match action {
        CategoryAction::List { json } => return print_list(&mut categories, json),
        CategoryAction::Show { id, json } => return print_entity(&mut categories, &id, json),
        CategoryAction::Create { name } => {
            categories.create(&CategoryDraft::new(name))?;
        }
        CategoryAction::Update { id, name } => {
            categories.update(&id, &CategoryDraft::new(name))?;
        }
        CategoryAction::Delete { id } => categories.remove(&id)?,
    }

    print_view(&categories);
    Ok(())
}

fn run_tags<T: Transport>(action: TagAction, api: ApiClient<T>) -> Result<(), DomainError> {
    let mut tags: TagsController<T> = controller(api);

    match action {
        TagAction::List { json } => return print_list(&mut tags, json),
        TagAction::Show { id, json } => return print_entity(&mut tags, &id, json),
        TagAction::Create { name, colour } => {
            tags.create(&TagDraft::new(name, colour.as_deref()))?;
        }
        TagAction::Update { id, name, colour } => {
            tags.update(&id, &TagDraft::new(name, colour.as_deref()))?;
        }
        TagAction::Delete { id } => tags.remove(&id)?,
    }

    print_view(&tags);
    Ok(())
}

fn init_config(explicit: Option<&Path>, force: bool) -> Result<ExitCode> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().context("Could not find config directory")?,
    };
    Config::create_default(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use super::*;
    use crate::application::Tags;
    use crate::util::testing::{self, MockTransport, RecordingNotifier};
    use serde::Serializer;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn given_unencodable_value_when_printing_json_then_notifies_failure() {
        // Arrange
        let notifier = RecordingNotifier::new();
        let tags: TagsController<MockTransport> = ResourceController::new(
            ApiClient::new("http://localhost:8080", MockTransport::default()),
            Box::new(notifier.clone()),
        );

        // Act
        let result = print_json(&tags, &Unencodable);

        // Assert
        assert!(result.is_err());
        let failures = notifier.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Failed to format JSON"));
        assert!(failures[0].contains("not representable"));
    }
}
