// src/application/mod.rs
pub mod api;
pub mod controller;
pub mod list_view;
pub mod note_links;
pub mod notifier;
pub mod resource;

pub use api::{ApiClient, ApiRequest, Method, RawResponse, Transport};
pub use controller::ResourceController;
pub use list_view::{DeleteBinding, ListView, Row};
pub use note_links::LinkKind;
pub use notifier::Notifier;
pub use resource::{Categories, Notes, Resource, Tags};

pub type NotesController<T> = ResourceController<Notes, T>;
pub type CategoriesController<T> = ResourceController<Categories, T>;
pub type TagsController<T> = ResourceController<Tags, T>;
