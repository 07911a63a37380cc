// src/domain/mod.rs
pub mod category;
pub mod error;
pub mod id;
pub mod note;
pub mod tag;

pub use category::{Category, CategoryDraft};
pub use error::DomainError;
pub use id::EntityId;
pub use note::{Note, NoteDraft, NoteForm, NoteShape};
pub use tag::{Tag, TagDraft};
