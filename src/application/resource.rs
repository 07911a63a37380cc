// src/application/resource.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::application::list_view::Row;
use crate::domain::{Category, CategoryDraft, EntityId, Note, NoteDraft, Tag, TagDraft};

/// Describes one REST collection: where it lives, what it returns and how
/// its entities are shown.
pub trait Resource {
    type Entity: DeserializeOwned + Serialize + Debug + Clone;
    type Draft: Serialize + Debug;

    /// Collection path, e.g. `/notes`
    const COLLECTION: &'static str;
    /// Plural name used for list screens
    const KIND: &'static str;
    /// Singular name used in notifications
    const SINGULAR: &'static str;

    fn list_path() -> String {
        format!("{}/all", Self::COLLECTION)
    }

    fn item_path(id: &EntityId) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }

    fn entity_id(entity: &Self::Entity) -> Option<&EntityId>;

    fn draft_label(draft: &Self::Draft) -> &str;

    /// Display lines of one entity, first line is the heading
    fn fields(entity: &Self::Entity) -> Vec<String>;

    fn row(entity: &Self::Entity) -> Row {
        Row::new(Self::entity_id(entity), Self::fields(entity))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Notes;

#[derive(Debug, Clone, Copy)]
pub struct Categories;

#[derive(Debug, Clone, Copy)]
pub struct Tags;

impl Resource for Notes {
    type Entity = Note;
    type Draft = NoteDraft;

    const COLLECTION: &'static str = "/notes";
    const KIND: &'static str = "notes";
    const SINGULAR: &'static str = "note";

    fn entity_id(entity: &Note) -> Option<&EntityId> {
        entity.id.as_ref()
    }

    fn draft_label(draft: &NoteDraft) -> &str {
        match draft {
            NoteDraft::Content(dto) => &dto.title,
            NoteDraft::Dated(dto) => &dto.name,
        }
    }

    fn fields(note: &Note) -> Vec<String> {
        let names = |items: Vec<&str>| items.join(", ");
        let mut fields = vec![
            note.heading().to_string(),
            note.content.clone().unwrap_or_default(),
            format!(
                "Categories: {}",
                names(note.categories().iter().map(|c| c.name.as_str()).collect())
            ),
            format!(
                "Tags: {}",
                names(note.tags().iter().map(|t| t.name.as_str()).collect())
            ),
        ];
        if let Some(done) = note.is_done {
            fields.push(format!("Done: {}", if done { "yes" } else { "no" }));
        }
        fields
    }
}

impl Resource for Categories {
    type Entity = Category;
    type Draft = CategoryDraft;

    const COLLECTION: &'static str = "/category";
    const KIND: &'static str = "categories";
    const SINGULAR: &'static str = "category";

    fn entity_id(entity: &Category) -> Option<&EntityId> {
        entity.id.as_ref()
    }

    fn draft_label(draft: &CategoryDraft) -> &str {
        &draft.name
    }

    fn fields(category: &Category) -> Vec<String> {
        vec![category.name.clone()]
    }
}

impl Resource for Tags {
    type Entity = Tag;
    type Draft = TagDraft;

    const COLLECTION: &'static str = "/tag";
    const KIND: &'static str = "tags";
    const SINGULAR: &'static str = "tag";

    fn entity_id(entity: &Tag) -> Option<&EntityId> {
        entity.id.as_ref()
    }

    fn draft_label(draft: &TagDraft) -> &str {
        &draft.name
    }

    fn fields(tag: &Tag) -> Vec<String> {
        vec![format!("{} ({})", tag.name, tag.colour)]
    }
}
