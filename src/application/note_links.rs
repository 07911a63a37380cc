// src/application/note_links.rs
//
// Attaching categories and tags to existing notes. The backend exposes these
// on the category and tag collections, keyed by both ids.
use serde_json::Value;

use crate::application::api::{decode, Method, Transport};
use crate::application::controller::ResourceController;
use crate::application::resource::Notes;
use crate::domain::{DomainError, EntityId, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Category,
    Tag,
}

impl LinkKind {
    fn collection(self) -> &'static str {
        match self {
            LinkKind::Category => "/category",
            LinkKind::Tag => "/tag",
        }
    }

    fn replacement_segment(self) -> &'static str {
        match self {
            LinkKind::Category => "newCategory",
            LinkKind::Tag => "newTag",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LinkKind::Category => "category",
            LinkKind::Tag => "tag",
        }
    }
}

/// `/category/{target}/note/{note}` or `/tag/{target}/note/{note}`
pub fn link_path(kind: LinkKind, target: &EntityId, note: &EntityId) -> String {
    format!("{}/{}/note/{}", kind.collection(), target, note)
}

pub fn replacement_path(
    kind: LinkKind,
    target: &EntityId,
    note: &EntityId,
    replacement: &EntityId,
) -> String {
    format!(
        "{}/{}/{}",
        link_path(kind, target, note),
        kind.replacement_segment(),
        replacement
    )
}

impl<T: Transport> ResourceController<Notes, T> {
    pub fn attach(
        &mut self,
        kind: LinkKind,
        note: &EntityId,
        target: &EntityId,
    ) -> Result<Option<Note>, DomainError> {
        let path = link_path(kind, target, note);
        let done = format!("Added {} {} to note {}", kind.label(), target, note);
        let response = self.mutate(Method::Post, &path, None, &done)?;
        Ok(echoed_note(Method::Post, &path, response))
    }

    pub fn replace(
        &mut self,
        kind: LinkKind,
        note: &EntityId,
        target: &EntityId,
        replacement: &EntityId,
    ) -> Result<Option<Note>, DomainError> {
        let path = replacement_path(kind, target, note, replacement);
        let done = format!(
            "Replaced {} {} with {} on note {}",
            kind.label(),
            target,
            replacement,
            note
        );
        let response = self.mutate(Method::Put, &path, None, &done)?;
        Ok(echoed_note(Method::Put, &path, response))
    }

    pub fn detach(
        &mut self,
        kind: LinkKind,
        note: &EntityId,
        target: &EntityId,
    ) -> Result<(), DomainError> {
        let path = link_path(kind, target, note);
        let done = format!("Removed {} {} from note {}", kind.label(), target, note);
        self.mutate(Method::Delete, &path, None, &done)?;
        Ok(())
    }

    pub fn attach_category(
        &mut self,
        note: &EntityId,
        category: &EntityId,
    ) -> Result<Option<Note>, DomainError> {
        self.attach(LinkKind::Category, note, category)
    }

    pub fn replace_category(
        &mut self,
        note: &EntityId,
        category: &EntityId,
        replacement: &EntityId,
    ) -> Result<Option<Note>, DomainError> {
        self.replace(LinkKind::Category, note, category, replacement)
    }

    pub fn detach_category(
        &mut self,
        note: &EntityId,
        category: &EntityId,
    ) -> Result<(), DomainError> {
        self.detach(LinkKind::Category, note, category)
    }

    pub fn attach_tag(&mut self, note: &EntityId, tag: &EntityId) -> Result<Option<Note>, DomainError> {
        self.attach(LinkKind::Tag, note, tag)
    }

    pub fn replace_tag(
        &mut self,
        note: &EntityId,
        tag: &EntityId,
        replacement: &EntityId,
    ) -> Result<Option<Note>, DomainError> {
        self.replace(LinkKind::Tag, note, tag, replacement)
    }

    pub fn detach_tag(&mut self, note: &EntityId, tag: &EntityId) -> Result<(), DomainError> {
        self.detach(LinkKind::Tag, note, tag)
    }
}

fn echoed_note(method: Method, path: &str, response: Option<Value>) -> Option<Note> {
    response.and_then(|value| decode(method, path, value).ok())
}
