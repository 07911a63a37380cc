// src/domain/note.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_TAG_COLOUR;
use crate::domain::{Category, EntityId, Tag};

/// A note as the backend returns it.
///
/// The backend has served two note shapes over time (`title`/`content` and
/// `name`/dates/`isDone`), so everything is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub date_of_update: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// Reads `"2024-01-02"`, a timestamp starting with a date, or a
/// `[year, month, day]` array. Anything else becomes `None`.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(parse_date))
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => text
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
        Value::Array(parts) => match parts.as_slice() {
            [year, month, day, ..] => NaiveDate::from_ymd_opt(
                i32::try_from(year.as_i64()?).ok()?,
                u32::try_from(month.as_u64()?).ok()?,
                u32::try_from(day.as_u64()?).ok()?,
            ),
            _ => None,
        },
        _ => None,
    }
}

impl Note {
    /// Title, falling back to the dated shape's `name`
    pub fn heading(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or_default()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Which note body the backend expects on create/update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteShape {
    #[default]
    Content,
    Dated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColouredNameRef {
    pub name: String,
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentNoteDto {
    pub title: String,
    pub content: String,
    pub categories: Vec<NameRef>,
    pub tags: Vec<NameRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedNoteDto {
    pub name: String,
    pub date_of_creation: NaiveDate,
    pub date_of_update: NaiveDate,
    pub is_done: bool,
    pub categories: Vec<NameRef>,
    pub tags: Vec<ColouredNameRef>,
}

/// Request body for creating or updating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NoteDraft {
    Content(ContentNoteDto),
    Dated(DatedNoteDto),
}

/// Raw user input for a note, before it becomes a DTO.
///
/// `categories` and `tags` are comma-separated name lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub categories: String,
    pub tags: String,
    pub done: bool,
}

impl NoteForm {
    pub fn into_draft(self, shape: NoteShape, today: NaiveDate) -> NoteDraft {
        let categories = split_names(&self.categories)
            .into_iter()
            .map(|name| NameRef { name })
            .collect();
        let tags = split_names(&self.tags);

        match shape {
            NoteShape::Content => NoteDraft::Content(ContentNoteDto {
                title: self.title,
                content: self.content,
                categories,
                tags: tags.into_iter().map(|name| NameRef { name }).collect(),
            }),
            NoteShape::Dated => NoteDraft::Dated(DatedNoteDto {
                name: self.title,
                date_of_creation: today,
                date_of_update: today,
                is_done: self.done,
                categories,
                tags: tags
                    .into_iter()
                    .map(|name| ColouredNameRef {
                        name,
                        colour: DEFAULT_TAG_COLOUR.to_string(),
                    })
                    .collect(),
            }),
        }
    }
}

/// Split a comma-separated list of names, dropping blank entries.
///
/// # Examples
///
/// ```
/// use notes_client::domain::note::split_names;
///
/// assert_eq!(split_names("a, , b"), vec!["a", "b"]);
/// ```
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
