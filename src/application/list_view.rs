// src/application/list_view.rs
use crate::domain::EntityId;

/// Delete control attached to a rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBinding {
    pub id: EntityId,
}

/// One rendered entity: display lines plus its delete control.
///
/// Entities the server returned without an id get no delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<String>,
    pub delete: Option<DeleteBinding>,
}

impl Row {
    pub fn new(id: Option<&EntityId>, fields: Vec<String>) -> Self {
        Self {
            fields,
            delete: id.cloned().map(|id| DeleteBinding { id }),
        }
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.delete.as_ref().map(|binding| &binding.id)
    }
}

/// The list container of one resource screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    kind: &'static str,
    rows: Vec<Row>,
}

impl ListView {
    pub fn new(kind: &'static str) -> Self {
        Self { kind, rows: vec![] }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every current row and install `rows` in the given order
    pub fn replace(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.clear();
        self.rows.extend(rows);
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.rows.iter().any(|row| row.id() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str) -> Row {
        Row::new(Some(&EntityId::from(id)), vec![name.to_string()])
    }

    #[test]
    fn given_populated_view_when_replacing_with_nothing_then_has_no_rows() {
        // Arrange
        let mut view = ListView::new("tags");
        view.replace(vec![row(1, "a"), row(2, "b")]);

        // Act
        view.replace(Vec::new());

        // Assert
        assert!(view.is_empty());
    }

    #[test]
    fn given_rows_when_replacing_then_keeps_server_order_and_drops_old_rows() {
        let mut view = ListView::new("tags");
        view.replace(vec![row(1, "old")]);

        view.replace(vec![row(3, "c"), row(2, "b")]);

        let ids: Vec<_> = view.rows().iter().filter_map(Row::id).map(EntityId::as_str).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert!(!view.contains(&EntityId::from(1)));
    }

    #[test]
    fn given_entity_without_id_when_building_row_then_has_no_delete_control() {
        let row = Row::new(None, vec!["orphan".to_string()]);
        assert_eq!(row.delete, None);
        assert_eq!(row.id(), None);
    }
}
