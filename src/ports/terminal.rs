// src/ports/terminal.rs
use crate::application::{ListView, Notifier, Row};

/// Renders list views as plain text for stdout
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &ListView) -> String {
        if view.is_empty() {
            return format!("No {}\n", view.kind());
        }
        view.rows()
            .iter()
            .map(|row| self.render_row(view.kind(), row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One block per row: id and first field, remaining non-empty fields
    /// indented below, then the delete control if the row has one.
    pub fn render_row(&self, kind: &str, row: &Row) -> String {
        let id = row.id().map_or("-".to_string(), |id| id.to_string());
        let mut fields = row.fields.iter().filter(|f| !f.is_empty());

        let mut out = format!("{:>4}  {}\n", id, fields.next().map_or("", String::as_str));
        for field in fields {
            out.push_str(&format!("      {}\n", field));
        }
        if let Some(binding) = &row.delete {
            out.push_str(&format!("      [delete: {} delete {}]\n", kind, binding.id));
        }
        out
    }
}

/// Writes notifications to stderr so stdout only carries rendered data
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn failure(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
