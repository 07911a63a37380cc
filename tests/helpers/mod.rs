use notes_client::application::{ApiClient, Resource, ResourceController};
use notes_client::util::testing::{MockTransport, RecordingNotifier};

pub const BASE_URL: &str = "http://localhost:8080";

/// A controller wired to the given mock transport and notifier
pub fn controller<R: Resource>(
    transport: &MockTransport,
    notifier: &RecordingNotifier,
) -> ResourceController<R, MockTransport> {
    ResourceController::new(
        ApiClient::new(BASE_URL, transport.clone()),
        Box::new(notifier.clone()),
    )
}

/// Canned backend payloads
#[allow(dead_code)]
pub mod bodies {
    pub const NOTES: &str = r#"[
        {"id": 1, "title": "Shopping", "content": "milk",
         "categories": [{"name": "Home"}], "tags": [{"name": "weekly"}]},
        {"id": 2, "title": "Taxes", "content": "",
         "categories": [], "tags": null}
    ]"#;

    pub const NOTES_WITHOUT_TAXES: &str = r#"[
        {"id": 1, "title": "Shopping", "content": "milk",
         "categories": [{"name": "Home"}], "tags": [{"name": "weekly"}]}
    ]"#;

    pub const CATEGORIES: &str = r#"[{"id": 1, "name": "Home"}, {"id": 2, "name": "Work"}]"#;

    pub const TAGS: &str = r##"[
        {"id": 1, "name": "urgent", "colour": "#ff0000"},
        {"id": 2, "name": "later", "colour": "#000000"}
    ]"##;

    pub const EMPTY: &str = "[]";
}
