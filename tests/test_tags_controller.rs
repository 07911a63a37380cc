mod helpers;

use helpers::{bodies, controller};
use notes_client::application::{Method, Tags};
use notes_client::domain::{EntityId, TagDraft};
use notes_client::util::testing::{MockTransport, RecordingNotifier};
use serde_json::json;

#[test]
fn given_tag_without_colour_when_creating_then_sends_default_black() {
    // Arrange
    let transport = MockTransport::builder()
        .with_response(Method::Post, "/tag", 201, r##"{"name": "later", "colour": "#000000"}"##)
        .with_response(Method::Get, "/tag/all", 200, bodies::TAGS)
        .build();
    let notifier = RecordingNotifier::new();
    let mut tags = controller::<Tags>(&transport, &notifier);

    // Act
    let created = tags.create(&TagDraft::new("later", None)).unwrap();

    // Assert
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({"name": "later", "colour": "#000000"}))
    );
    assert_eq!(created.map(|t| t.colour), Some("#000000".to_string()));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn given_tags_when_loading_then_rows_show_name_and_colour() {
    let transport = MockTransport::builder()
        .with_response(Method::Get, "/tag/all", 200, bodies::TAGS)
        .build();
    let notifier = RecordingNotifier::new();
    let mut tags = controller::<Tags>(&transport, &notifier);

    let view = tags.load_all().unwrap();

    let fields: Vec<_> = view.rows().iter().map(|r| r.fields[0].as_str()).collect();
    assert_eq!(fields, vec!["urgent (#ff0000)", "later (#000000)"]);
}

#[test]
fn given_second_row_when_activating_delete_then_removes_that_tag() {
    // Arrange
    let transport = MockTransport::builder()
        .with_responses(
            Method::Get,
            "/tag/all",
            vec![
                (200, bodies::TAGS),
                (200, r##"[{"id": 1, "name": "urgent", "colour": "#ff0000"}]"##),
            ],
        )
        .with_response(Method::Delete, "/tag/2", 204, "")
        .build();
    let notifier = RecordingNotifier::new();
    let mut tags = controller::<Tags>(&transport, &notifier);
    tags.load_all().unwrap();

    // Act
    tags.activate_delete(1).unwrap();

    // Assert
    assert_eq!(transport.calls()[1], (Method::Delete, "/tag/2".to_string()));
    assert!(!tags.view().contains(&EntityId::from(2)));
    assert_eq!(tags.view().rows().len(), 1);
}

#[test]
fn given_two_deletes_when_both_run_then_last_reload_wins() {
    // Arrange: the second reload reflects both deletions
    let transport = MockTransport::builder()
        .with_responses(
            Method::Get,
            "/tag/all",
            vec![
                (200, r##"[{"id": 2, "name": "later", "colour": "#000000"}]"##),
                (200, bodies::EMPTY),
            ],
        )
        .with_response(Method::Delete, "/tag/1", 204, "")
        .with_response(Method::Delete, "/tag/2", 204, "")
        .build();
    let notifier = RecordingNotifier::new();
    let mut tags = controller::<Tags>(&transport, &notifier);

    // Act
    tags.remove(&EntityId::from(1)).unwrap();
    tags.remove(&EntityId::from(2)).unwrap();

    // Assert
    assert!(tags.view().is_empty());
    assert_eq!(notifier.successes(), vec!["Deleted tag 1", "Deleted tag 2"]);
}

#[test]
fn given_server_error_when_updating_tag_then_reports_and_skips_reload() {
    let transport = MockTransport::builder()
        .with_response(Method::Put, "/tag/9", 404, "Tag with id 9 not found")
        .build();
    let notifier = RecordingNotifier::new();
    let mut tags = controller::<Tags>(&transport, &notifier);

    let result = tags.update(&EntityId::from(9), &TagDraft::new("x", Some("#123456")));

    assert!(result.is_err());
    assert_eq!(notifier.failures(), vec!["Tag with id 9 not found"]);
    assert_eq!(transport.calls(), vec![(Method::Put, "/tag/9".to_string())]);
}
