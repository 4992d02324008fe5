//! End-to-end command flows against the App state machine: the paste
//! pipeline, validate/prettify/minify, tree building and jump-to-key,
//! history restore/clear, and the download action.

use jsonscope::app::{App, InputMode};
use jsonscope::history::HistoryStore;
use jsonscope::notify::AlertKind;
use jsonscope::theme::Theme;

fn test_app() -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    let mut app = App::new(Theme::Dark, store);
    app.set_export_dir(dir.path().to_path_buf());
    (dir, app)
}

const FORMATTED: &str = "{\n    \"x\": 1\n}";

#[test]
fn paste_formats_saves_and_builds_tree() {
    let (dir, mut app) = test_app();

    app.paste("{\"x\":1}");

    assert_eq!(app.editor().text(), FORMATTED);
    assert!(!app.visible_tree_rows().is_empty(), "tree was rebuilt");
    assert_eq!(app.alert().map(|(_, k)| k), Some(AlertKind::Success));

    let entries = HistoryStore::new(dir.path().join("history.json")).list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, FORMATTED, "snapshot is the formatted text");
}

#[test]
fn paste_of_invalid_json_leaves_content_untouched() {
    let (dir, mut app) = test_app();
    app.editor_mut().set_text("keep me");

    app.paste("{not json");

    assert_eq!(app.editor().text(), "keep me");
    assert_eq!(app.alert().map(|(_, k)| k), Some(AlertKind::Error));
    assert!(HistoryStore::new(dir.path().join("history.json"))
        .list()
        .is_empty());
}

#[test]
fn validate_records_snapshot_without_mutating_content() {
    let (dir, mut app) = test_app();
    app.editor_mut().set_text("{\"a\": 1}");

    app.validate();

    assert_eq!(app.editor().text(), "{\"a\": 1}", "content unchanged");
    assert_eq!(
        app.alert(),
        Some(("JSON is valid", AlertKind::Success))
    );
    let entries = HistoryStore::new(dir.path().join("history.json")).list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "{\"a\": 1}", "raw text is snapshotted");
}

#[test]
fn validate_failure_reports_the_parser_message() {
    let (dir, mut app) = test_app();
    app.editor_mut().set_text("{broken");

    app.validate();

    let (msg, kind) = app.alert().expect("alert shown");
    assert_eq!(kind, AlertKind::Error);
    assert!(msg.starts_with("Invalid JSON:"));
    assert!(HistoryStore::new(dir.path().join("history.json"))
        .list()
        .is_empty());
}

#[test]
fn repeated_validates_respect_history_capacity() {
    let (dir, mut app) = test_app();
    for i in 0..25 {
        app.editor_mut().set_text(&format!("{{\"n\":{i}}}"));
        app.validate();
    }
    let entries = HistoryStore::new(dir.path().join("history.json")).list();
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0].content, "{\"n\":24}");
}

#[test]
fn prettify_and_minify_round_trip() {
    let (_dir, mut app) = test_app();
    app.editor_mut().set_text("{\"x\":1}");

    app.prettify();
    assert_eq!(app.editor().text(), FORMATTED);

    app.minify();
    assert_eq!(app.editor().text(), "{\"x\":1}");
}

#[test]
fn prettify_guard_keeps_invalid_content() {
    let (_dir, mut app) = test_app();
    app.editor_mut().set_text("{broken");

    app.prettify();
    assert_eq!(app.editor().text(), "{broken");
    assert_eq!(app.alert().map(|(_, k)| k), Some(AlertKind::Error));

    app.minify();
    assert_eq!(app.editor().text(), "{broken");
}

#[test]
fn build_tree_failure_uses_the_blocking_modal() {
    let (_dir, mut app) = test_app();
    app.editor_mut().set_text("{broken");

    app.build_tree();

    assert_eq!(app.modal_error(), Some("Invalid JSON"));
    assert!(app.alert().is_none(), "footer notifier stays silent");
    assert!(app.visible_tree_rows().is_empty());

    app.dismiss_modal();
    assert!(app.modal_error().is_none());
}

#[test]
fn tree_rows_follow_key_order_and_jump_moves_the_cursor() {
    let (_dir, mut app) = test_app();

    app.paste("{\"a\":1,\"b\":[2,3]}");
    // {
    //     "a": 1,
    //     "b": [ ... ]
    // }
    let rows = app.visible_tree_rows();
    assert_eq!(rows[0].text, "{");
    assert_eq!(rows[1].key.as_deref(), Some("a"));
    assert_eq!(rows[2].key.as_deref(), Some("b"));

    app.next_pane();
    assert_eq!(app.pane(), 1);

    // Select the "a" row and activate it
    app.tree_down();
    app.tree_activate();

    assert_eq!(app.pane(), 0, "jump focuses the editor");
    assert_eq!(app.editor().cursor(), (1, 4), "cursor at the first \"a\"");
}

#[test]
fn tree_toggle_collapses_the_selected_container() {
    let (_dir, mut app) = test_app();
    app.paste("{\"a\":1,\"b\":[2,3]}");

    let before = app.visible_tree_rows().len();
    app.tree_toggle(); // root is selected by default
    let after = app.visible_tree_rows().len();

    assert!(after < before);
    assert_eq!(after, 2, "open and close bracket rows stay visible");
}

#[test]
fn restore_replaces_content_verbatim_without_rebuilding_the_tree() {
    let (_dir, mut app) = test_app();
    app.editor_mut().set_text("{\"old\": true}");
    app.validate();

    app.editor_mut().set_text("something else");
    let tree_len = app.visible_tree_rows().len();

    app.open_history();
    assert_eq!(app.input_mode(), InputMode::History);
    app.restore_selected();

    assert_eq!(app.editor().text(), "{\"old\": true}");
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert_eq!(
        app.visible_tree_rows().len(),
        tree_len,
        "restore does not rebuild the tree"
    );
}

#[test]
fn clear_history_requires_confirmation() {
    let (dir, mut app) = test_app();
    app.editor_mut().set_text("{}");
    app.validate();

    app.open_history();
    app.request_clear_history();
    assert_eq!(app.input_mode(), InputMode::ConfirmClear);

    // Declining keeps the persisted log and the visible list
    app.cancel_clear_history();
    assert_eq!(app.history_entries().len(), 1);
    assert_eq!(
        HistoryStore::new(dir.path().join("history.json")).list().len(),
        1
    );

    // Confirming empties both immediately
    app.request_clear_history();
    app.confirm_clear_history();
    assert!(app.history_entries().is_empty());
    assert!(HistoryStore::new(dir.path().join("history.json"))
        .list()
        .is_empty());
}

#[test]
fn download_writes_data_json_byte_for_byte() {
    let (dir, mut app) = test_app();
    app.editor_mut().set_text("{}");

    app.download();

    let exported = std::fs::read(dir.path().join("data.json")).unwrap();
    assert_eq!(exported, b"{}");
    assert_eq!(app.alert().map(|(_, k)| k), Some(AlertKind::Success));

    // Invalid content downloads unvalidated, as-is
    app.editor_mut().set_text("{broken");
    app.download();
    let exported = std::fs::read(dir.path().join("data.json")).unwrap();
    assert_eq!(exported, b"{broken");
}

#[test]
fn toggle_theme_swaps_scheme_and_editor_palette() {
    let (_dir, mut app) = test_app();
    let hacker_fg = app.editor().palette().foreground;

    app.toggle_theme();
    assert_eq!(app.theme_kind(), Theme::Light);
    assert_ne!(app.editor().palette().foreground, hacker_fg);

    // Toggling back lands on the built-in dark palette, not the custom one
    app.toggle_theme();
    assert_eq!(app.theme_kind(), Theme::Dark);
    assert_ne!(app.editor().palette().foreground, hacker_fg);
}
