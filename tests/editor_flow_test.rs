//! Full keyboard flows through the App: typing, picking, deleting.

mod common;

use common::{press, test_app, texts, type_str};
use crossterm::event::KeyCode;
use tagstrip::app::Focus;
use tagstrip::editor::SegmentKind;

#[test]
fn test_type_then_pick_promotes_and_appends() {
    let mut app = test_app();
    type_str(&mut app, "my site uses");

    // Tab to the palette, pick the first label
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Palette);
    press(&mut app, KeyCode::Enter);

    assert_eq!(texts(&app), vec!["my site uses", "HTML"]);
    assert_eq!(app.editor.segments()[0].kind(), SegmentKind::Text);
    assert_eq!(app.editor.segments()[1].kind(), SegmentKind::Tag);
    assert!(app.editor.input.is_empty());
    assert_eq!(app.focus, Focus::ActiveInput, "focus returns to the input");
}

#[test]
fn test_pick_with_empty_input_appends_only_tag() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right); // CSS
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec!["CSS"]);
}

#[test]
fn test_caret_position_splits_text_segment() {
    let mut app = test_app();
    type_str(&mut app, "hello");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter); // [Text("hello"), Tag("HTML")]

    // Walk into the strip onto the text segment; caret starts at its end
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left); // onto Text("hello")
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right); // caret offset 2 of 5: first half

    press(&mut app, KeyCode::BackTab); // back to the palette
    assert_eq!(app.focus, Focus::Palette);
    press(&mut app, KeyCode::Right); // CSS
    press(&mut app, KeyCode::Enter);

    assert_eq!(texts(&app), vec!["CSS", "hello", "HTML"]);
}

#[test]
fn test_second_half_caret_puts_tag_after() {
    let mut app = test_app();
    type_str(&mut app, "hello");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left); // Text("hello"), caret at end (5)
    press(&mut app, KeyCode::Left); // caret 4: second half

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(texts(&app), vec!["hello", "CSS", "HTML"]);
}

#[test]
fn test_backspace_rule_in_empty_input() {
    let mut app = test_app();
    press(&mut app, KeyCode::Backspace); // empty strip: no-op
    assert!(texts(&app).is_empty());

    type_str(&mut app, "note");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter); // [Text("note"), Tag("HTML")]

    press(&mut app, KeyCode::Backspace); // removes the trailing tag
    assert_eq!(texts(&app), vec!["note"]);

    press(&mut app, KeyCode::Backspace); // trailing segment is text: no-op
    assert_eq!(texts(&app), vec!["note"]);
}

#[test]
fn test_editing_keeps_segment_identity() {
    let mut app = test_app();
    type_str(&mut app, "draft");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    let id = app.editor.segments()[0].id();

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left); // onto the text segment, caret at end
    type_str(&mut app, "!!");

    assert_eq!(app.editor.segment(id).unwrap().text(), "draft!!");
    assert_eq!(app.editor.segment_index(id), Some(0));
}

#[test]
fn test_escape_returns_focus_to_input() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Palette);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, Focus::ActiveInput);
}

#[test]
fn test_deleting_pending_target_then_picking_is_noop() {
    let mut app = test_app();
    type_str(&mut app, "hello");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter); // [Text, Tag]
    let id = app.editor.segments()[0].id();

    // Focus the text segment so it becomes the pending target
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.editor.pending().unwrap().segment_id, id);

    // Delete it out from under the pending point
    app.editor.delete_segment(id);

    press(&mut app, KeyCode::BackTab); // palette
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec!["HTML"], "pick dropped, nothing appended");
    assert!(app.editor.pending().is_none());
}
