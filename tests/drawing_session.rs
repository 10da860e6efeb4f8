use eframe_sketch::document::Document;
use eframe_sketch::drawable::Drawable;
use eframe_sketch::state::{EditorState, THICK_WIDTH, THIN_WIDTH};
use egui::{Pos2, pos2};

// Helper to drive a full stroke gesture through the editor
fn draw_stroke(editor: &mut EditorState, doc: &mut Document, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("need at least one point");
    editor.on_pointer_down(*first, doc);
    for point in rest {
        editor.on_pointer_move(*point, true, doc);
    }
    editor.on_pointer_up(doc);
}

fn stroke_points(drawable: &Drawable) -> Vec<Pos2> {
    match drawable {
        Drawable::Stroke(stroke) => stroke.points().to_vec(),
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_stroke_gesture_commits_once() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    draw_stroke(
        &mut editor,
        &mut doc,
        &[pos2(10.0, 10.0), pos2(20.0, 15.0), pos2(30.0, 30.0)],
    );

    assert_eq!(doc.drawables().len(), 1);
    assert_eq!(
        stroke_points(&doc.drawables()[0]),
        vec![pos2(10.0, 10.0), pos2(20.0, 15.0), pos2(30.0, 30.0)]
    );
    assert!(editor.is_idle());
}

#[test]
fn test_undo_redo_round_trip_through_gestures() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    draw_stroke(&mut editor, &mut doc, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    draw_stroke(&mut editor, &mut doc, &[pos2(5.0, 5.0), pos2(6.0, 6.0)]);

    // commit A, commit B, undo -> committed=[A], redo=[B]
    assert!(doc.undo());
    assert_eq!(doc.drawables().len(), 1);
    assert_eq!(stroke_points(&doc.drawables()[0])[0], pos2(1.0, 1.0));
    assert!(doc.can_redo());

    // redo -> committed=[A, B], redo=[]
    assert!(doc.redo());
    assert_eq!(doc.drawables().len(), 2);
    assert_eq!(stroke_points(&doc.drawables()[1])[0], pos2(5.0, 5.0));
    assert!(!doc.can_redo());
}

#[test]
fn test_new_stroke_after_undo_discards_redo() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    draw_stroke(&mut editor, &mut doc, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    draw_stroke(&mut editor, &mut doc, &[pos2(5.0, 5.0), pos2(6.0, 6.0)]);
    doc.undo();
    assert!(doc.can_redo());

    draw_stroke(&mut editor, &mut doc, &[pos2(9.0, 9.0), pos2(9.5, 9.5)]);
    assert!(!doc.can_redo());
    assert_eq!(doc.drawables().len(), 2);
}

#[test]
fn test_sticker_placement_and_drag() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();
    editor.select_sticker("🍎", &mut doc);

    // Place a sticker at (50, 50)
    editor.on_pointer_down(pos2(50.0, 50.0), &mut doc);
    editor.on_pointer_up(&mut doc);
    assert_eq!(doc.drawables().len(), 1);

    // Pointer-down near the center begins a drag, not a new placement
    editor.on_pointer_down(pos2(52.0, 51.0), &mut doc);
    editor.on_pointer_move(pos2(80.0, 80.0), true, &mut doc);
    editor.on_pointer_up(&mut doc);

    assert_eq!(doc.drawables().len(), 1);
    let sticker = doc.drawables()[0].as_sticker().expect("sticker survives");
    assert_eq!(sticker.position(), pos2(80.0, 80.0));
}

#[test]
fn test_sticker_drag_far_from_center_places_new_one() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();
    editor.select_sticker("⭐", &mut doc);

    editor.on_pointer_down(pos2(50.0, 50.0), &mut doc);
    editor.on_pointer_up(&mut doc);

    // Outside the pick radius: a second sticker is placed instead
    editor.on_pointer_down(pos2(120.0, 120.0), &mut doc);
    editor.on_pointer_up(&mut doc);
    assert_eq!(doc.drawables().len(), 2);
}

#[test]
fn test_clear_empties_history_and_redo() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    draw_stroke(&mut editor, &mut doc, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    draw_stroke(&mut editor, &mut doc, &[pos2(3.0, 3.0), pos2(4.0, 4.0)]);
    doc.undo();

    doc.clear();
    assert!(doc.is_empty());
    assert!(!doc.can_undo());
    assert!(!doc.can_redo());
    assert!(!doc.undo());
}

#[test]
fn test_switching_tools_mid_gesture_commits_work_in_progress() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    editor.select_brush(THIN_WIDTH, &mut doc);
    editor.on_pointer_down(pos2(10.0, 10.0), &mut doc);
    editor.on_pointer_move(pos2(15.0, 15.0), true, &mut doc);

    // Switching to the thick brush finishes the thin stroke first
    editor.select_brush(THICK_WIDTH, &mut doc);
    assert_eq!(doc.drawables().len(), 1);
    match &doc.drawables()[0] {
        Drawable::Stroke(stroke) => assert_eq!(stroke.width(), THIN_WIDTH),
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_cursor_preview_follows_and_leaves() {
    let mut doc = Document::new();
    let mut editor = EditorState::new();

    assert!(editor.cursor().is_none());
    editor.on_pointer_move(pos2(40.0, 40.0), false, &mut doc);
    let cursor = editor.cursor().expect("cursor preview after move");
    assert_eq!(cursor.position, pos2(40.0, 40.0));

    editor.on_pointer_leave();
    assert!(editor.cursor().is_none());
}
