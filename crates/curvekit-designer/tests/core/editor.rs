use curvekit_designer::{
    Editor, EditorCommand, EditorEvent, EditorOutcome, InteractionState, Key, Modifiers,
    NodeKind, PathError, Point, PointRole, Selection,
};
use curvekit_settings::EditorSettings;

fn down(editor: &mut Editor, x: f64, y: f64, modifiers: Modifiers) -> EditorOutcome {
    editor.handle_event(EditorEvent::PointerDown { x, y, modifiers })
}

fn moved(editor: &mut Editor, x: f64, y: f64) -> EditorOutcome {
    editor.handle_event(EditorEvent::PointerMove { x, y })
}

fn up(editor: &mut Editor, x: f64, y: f64) -> EditorOutcome {
    editor.handle_event(EditorEvent::PointerUp { x, y })
}

fn click(editor: &mut Editor, x: f64, y: f64) -> EditorOutcome {
    down(editor, x, y, Modifiers::NONE);
    up(editor, x, y)
}

fn square_editor() -> Editor {
    let mut editor = Editor::new();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
        assert_eq!(click(&mut editor, x, y), EditorOutcome::Committed);
    }
    editor
}

#[test]
fn test_square_symmetry_scenario() {
    let mut editor = square_editor();
    assert_eq!(
        editor.execute(EditorCommand::ToggleClosePath),
        EditorOutcome::Committed
    );
    assert!(editor.path().is_closed());

    editor.execute(EditorCommand::ToggleApplySymmetry);
    let entries = editor.history().len();
    assert_eq!(
        down(&mut editor, 50.0, 0.0, Modifiers::NONE),
        EditorOutcome::Committed
    );
    assert!(editor.state().is_idle());
    assert_eq!(editor.history().len(), entries + 1);

    let path = editor.path();
    assert_eq!(path.len(), 6);
    assert!(path.is_closed());
    // Every anchor has its mirror image about y = 0 in the path.
    for node in path.nodes() {
        let mirror = Point::new(node.anchor.x, -node.anchor.y);
        assert!(path
            .nodes()
            .iter()
            .any(|other| other.anchor.distance_to(&mirror) < 1e-9));
    }

    // The symmetry click neither appends nor starts a drag.
    assert_eq!(up(&mut editor, 50.0, 0.0), EditorOutcome::Unchanged);
    assert_eq!(editor.path().len(), 6);
}

#[test]
fn test_symmetry_on_open_path_resets_pick_mode() {
    let mut editor = square_editor();
    let before = editor.path().clone();
    editor.execute(EditorCommand::ToggleApplySymmetry);
    let outcome = down(&mut editor, 50.0, 0.0, Modifiers::NONE);
    assert!(matches!(
        outcome,
        EditorOutcome::Rejected(PathError::NoEligiblePath { .. })
    ));
    assert_eq!(editor.state(), InteractionState::Idle);
    assert_eq!(editor.path(), &before);
}

#[test]
fn test_symmetry_on_curved_edge_reports_and_leaves_path() {
    let mut editor = square_editor();
    editor.execute(EditorCommand::ToggleClosePath);

    // Drag node 0's outgoing handle off the bottom edge. Handles are pickable
    // on closed paths.
    let handle = editor.path().nodes()[0].ctrl2;
    down(&mut editor, handle.x, handle.y, Modifiers::NONE);
    assert_eq!(
        editor.state(),
        InteractionState::Dragging {
            index: 0,
            role: PointRole::Ctrl2
        }
    );
    moved(&mut editor, 40.0, 30.0);
    assert_eq!(up(&mut editor, 40.0, 30.0), EditorOutcome::Committed);

    let before = editor.path().clone();
    editor.execute(EditorCommand::ToggleApplySymmetry);
    assert_eq!(
        down(&mut editor, 50.0, 12.0, Modifiers::NONE),
        EditorOutcome::Rejected(PathError::NotStraightEdge { segment: 0 })
    );
    assert_eq!(editor.path(), &before);
    assert!(editor.state().is_idle());
}

#[test]
fn test_undo_redo_replay() {
    let mut editor = square_editor();
    for _ in 0..4 {
        assert_eq!(editor.execute(EditorCommand::Undo), EditorOutcome::Updated);
    }
    assert!(editor.path().is_empty());
    assert_eq!(editor.execute(EditorCommand::Undo), EditorOutcome::Unchanged);

    for _ in 0..4 {
        editor.execute(EditorCommand::Redo);
    }
    assert_eq!(editor.path().len(), 4);
    assert_eq!(editor.execute(EditorCommand::Redo), EditorOutcome::Unchanged);
}

#[test]
fn test_click_near_segment_inserts_and_drags() {
    let mut editor = Editor::new();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 200.0, 0.0);
    let committed = editor.history().len();

    assert_eq!(
        down(&mut editor, 100.0, 4.0, Modifiers::NONE),
        EditorOutcome::Updated
    );
    assert_eq!(editor.path().len(), 3);
    assert_eq!(editor.path().nodes()[1].kind, NodeKind::Smooth);
    assert_eq!(
        editor.selection(),
        Some(Selection {
            index: 1,
            role: PointRole::Anchor
        })
    );

    moved(&mut editor, 100.0, 60.0);
    assert_eq!(editor.path().nodes()[1].anchor, Point::new(100.0, 60.0));
    assert_eq!(up(&mut editor, 100.0, 60.0), EditorOutcome::Committed);
    assert_eq!(editor.history().len(), committed + 1);
}

#[test]
fn test_handles_not_draggable_on_open_path() {
    let mut editor = Editor::new();
    click(&mut editor, 0.0, 0.0);
    // The isolated node's outgoing handle sits at (50, 0).
    down(&mut editor, 50.0, 0.0, Modifiers::NONE);
    assert!(editor.state().is_idle());
    assert!(editor.pending_click().is_some());
}

#[test]
fn test_release_without_motion_does_not_commit() {
    let mut editor = square_editor();
    let entries = editor.history().len();
    down(&mut editor, 100.0, 100.0, Modifiers::NONE);
    assert_eq!(up(&mut editor, 100.0, 100.0), EditorOutcome::Unchanged);
    assert_eq!(editor.history().len(), entries);
}

#[test]
fn test_pointer_travel_cancels_append() {
    let mut editor = Editor::new();
    down(&mut editor, 300.0, 300.0, Modifiers::NONE);
    moved(&mut editor, 303.0, 303.0);
    assert!(editor.pending_click().is_some());
    moved(&mut editor, 310.0, 300.0);
    assert!(editor.pending_click().is_none());
    assert_eq!(up(&mut editor, 310.0, 300.0), EditorOutcome::Unchanged);
    assert!(editor.path().is_empty());
}

#[test]
fn test_modifiers_on_empty_canvas() {
    let mut editor = Editor::new();
    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    down(&mut editor, 10.0, 10.0, ctrl);
    assert_eq!(up(&mut editor, 10.0, 10.0), EditorOutcome::Unchanged);
    assert!(editor.path().is_empty());

    down(&mut editor, 10.0, 10.0, Modifiers::shift());
    assert_eq!(up(&mut editor, 10.0, 10.0), EditorOutcome::Committed);
    assert_eq!(editor.path().nodes()[0].kind, NodeKind::Smooth);
}

#[test]
fn test_space_drag_pans() {
    let mut editor = square_editor();
    let nodes_before = editor.path().clone();
    editor.handle_event(EditorEvent::KeyDown { key: Key::Space });
    down(&mut editor, 0.0, 0.0, Modifiers::NONE);
    assert_eq!(
        editor.state(),
        InteractionState::Panning {
            last: Point::new(0.0, 0.0)
        }
    );
    moved(&mut editor, 30.0, -10.0);
    moved(&mut editor, 50.0, 20.0);
    assert_eq!(editor.viewport().pan(), Point::new(50.0, 20.0));
    assert_eq!(
        editor.handle_event(EditorEvent::PointerLeave),
        EditorOutcome::Updated
    );
    assert!(editor.state().is_idle());
    assert_eq!(editor.path(), &nodes_before);

    editor.handle_event(EditorEvent::KeyUp { key: Key::Space });
    assert!(!editor.is_space_held());
}

#[test]
fn test_wheel_zoom_scales_hit_radius() {
    let mut editor = Editor::new();
    click(&mut editor, 0.0, 0.0);
    for _ in 0..8 {
        editor.handle_event(EditorEvent::Wheel {
            x: 0.0,
            y: 0.0,
            delta_y: -120.0,
        });
    }
    let zoom = editor.viewport().zoom();
    assert!(zoom > 2.0);
    // 9 device px away is still within the 10 px anchor radius at any zoom.
    down(&mut editor, 9.0, 0.0, Modifiers::NONE);
    assert!(matches!(editor.state(), InteractionState::Dragging { .. }));
}

#[test]
fn test_delete_key_removes_selected_node() {
    let mut editor = square_editor();
    editor.execute(EditorCommand::ToggleClosePath);
    down(&mut editor, 100.0, 100.0, Modifiers::NONE);
    up(&mut editor, 100.0, 100.0);
    assert!(editor.selection().is_some());

    assert_eq!(
        editor.handle_event(EditorEvent::KeyDown {
            key: Key::Backspace
        }),
        EditorOutcome::Committed
    );
    assert_eq!(editor.path().len(), 3);
    assert!(editor.path().is_closed());
    assert!(editor.selection().is_none());

    assert_eq!(
        editor.execute(EditorCommand::DeleteSelected),
        EditorOutcome::Unchanged
    );
}

#[test]
fn test_snap_applies_to_appends_and_drags() {
    let settings = EditorSettings {
        snap_enabled: true,
        ..EditorSettings::default()
    };
    let mut editor = Editor::with_settings(&settings);
    click(&mut editor, 31.0, 49.0);
    assert_eq!(editor.path().nodes()[0].anchor, Point::new(40.0, 40.0));

    down(&mut editor, 40.0, 40.0, Modifiers::NONE);
    moved(&mut editor, 67.0, 12.0);
    up(&mut editor, 67.0, 12.0);
    assert_eq!(editor.path().nodes()[0].anchor, Point::new(60.0, 20.0));

    editor.execute(EditorCommand::ToggleSnap);
    assert!(!editor.snap_enabled());
}

#[test]
fn test_reopen_and_clear() {
    let mut editor = square_editor();
    editor.execute(EditorCommand::ToggleClosePath);
    assert_eq!(
        editor.execute(EditorCommand::ToggleClosePath),
        EditorOutcome::Committed
    );
    assert!(!editor.path().is_closed());

    assert_eq!(editor.execute(EditorCommand::Clear), EditorOutcome::Committed);
    assert!(editor.path().is_empty());
    assert_eq!(editor.execute(EditorCommand::Clear), EditorOutcome::Unchanged);
    editor.execute(EditorCommand::Undo);
    assert_eq!(editor.path().len(), 4);
}

#[test]
fn test_export_command_returns_document() {
    let mut editor = square_editor();
    match editor.execute(EditorCommand::Export) {
        EditorOutcome::Exported(document) => {
            assert!(document.contains(&editor.path_description()));
            assert!(document.contains(r#"fill="none""#));
        }
        other => panic!("expected export, got {:?}", other),
    }
}

#[test]
fn test_events_deserialize_from_script() {
    let script = r#"[
        {"type": "PointerDown", "x": 10.0, "y": 20.0},
        {"type": "PointerUp", "x": 10.0, "y": 20.0},
        {"type": "PointerDown", "x": 90.0, "y": 20.0, "modifiers": {"shift": true}},
        {"type": "PointerUp", "x": 90.0, "y": 20.0},
        {"type": "KeyDown", "key": "Escape"},
        {"type": "Command", "command": "Export"}
    ]"#;
    let events: Vec<EditorEvent> = serde_json::from_str(script).unwrap();
    assert_eq!(events.len(), 6);

    let mut editor = Editor::new();
    let outcomes: Vec<_> = events
        .into_iter()
        .map(|e| editor.handle_event(e))
        .collect();
    assert_eq!(editor.path().len(), 2);
    assert_eq!(editor.path().nodes()[1].kind, NodeKind::Smooth);
    assert!(matches!(outcomes.last(), Some(EditorOutcome::Exported(_))));
}

fn anchors(editor: &Editor) -> Vec<Point> {
    editor.path().nodes().iter().map(|n| n.anchor).collect()
}

#[test]
fn test_symmetry_toggle_mid_drag_commits_drag_first() {
    let mut editor = Editor::new();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 200.0, 0.0);
    let entries = editor.history().len();

    down(&mut editor, 200.0, 0.0, Modifiers::NONE);
    moved(&mut editor, 200.0, 80.0);
    assert_eq!(
        editor.execute(EditorCommand::ToggleApplySymmetry),
        EditorOutcome::Updated
    );
    assert_eq!(editor.state(), InteractionState::PickingSymmetryEdge);
    assert_eq!(editor.history().len(), entries + 1);
    assert_eq!(editor.path(), &editor.history().current().path);

    assert_eq!(up(&mut editor, 200.0, 80.0), EditorOutcome::Unchanged);
    assert_eq!(editor.path().nodes()[1].anchor, Point::new(200.0, 80.0));
    assert_eq!(editor.history().len(), entries + 1);
}

#[test]
fn test_delete_mid_drag_leaves_other_nodes_alone() {
    let mut editor = Editor::new();
    for (x, y) in [(0.0, 0.0), (200.0, 200.0), (400.0, 0.0)] {
        click(&mut editor, x, y);
    }

    down(&mut editor, 200.0, 200.0, Modifiers::NONE);
    assert_eq!(
        editor.handle_event(EditorEvent::KeyDown { key: Key::Delete }),
        EditorOutcome::Committed
    );
    assert!(editor.state().is_idle());

    assert_eq!(moved(&mut editor, 300.0, 300.0), EditorOutcome::Unchanged);
    assert_eq!(up(&mut editor, 300.0, 300.0), EditorOutcome::Unchanged);
    assert_eq!(
        anchors(&editor),
        vec![Point::new(0.0, 0.0), Point::new(400.0, 0.0)]
    );
    assert_eq!(editor.path(), &editor.history().current().path);
}

#[test]
fn test_close_mid_drag_keeps_drag_as_own_entry() {
    let mut editor = square_editor();
    let entries = editor.history().len();

    down(&mut editor, 100.0, 100.0, Modifiers::NONE);
    moved(&mut editor, 120.0, 130.0);
    assert_eq!(
        editor.execute(EditorCommand::ToggleClosePath),
        EditorOutcome::Committed
    );
    assert!(editor.path().is_closed());
    assert!(editor.state().is_idle());
    assert_eq!(editor.history().len(), entries + 2);

    moved(&mut editor, 500.0, 500.0);
    assert_eq!(up(&mut editor, 500.0, 500.0), EditorOutcome::Unchanged);
    assert_eq!(editor.path().nodes()[2].anchor, Point::new(120.0, 130.0));

    editor.execute(EditorCommand::Undo);
    assert!(!editor.path().is_closed());
    assert_eq!(editor.path().nodes()[2].anchor, Point::new(120.0, 130.0));
}

#[test]
fn test_clear_mid_drag_ends_gesture() {
    let mut editor = square_editor();

    down(&mut editor, 0.0, 100.0, Modifiers::NONE);
    moved(&mut editor, 10.0, 150.0);
    assert_eq!(editor.execute(EditorCommand::Clear), EditorOutcome::Committed);
    assert!(editor.path().is_empty());
    assert!(editor.state().is_idle());

    // Further motion neither drags nor reports a vanished node.
    assert_eq!(moved(&mut editor, 50.0, 50.0), EditorOutcome::Unchanged);
    assert_eq!(up(&mut editor, 50.0, 50.0), EditorOutcome::Unchanged);
    assert!(editor.path().is_empty());

    editor.execute(EditorCommand::Undo);
    assert_eq!(editor.path().nodes()[3].anchor, Point::new(10.0, 150.0));
}

#[test]
fn test_undo_mid_drag_reverts_only_the_drag() {
    let mut editor = square_editor();
    let entries = editor.history().len();

    down(&mut editor, 100.0, 0.0, Modifiers::NONE);
    moved(&mut editor, 150.0, -20.0);
    assert_eq!(editor.execute(EditorCommand::Undo), EditorOutcome::Updated);
    assert!(editor.state().is_idle());
    assert_eq!(editor.history().len(), entries + 1);
    assert_eq!(editor.path().nodes()[1].anchor, Point::new(100.0, 0.0));

    assert_eq!(moved(&mut editor, 300.0, 300.0), EditorOutcome::Unchanged);
    assert_eq!(up(&mut editor, 300.0, 300.0), EditorOutcome::Unchanged);
    assert_eq!(editor.path().nodes()[1].anchor, Point::new(100.0, 0.0));

    editor.execute(EditorCommand::Redo);
    assert_eq!(editor.path().nodes()[1].anchor, Point::new(150.0, -20.0));
}

#[test]
fn test_close_mid_pan_ends_pan() {
    let mut editor = square_editor();
    editor.handle_event(EditorEvent::KeyDown { key: Key::Space });
    down(&mut editor, 300.0, 300.0, Modifiers::NONE);
    assert!(matches!(editor.state(), InteractionState::Panning { .. }));

    assert_eq!(
        editor.execute(EditorCommand::ToggleClosePath),
        EditorOutcome::Committed
    );
    assert!(editor.state().is_idle());
    assert_eq!(up(&mut editor, 300.0, 300.0), EditorOutcome::Unchanged);
}
