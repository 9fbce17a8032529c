use super::*;
use crate::constants::{ACCENT_COLOR, BACKGROUND_COLOR, MAX_TEXT_LEN};
use crate::edge::nearest_connection_pair;
use crate::surface::{DrawOp, RecordingSurface, Transform};

/// Moves the pointer to `(x, y)` in canvas space and returns the redraw flag.
fn move_to(board: &mut Board, x: f32, y: f32) -> bool {
    board.handle(InputEvent::PointerMove(Point::new(x, y)))
}

/// Presses and releases a key.
fn tap(board: &mut Board, key: Key) {
    board.handle(InputEvent::KeyDown(key));
    board.handle(InputEvent::KeyUp(key));
}

/// Holds Control and taps `letter` with the pointer at `(x, y)`.
fn create_via_shortcut(board: &mut Board, x: f32, y: f32, letter: char) -> bool {
    move_to(board, x, y);
    board.handle(InputEvent::KeyDown(Key::Control));
    let created = board.handle(InputEvent::KeyDown(Key::Char(letter)));
    board.handle(InputEvent::KeyUp(Key::Char(letter)));
    board.handle(InputEvent::KeyUp(Key::Control));
    created
}

/// Hovers and clicks the block containing `(x, y)`.
fn click_at(board: &mut Board, x: f32, y: f32) {
    let pos = Point::new(x, y);
    board.handle(InputEvent::PointerMove(pos));
    board.handle(InputEvent::PointerDown(pos));
    board.handle(InputEvent::PointerUp(pos));
    board.handle(InputEvent::Click(pos));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::default();
    assert!(board.blocks().is_empty());
    assert!(board.edges().is_empty());
    assert_eq!(board.zoom_level(), 1.0);
    assert_eq!(board.pan_offset(), Point::ZERO);
    assert_eq!(board.hovered(), None);
    assert_eq!(board.selected(), None);
    assert_eq!(board.cursor(), Cursor::Default);
}

#[test]
fn test_block_created_at_pointer_is_centered() {
    let mut board = Board::default();
    assert!(create_via_shortcut(&mut board, 100.0, 100.0, 'b'));

    assert_eq!(board.blocks().len(), 1);
    let block = &board.blocks()[0];
    assert_eq!(block.kind, BlockKind::Rectangle);
    assert_eq!(block.position, Point::new(10.0, 65.0));
    assert_eq!(block.text(), "Block");
}

#[test]
fn test_shape_shortcuts() {
    let mut board = Board::default();
    create_via_shortcut(&mut board, 100.0, 100.0, 'c');
    create_via_shortcut(&mut board, 400.0, 100.0, 's');
    create_via_shortcut(&mut board, 700.0, 100.0, 'b');

    let kinds: Vec<BlockKind> = board.blocks().iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Circle, BlockKind::TextBox, BlockKind::Rectangle]
    );
}

#[test]
fn test_letter_without_control_creates_nothing() {
    let mut board = Board::default();
    move_to(&mut board, 100.0, 100.0);
    assert!(!board.handle(InputEvent::KeyDown(Key::Char('b'))));
    assert!(board.blocks().is_empty());
}

#[test]
fn test_creation_on_occupied_location_is_ignored() {
    let mut board = Board::default();
    assert!(create_via_shortcut(&mut board, 100.0, 100.0, 'b'));
    assert!(!create_via_shortcut(&mut board, 120.0, 110.0, 'c'));
    assert_eq!(board.blocks().len(), 1);

    assert_eq!(
        board.add_block(Point::new(100.0, 100.0), BlockKind::Rectangle),
        Err(PlacementRejection::Occupied)
    );
}

#[test]
fn test_creation_next_to_block_boundary_is_allowed() {
    let mut board = Board::default();
    board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    // x = 190 lies on the right edge, which is outside the strict interior.
    assert!(board
        .add_block(Point::new(190.0, 100.0), BlockKind::Rectangle)
        .is_ok());
}

#[test]
fn test_creation_suppressed_while_block_selected() {
    let mut board = Board::default();
    board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);
    assert!(board.selected().is_some());

    assert!(!create_via_shortcut(&mut board, 500.0, 500.0, 'b'));
    assert_eq!(board.blocks().len(), 1);
}

#[test]
fn test_nearest_pair_for_horizontal_blocks() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    board.add_edge(a, b).unwrap();

    let block_a = board.block(a).unwrap();
    let block_b = board.block(b).unwrap();
    let (start, end) = nearest_connection_pair(block_a, block_b);
    assert_eq!(start, block_a.connection_points().right);
    assert_eq!(end, block_b.connection_points().left);
}

#[test]
fn test_click_sequence_creates_directed_edge() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Circle)
        .unwrap();

    click_at(&mut board, 100.0, 100.0);
    assert_eq!(board.selected(), Some(a));
    assert!(board.block(a).unwrap().selected);

    click_at(&mut board, 400.0, 100.0);
    assert_eq!(board.selected(), Some(b));
    assert!(!board.block(a).unwrap().selected);
    assert!(board.block(b).unwrap().selected);

    assert_eq!(board.edges().len(), 1);
    assert_eq!(board.edges()[0].id(), EdgeId::new(a, b));
}

#[test]
fn test_reverse_edge_is_not_a_duplicate() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    assert!(board.add_edge(a, b).is_ok());
    assert_eq!(board.add_edge(a, b), Err(EdgeRejection::Duplicate));
    assert!(board.add_edge(b, a).is_ok());
    assert_eq!(board.add_edge(b, a), Err(EdgeRejection::Duplicate));

    assert_eq!(board.edges().len(), 2);
    assert!(board.has_edge(a, b));
    assert!(board.has_edge(b, a));
}

#[test]
fn test_edge_rejections() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let text = board
        .add_block(Point::new(400.0, 100.0), BlockKind::TextBox)
        .unwrap();

    assert_eq!(board.add_edge(a, a), Err(EdgeRejection::SelfLoop));
    assert_eq!(board.add_edge(a, text), Err(EdgeRejection::TextBox));
    assert_eq!(board.add_edge(text, a), Err(EdgeRejection::TextBox));
    assert_eq!(
        board.add_edge(a, uuid::Uuid::new_v4()),
        Err(EdgeRejection::UnknownBlock)
    );
    assert!(board.edges().is_empty());
}

#[test]
fn test_clicking_selected_block_again_keeps_selection() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    click_at(&mut board, 100.0, 100.0);
    click_at(&mut board, 110.0, 100.0);
    assert_eq!(board.selected(), Some(a));
    assert!(board.block(a).unwrap().selected);
    assert!(board.edges().is_empty());
}

#[test]
fn test_click_on_empty_space_deselects() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);
    assert_eq!(board.selected(), Some(a));

    click_at(&mut board, 600.0, 600.0);
    assert_eq!(board.selected(), None);
    assert!(!board.block(a).unwrap().selected);
}

#[test]
fn test_typing_into_selected_block() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);

    assert!(!board.handle(InputEvent::KeyDown(Key::Char('x'))));
    assert_eq!(board.block(a).unwrap().text(), "Block");
    assert!(board.handle(InputEvent::KeyUp(Key::Char('x'))));
    assert_eq!(board.block(a).unwrap().text(), "Blockx");

    tap(&mut board, Key::Shift);
    tap(&mut board, Key::Backspace);
    tap(&mut board, Key::Backspace);
    assert_eq!(board.block(a).unwrap().text(), "Bloc");
}

#[test]
fn test_typing_respects_length_limit() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);

    for _ in 0..50 {
        tap(&mut board, Key::Char('z'));
        tap(&mut board, Key::Enter);
    }
    assert_eq!(board.block(a).unwrap().text().chars().count(), MAX_TEXT_LEN);
}

#[test]
fn test_space_types_while_editing() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);

    tap(&mut board, Key::Space);
    assert_eq!(board.block(a).unwrap().text(), "Block ");
    assert_eq!(board.cursor(), Cursor::Default);
}

#[test]
fn test_delete_removes_selected_block_and_its_edges() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let c = board
        .add_block(Point::new(700.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    board.add_edge(a, b).unwrap();
    board.add_edge(b, a).unwrap();
    board.add_edge(c, a).unwrap();
    board.add_edge(b, c).unwrap();

    click_at(&mut board, 100.0, 100.0);
    assert_eq!(board.selected(), Some(a));

    assert!(board.handle(InputEvent::KeyDown(Key::Delete)));
    board.handle(InputEvent::KeyUp(Key::Delete));

    assert!(board.block(a).is_none());
    assert_eq!(board.blocks().len(), 2);
    assert_eq!(board.selected(), None);
    assert_eq!(board.hovered(), None);

    let a_id = a.to_string();
    assert!(board
        .edges()
        .iter()
        .all(|edge| !edge.id().to_string().contains(&a_id)));
    assert_eq!(board.edges().len(), 1);
    assert_eq!(board.edges()[0].id(), EdgeId::new(b, c));
}

#[test]
fn test_delete_without_selection_does_nothing() {
    let mut board = Board::default();
    board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    move_to(&mut board, 100.0, 100.0);

    assert!(!board.handle(InputEvent::KeyDown(Key::Delete)));
    assert_eq!(board.blocks().len(), 1);
}

#[test]
fn test_remove_block_clears_flags_of_other_blocks() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    click_at(&mut board, 100.0, 100.0);

    assert!(board.remove_block(b));
    assert_eq!(board.selected(), None);
    assert!(!board.block(a).unwrap().selected);
    assert!(!board.block(a).unwrap().hovering);
    assert!(!board.remove_block(b));
}

#[test]
fn test_zoom_clamps_at_upper_bound() {
    let mut board = Board::default();
    for _ in 0..50 {
        board.handle(InputEvent::Wheel { delta_y: 120.0 });
    }
    assert_eq!(board.zoom_level(), 3.0);
}

#[test]
fn test_zoom_never_goes_below_one() {
    let mut board = Board::default();
    for _ in 0..10 {
        board.handle(InputEvent::Wheel { delta_y: -1.0 });
    }
    assert_eq!(board.zoom_level(), 1.0);

    for _ in 0..5 {
        board.handle(InputEvent::Wheel { delta_y: 1.0 });
    }
    assert!((board.zoom_level() - 1.5).abs() < 1e-4);

    for _ in 0..50 {
        board.handle(InputEvent::Wheel { delta_y: -3.0 });
        assert!(board.zoom_level() >= 1.0 && board.zoom_level() <= 3.0);
    }
    assert_eq!(board.zoom_level(), 1.0);
}

#[test]
fn test_zero_wheel_delta_is_ignored() {
    let mut board = Board::default();
    assert!(!board.handle(InputEvent::Wheel { delta_y: 0.0 }));
    assert_eq!(board.zoom_level(), 1.0);
}

#[test]
fn test_pointer_mapping_uses_zoom_and_pan() {
    let mut board = Board::default();
    board.handle(InputEvent::Wheel { delta_y: 1.0 });
    board.handle(InputEvent::Wheel { delta_y: 1.0 });
    let zoom = board.zoom_level();

    move_to(&mut board, 50.0, 20.0);
    let loc = board.mouse_location();
    assert!((loc.x - 50.0 * zoom).abs() < 1e-4);
    assert!((loc.y - 20.0 * zoom).abs() < 1e-4);
}

#[test]
fn test_panning_moves_offset_by_pointer_motion() {
    let mut board = Board::default();
    move_to(&mut board, 100.0, 100.0);

    board.handle(InputEvent::KeyDown(Key::Space));
    assert_eq!(board.cursor(), Cursor::Grab);

    board.handle(InputEvent::PointerDown(Point::new(100.0, 100.0)));
    assert!(board.is_panning());
    assert_eq!(board.cursor(), Cursor::Grabbing);

    assert!(move_to(&mut board, 130.0, 90.0));
    assert_eq!(board.pan_offset(), Point::new(30.0, -10.0));

    // Continuing the gesture only applies the new motion.
    assert!(move_to(&mut board, 140.0, 90.0));
    assert_eq!(board.pan_offset(), Point::new(40.0, -10.0));

    // The grabbed model point stays under the pointer.
    assert_eq!(board.to_model(Point::new(140.0, 90.0)), Point::new(100.0, 100.0));

    board.handle(InputEvent::PointerUp(Point::new(140.0, 90.0)));
    assert!(!board.is_panning());
    assert_eq!(board.cursor(), Cursor::Grab);

    board.handle(InputEvent::KeyUp(Key::Space));
    assert_eq!(board.cursor(), Cursor::Default);
}

#[test]
fn test_space_with_control_does_not_change_cursor() {
    let mut board = Board::default();
    board.handle(InputEvent::KeyDown(Key::Control));
    board.handle(InputEvent::KeyDown(Key::Space));
    assert_eq!(board.cursor(), Cursor::Default);
}

#[test]
fn test_dragging_keeps_grab_offset() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    move_to(&mut board, 30.0, 80.0);
    assert_eq!(board.hovered(), Some(a));
    board.handle(InputEvent::PointerDown(Point::new(30.0, 80.0)));
    assert!(board.is_dragging());
    assert_eq!(board.block(a).unwrap().offset, Point::new(20.0, 15.0));

    assert!(move_to(&mut board, 130.0, 180.0));
    assert_eq!(board.block(a).unwrap().position, Point::new(110.0, 165.0));

    board.handle(InputEvent::PointerUp(Point::new(130.0, 180.0)));
    assert!(!board.is_dragging());
    assert_eq!(board.block(a).unwrap().position, Point::new(110.0, 165.0));
}

#[test]
fn test_drag_does_not_rehover_other_blocks() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    move_to(&mut board, 100.0, 100.0);
    board.handle(InputEvent::PointerDown(Point::new(100.0, 100.0)));
    move_to(&mut board, 400.0, 100.0);

    assert_eq!(board.hovered(), Some(a));
    assert!(!board.block(b).unwrap().hovering);
}

#[test]
fn test_pointer_up_without_gesture_resets_offset() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    move_to(&mut board, 30.0, 80.0);
    board.handle(InputEvent::PointerDown(Point::new(30.0, 80.0)));
    board.handle(InputEvent::PointerUp(Point::new(30.0, 80.0)));
    assert!(board.block(a).unwrap().offset != Point::ZERO);

    // A release with nothing in progress clears the stale grab offset.
    board.handle(InputEvent::PointerUp(Point::new(30.0, 80.0)));
    assert_eq!(board.block(a).unwrap().offset, Point::ZERO);
}

#[test]
fn test_hover_prefers_first_inserted_block() {
    let mut board = Board::default();
    let first = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let second = board
        .add_block(Point::new(200.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    // (150, 100) lies inside both; the later block is drawn on top but the
    // earlier one wins the hit test.
    move_to(&mut board, 150.0, 100.0);
    assert_eq!(board.hovered(), Some(first));
    assert!(board.block(first).unwrap().hovering);
    assert!(!board.block(second).unwrap().hovering);

    move_to(&mut board, 250.0, 100.0);
    assert_eq!(board.hovered(), Some(second));
    assert!(!board.block(first).unwrap().hovering);
}

#[test]
fn test_hover_redraw_policy() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();

    assert!(!move_to(&mut board, 600.0, 600.0));
    assert!(move_to(&mut board, 100.0, 100.0));
    assert_eq!(board.hovered(), Some(a));
    assert!(!move_to(&mut board, 105.0, 100.0));

    // Losing hover redraws so the highlight does not linger.
    assert!(move_to(&mut board, 600.0, 600.0));
    assert_eq!(board.hovered(), None);
    assert!(!board.block(a).unwrap().hovering);
}

#[test]
fn test_click_redraws() {
    let mut board = Board::default();
    board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    move_to(&mut board, 100.0, 100.0);
    assert!(board.handle(InputEvent::Click(Point::new(100.0, 100.0))));
    move_to(&mut board, 600.0, 600.0);
    assert!(board.handle(InputEvent::Click(Point::new(600.0, 600.0))));
}

#[test]
fn test_draw_order_and_transform() {
    let mut board = Board::default();
    board.set_viewport(Point::new(800.0, 600.0));
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    board.add_edge(a, b).unwrap();
    board.handle(InputEvent::Wheel { delta_y: 1.0 });

    let mut surface = RecordingSurface::new();
    board.draw(&mut surface);

    assert_eq!(surface.ops[0], DrawOp::Clear);
    assert_eq!(
        surface.ops[1],
        DrawOp::FillRect {
            min: Point::ZERO,
            width: 800.0,
            height: 600.0,
            color: BACKGROUND_COLOR,
        }
    );
    assert_eq!(
        surface.ops[2],
        DrawOp::Push(Transform::new(1.0 / board.zoom_level(), Point::ZERO))
    );
    assert_eq!(surface.ops.last(), Some(&DrawOp::Pop));
    assert_eq!(surface.transform_depth(), 0);

    let last_text = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Text { .. }))
        .unwrap();
    let bezier = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Bezier { .. }))
        .unwrap();
    assert!(bezier > last_text, "edges are drawn after blocks");
    assert_eq!(surface.texts(), vec!["Block", "Block"]);
    assert_eq!(
        surface.count(|op| matches!(op, DrawOp::Circle { color, .. } if *color == ACCENT_COLOR)),
        1
    );
}

#[test]
fn test_grid_is_off_by_default() {
    let mut board = Board::default();
    board.set_viewport(Point::new(500.0, 500.0));

    let mut surface = RecordingSurface::new();
    board.draw(&mut surface);
    assert_eq!(surface.count(|op| matches!(op, DrawOp::Line { .. })), 0);

    board.set_show_grid(true);
    let mut with_grid = RecordingSurface::new();
    board.draw(&mut with_grid);
    assert_eq!(with_grid.count(|op| matches!(op, DrawOp::Line { .. })), 20);
}

#[test]
fn test_edges_follow_dragged_block() {
    let mut board = Board::default();
    let a = board
        .add_block(Point::new(100.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    let b = board
        .add_block(Point::new(400.0, 100.0), BlockKind::Rectangle)
        .unwrap();
    board.add_edge(a, b).unwrap();

    // Drag B below A.
    move_to(&mut board, 400.0, 100.0);
    board.handle(InputEvent::PointerDown(Point::new(400.0, 100.0)));
    move_to(&mut board, 100.0, 400.0);
    board.handle(InputEvent::PointerUp(Point::new(100.0, 400.0)));

    let block_a = board.block(a).unwrap();
    let block_b = board.block(b).unwrap();
    let (start, end) = nearest_connection_pair(block_a, block_b);
    assert_eq!(start, block_a.connection_points().bottom);
    assert_eq!(end, block_b.connection_points().top);
}

#[test]
fn test_custom_zoom_range() {
    let mut board = Board::new(BoardConfig {
        zoom_min: 0.5,
        zoom_max: 1.0,
        zoom_step: 0.25,
        ..Default::default()
    });
    assert_eq!(board.zoom_level(), 0.5);
    for _ in 0..10 {
        board.handle(InputEvent::Wheel { delta_y: 1.0 });
    }
    assert_eq!(board.zoom_level(), 1.0);
}
