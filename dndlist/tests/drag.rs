mod support;

use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};
use dndlist::{
    DndList, DragState, Event, Label, ListConfig, MouseButton, Point, Stack, Surface,
};
use support::{abc_list, Block};

fn click(target: &str, x: u16, y: u16) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x,
        y,
        button: MouseButton::Left,
    }
}

fn drag(x: u16, y: u16) -> Event {
    Event::Drag {
        target: None,
        x,
        y,
        button: MouseButton::Left,
    }
}

fn release(x: u16, y: u16) -> Event {
    Event::Release {
        target: None,
        x,
        y,
        button: MouseButton::Left,
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_click_starts_drag_on_nearest_item() {
    let mut list = abc_list();
    let picked = list.on_click(Point::new(350, 90)).unwrap();
    let c = list.bound_to("C").unwrap();

    assert_eq!(picked, Some(c));
    assert_eq!(
        list.drag_state(),
        DragState::Dragging {
            handle: c,
            last: Point::new(350, 90)
        }
    );
}

#[test]
fn test_click_in_gap_picks_closest() {
    let mut list = abc_list();
    // B spans rows 40..70, C spans 80..110; row 71 is nearer B.
    let picked = list.on_click(Point::new(350, 71)).unwrap();
    assert_eq!(picked, list.bound_to("B"));
}

#[test]
fn test_click_raises_item() {
    let mut list = abc_list();
    let a = list.bound_to("A").unwrap();
    list.on_click(Point::new(350, 5)).unwrap();
    assert_eq!(list.surface().stacking_order().last(), Some(&a));
}

#[test]
fn test_drag_c_to_top_reorders() {
    let mut list = abc_list();
    list.on_click(Point::new(350, 90)).unwrap();
    list.on_motion(Point::new(352, 60)).unwrap();
    list.on_motion(Point::new(355, 20)).unwrap();
    list.on_motion(Point::new(350, 5)).unwrap();
    list.on_release();

    assert_eq!(top_of(&list, "C"), -5);
    assert_eq!(list.ordered_ids().unwrap(), vec!["C", "A", "B"]);
    assert_eq!(list.drag_state(), DragState::Idle);
}

#[test]
fn test_drag_displacement_telescopes() {
    let path = [(352, 88), (340, 60), (399, 61), (360, 20)];
    let mut list = abc_list();
    let c = list.bound_to("C").unwrap();
    let before = list.surface().bbox(c).unwrap();

    list.on_click(Point::new(350, 90)).unwrap();
    for (x, y) in path {
        list.on_motion(Point::new(x, y)).unwrap();
    }
    list.on_release();

    let after = list.surface().bbox(c).unwrap();
    assert_eq!(after, before.translate(10, -70));
}

#[test]
fn test_single_step_equals_many_steps() {
    let mut one = abc_list();
    one.on_click(Point::new(350, 50)).unwrap();
    one.on_motion(Point::new(330, 130)).unwrap();

    let mut many = abc_list();
    many.on_click(Point::new(350, 50)).unwrap();
    for y in (51..=130).step_by(7) {
        many.on_motion(Point::new(350, y)).unwrap();
    }
    many.on_motion(Point::new(330, 130)).unwrap();

    let b = one.bound_to("B").unwrap();
    assert_eq!(one.surface().bbox(b), many.surface().bbox(b));
}

#[test]
fn test_release_ends_drag() {
    let mut list = abc_list();
    let picked = list.on_click(Point::new(350, 10)).unwrap();
    assert_eq!(list.on_release(), picked);
    assert_eq!(list.dragging(), None);

    // Motion after release moves nothing.
    assert!(!list.on_motion(Point::new(350, 300)).unwrap());
    assert_eq!(top_of(&list, "A"), 0);
}

// ============================================================================
// Stray events
// ============================================================================

#[test]
fn test_stray_motion_is_ignored() {
    let mut list = abc_list();
    let before: Vec<_> = ["A", "B", "C"].iter().map(|id| top_of(&list, id)).collect();

    assert!(!list.on_motion(Point::new(10, 10)).unwrap());
    assert!(!list.handle_event(&drag(400, 400)).unwrap());

    let after: Vec<_> = ["A", "B", "C"].iter().map(|id| top_of(&list, id)).collect();
    assert_eq!(before, after);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_stray_release_is_ignored() {
    let mut list = abc_list();
    assert_eq!(list.on_release(), None);
    assert!(!list.handle_event(&release(1, 1)).unwrap());
    assert_eq!(list.ordered_ids().unwrap(), vec!["A", "B", "C"]);
    assert_eq!(list.drag_state(), DragState::Idle);
}

#[test]
fn test_click_on_empty_list_stays_idle() {
    let mut list = DndList::new(ListConfig::default());
    assert_eq!(list.on_click(Point::new(3, 3)).unwrap(), None);
    assert_eq!(list.drag_state(), DragState::Idle);
}

// ============================================================================
// Event dispatch
// ============================================================================

#[test]
fn test_event_sequence_reorders() {
    let mut list = abc_list();
    assert!(list.handle_event(&click("C", 350, 90)).unwrap());
    assert!(list.handle_event(&drag(350, 50)).unwrap());
    assert!(list.handle_event(&drag(350, 2)).unwrap());
    assert!(list.handle_event(&release(350, 2)).unwrap());
    assert_eq!(list.ordered_ids().unwrap(), vec!["C", "A", "B"]);
}

#[test]
fn test_click_on_unbound_target_is_ignored() {
    let mut list = abc_list();
    assert!(!list.handle_event(&click("elsewhere", 350, 90)).unwrap());
    let untargeted = Event::Click {
        target: None,
        x: 350,
        y: 90,
        button: MouseButton::Left,
    };
    assert!(!list.handle_event(&untargeted).unwrap());
    assert_eq!(list.dragging(), None);
}

#[test]
fn test_right_button_does_not_drag() {
    let mut list = abc_list();
    let right = Event::Click {
        target: Some("A".to_string()),
        x: 350,
        y: 5,
        button: MouseButton::Right,
    };
    assert!(!list.handle_event(&right).unwrap());
    assert_eq!(list.dragging(), None);
}

#[test]
fn test_child_click_drags_whole_item() {
    let mut list = DndList::new(ListConfig::new(40, 30).padding(1));
    list.add_item(Label::new("plain").id("plain")).unwrap();
    let card = Stack::new()
        .id("card")
        .child(Label::new("title").id("card-title"))
        .child(Label::new("body").id("card-body"));
    let handle = list.add_item(card).unwrap();

    // card starts at row 2 (1 + padding 1); body is its second row
    let target = list.target_at(20, 3);
    assert_eq!(target.as_deref(), Some("card-body"));

    assert!(list.handle_event(&click("card-body", 20, 3)).unwrap());
    assert_eq!(list.dragging(), Some(handle));
    list.handle_event(&drag(20, 10)).unwrap();
    list.handle_event(&release(20, 10)).unwrap();

    assert_eq!(list.node(handle).unwrap().top(list.surface()).unwrap(), 9);
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn test_pointer_translated_by_origin_and_scroll() {
    let config = ListConfig::new(20, 10).padding(2).origin(5, 3);
    let mut list = DndList::new(config);
    for id in ["a", "b", "c", "d"] {
        list.add_item(Block::new(id, 6, 4)).unwrap();
    }
    // tops: 0, 6, 12, 18; region bottom 22, so up to 12 rows of scroll
    assert!(list.surface_mut().scroll_by(12));
    assert_eq!(list.surface().scroll_offset(), 12);

    let at = list.surface().to_content(Point::new(15, 3));
    assert_eq!(at, Point::new(10, 12));
    assert_eq!(list.surface().to_screen(at), Point::new(15, 3));

    // Screen row 9 shows content row 18: item d.
    let picked = list.on_click(Point::new(15, 9)).unwrap();
    assert_eq!(picked, list.bound_to("d"));
}

#[test]
fn test_scroll_during_drag_keeps_item_under_pointer() {
    let config = ListConfig::new(20, 10).padding(2);
    let mut list = DndList::new(config);
    for id in ["a", "b", "c", "d"] {
        list.add_item(Block::new(id, 6, 4)).unwrap();
    }
    list.on_click(Point::new(10, 1)).unwrap();
    list.handle_event(&Event::Scroll {
        x: 1,
        y: 1,
        delta_y: 3,
    })
    .unwrap();
    // Same screen point, but the content under it moved by 3 rows.
    list.on_motion(Point::new(10, 1)).unwrap();
    assert_eq!(top_of(&list, "a"), 3);
}

fn top_of(list: &DndList, id: &str) -> i32 {
    let handle = list.bound_to(id).unwrap();
    list.surface().bbox(handle).unwrap().top
}

#[test]
fn test_drop_clamps_scroll_to_shrunken_region() {
    let mut list = DndList::new(ListConfig::new(20, 10).padding(0));
    list.add_item(Block::new("a", 6, 10)).unwrap();
    list.add_item(Block::new("b", 6, 30)).unwrap();

    // region 0..40, so the view can scroll to 30
    list.surface_mut().scroll_by(100);
    assert_eq!(list.surface().scroll_offset(), 30);

    // screen row 5 shows content row 35, inside b; lift b by 30 rows
    assert_eq!(list.on_click(Point::new(10, 5)).unwrap(), list.bound_to("b"));
    list.on_motion(Point::new(10, -25)).unwrap();
    list.on_release();

    assert_eq!(top_of(&list, "b"), -20);
    let region = list.surface().scroll_region();
    assert_eq!((region.top, region.bottom), (-20, 10));
    assert_eq!(list.surface().scroll_offset(), 0);

    // Scrolling down stays put instead of jumping the view.
    let down = Event::Scroll {
        x: 1,
        y: 1,
        delta_y: 1,
    };
    assert!(!list.handle_event(&down).unwrap());
    assert_eq!(list.surface().scroll_offset(), 0);
}

#[test]
fn test_scroll_in_viewport_at_screen_edge() {
    let mut list = DndList::new(ListConfig::new(u16::MAX, 10).origin(5, 0).padding(0));
    list.add_item(Block::new("tall", 6, 40)).unwrap();
    let event = Event::Scroll {
        x: 10,
        y: 3,
        delta_y: 2,
    };
    assert!(list.handle_event(&event).unwrap());
    assert_eq!(list.surface().scroll_offset(), 2);
}

#[test]
fn test_scroll_outside_viewport_is_ignored() {
    let mut list = DndList::new(ListConfig::new(20, 5).origin(0, 0).padding(1));
    list.add_item(Block::new("tall", 6, 40)).unwrap();
    let event = Event::Scroll {
        x: 30,
        y: 30,
        delta_y: 1,
    };
    assert!(!list.handle_event(&event).unwrap());
    assert_eq!(list.surface().scroll_offset(), 0);
}

#[test]
fn test_process_events_targets_widgets() {
    let mut list = DndList::new(ListConfig::new(20, 10).padding(1));
    list.add_item(Block::new("a", 6, 3)).unwrap();

    let raw = vec![
        mouse(MouseEventKind::Down(CtButton::Left), 10, 1),
        mouse(MouseEventKind::Drag(CtButton::Left), 10, 6),
        mouse(MouseEventKind::Up(CtButton::Left), 10, 6),
        mouse(MouseEventKind::Moved, 0, 0),
    ];
    let events = list.process_events(&raw);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], click("a", 10, 1));

    for event in &events {
        list.handle_event(event).unwrap();
    }
    assert_eq!(top_of(&list, "a"), 5);
}
