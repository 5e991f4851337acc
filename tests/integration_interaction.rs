use desk_wm::geometry::{Geometry, Point};
use desk_wm::input::{PointerButton, PointerEvent, PointerKind};
use desk_wm::surface::{HeadlessContent, HeadlessSurface};
use desk_wm::window::{WindowId, WindowManager, WindowOptions};

// First window lands at (50, 50) 600x400: title bar 50..74, buttons at
// 578 (minimize), 602 (maximize), 626 (close), grip 634..650 x 434..450.
const TITLE: (i32, i32) = (200, 60);
const MINIMIZE: (i32, i32) = (590, 60);
const MAXIMIZE: (i32, i32) = (614, 60);
const CLOSE: (i32, i32) = (640, 60);
const GRIP: (i32, i32) = (645, 445);
const BODY: (i32, i32) = (300, 300);

fn manager() -> WindowManager<HeadlessSurface> {
    WindowManager::new(HeadlessSurface::default())
}

fn open(wm: &mut WindowManager<HeadlessSurface>, title: &str) -> WindowId {
    wm.create_window(title, title.into(), WindowOptions::default())
        .unwrap()
        .id()
}

fn open_embedded(wm: &mut WindowManager<HeadlessSurface>, title: &str) -> WindowId {
    wm.create_window(
        title,
        HeadlessContent::Embedded(title.to_string()),
        WindowOptions::default(),
    )
    .unwrap()
    .id()
}

fn press(wm: &mut WindowManager<HeadlessSurface>, (x, y): (i32, i32)) -> bool {
    wm.handle_pointer(&PointerEvent::down(x, y))
}

#[test]
fn drag_follows_pointer_and_clamps_only_the_top() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    assert!(wm.begin_drag(id, Point::new(70, 60)));
    assert!(wm.pointer_moved(Point::new(-400, -500)));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(-420, 0, 600, 400));
    assert!(wm.pointer_moved(Point::new(170, 160)));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(150, 150, 600, 400));
    assert!(wm.pointer_released());
    assert!(!wm.pointer_moved(Point::new(0, 0)));
    assert_eq!(wm.surface().pane(id).unwrap().bounds, Geometry::new(150, 150, 600, 400));
}

#[test]
fn resize_clamps_to_the_minimum_size() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    assert!(wm.begin_resize(id, Point::new(645, 445)));
    wm.pointer_moved(Point::new(55, 55));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(50, 50, 300, 200));
    wm.pointer_moved(Point::new(745, 465));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(50, 50, 700, 420));
    wm.pointer_released();
}

#[test]
fn only_one_interaction_at_a_time() {
    let mut wm = manager();
    let a = open(&mut wm, "A");
    let b = open(&mut wm, "B");
    assert!(wm.begin_drag(a, Point::new(60, 60)));
    assert!(!wm.begin_resize(a, Point::new(645, 445)));
    assert!(!wm.begin_drag(b, Point::new(90, 90)));
    wm.pointer_moved(Point::new(160, 160));
    assert_eq!(wm.window(a).unwrap().geometry(), Geometry::new(150, 150, 600, 400));
    assert_eq!(wm.window(b).unwrap().geometry(), Geometry::new(80, 80, 600, 400));
    assert!(wm.interaction().unwrap().is_drag());
}

#[test]
fn embedded_regions_are_suppressed_once_per_interaction() {
    let mut wm = manager();
    let radio = open_embedded(&mut wm, "Radio");
    let search = open_embedded(&mut wm, "Search");
    let notes = open(&mut wm, "Notes");

    assert!(wm.begin_drag(notes, Point::new(120, 120)));
    assert!(wm.embedded_suppressed());
    for id in [radio, search] {
        assert!(!wm.surface().pane(id).unwrap().pointer_events);
    }
    // release far outside every window
    assert!(wm.handle_pointer(&PointerEvent::up(5000, 5000)));
    assert!(!wm.embedded_suppressed());
    for id in [radio, search] {
        let pane = wm.surface().pane(id).unwrap();
        assert!(pane.pointer_events);
        assert_eq!(pane.suppressions, 1);
    }
    // a stray second release changes nothing
    assert!(!wm.pointer_released());
}

#[test]
fn cancel_restores_start_geometry_and_guard() {
    let mut wm = manager();
    let radio = open_embedded(&mut wm, "Radio");
    let start = wm.window(radio).unwrap().geometry();
    assert!(wm.begin_resize(radio, Point::new(645, 445)));
    wm.pointer_moved(Point::new(900, 700));
    assert_ne!(wm.window(radio).unwrap().geometry(), start);
    assert!(wm.cancel_interaction());
    assert_eq!(wm.window(radio).unwrap().geometry(), start);
    assert_eq!(wm.surface().pane(radio).unwrap().bounds, start);
    assert!(wm.surface().pane(radio).unwrap().pointer_events);
    assert!(!wm.cancel_interaction());
}

#[test]
fn window_opened_mid_drag_joins_the_suppression() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    assert!(wm.begin_drag(notes, Point::new(60, 60)));
    let radio = open_embedded(&mut wm, "Radio");
    assert!(!wm.surface().pane(radio).unwrap().pointer_events);
    wm.pointer_released();
    assert!(wm.surface().pane(radio).unwrap().pointer_events);
}

#[test]
fn minimizing_the_dragged_window_ends_the_drag() {
    let mut wm = manager();
    let radio = open_embedded(&mut wm, "Radio");
    assert!(wm.begin_drag(radio, Point::new(60, 60)));
    assert!(wm.minimize_window(radio));
    assert!(wm.interaction().is_none());
    assert!(wm.surface().pane(radio).unwrap().pointer_events);
}

#[test]
fn title_bar_press_starts_a_drag() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    assert!(press(&mut wm, TITLE));
    let interaction = wm.interaction().unwrap();
    assert!(interaction.is_drag());
    assert_eq!(interaction.target(), id);
    wm.handle_pointer(&PointerEvent::drag(300, 100));
    assert_eq!(wm.window(id).unwrap().geometry().origin(), Point::new(150, 90));
    wm.handle_pointer(&PointerEvent::up(300, 100));
    assert!(wm.interaction().is_none());
}

#[test]
fn control_buttons_act_on_their_window() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");

    assert!(press(&mut wm, MAXIMIZE));
    assert!(wm.window(id).unwrap().is_maximized());
    assert!(wm.interaction().is_none());
    // maximized at (20, 0) 1240x760 in the default 1280x800 area
    assert!(wm.handle_pointer(&PointerEvent::down(1230, 10)));
    assert!(!wm.window(id).unwrap().is_maximized());
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(50, 50, 600, 400));

    assert!(press(&mut wm, MINIMIZE));
    assert!(wm.window(id).unwrap().is_minimized());
    assert!(wm.restore_window(id));

    assert!(press(&mut wm, CLOSE));
    assert!(wm.is_empty());
}

#[test]
fn grip_press_starts_a_resize() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    assert!(press(&mut wm, GRIP));
    assert!(wm.interaction().unwrap().is_resize());
    wm.handle_pointer(&PointerEvent::drag(GRIP.0 + 50, GRIP.1 + 20));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(50, 50, 650, 420));
    wm.handle_pointer(&PointerEvent::up(0, 0));
}

#[test]
fn body_press_only_focuses_and_topmost_window_wins() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    let chat = open(&mut wm, "Chat");
    // (300, 300) lies inside both; Chat is on top
    assert_eq!(wm.window_at(Point::new(BODY.0, BODY.1)), Some(chat));
    assert!(press(&mut wm, (60, 60)));
    assert_eq!(wm.active_window(), Some(notes));
    wm.handle_pointer(&PointerEvent::up(60, 60));
    assert_eq!(wm.window_at(Point::new(BODY.0, BODY.1)), Some(notes));

    let before = wm.window(notes).unwrap().geometry();
    assert!(press(&mut wm, BODY));
    assert!(wm.interaction().is_none());
    assert_eq!(wm.window(notes).unwrap().geometry(), before);
}

#[test]
fn press_on_empty_desktop_is_not_consumed() {
    let mut wm = manager();
    open(&mut wm, "Notes");
    assert!(!wm.handle_pointer(&PointerEvent::down(1200, 780)));
}

#[test]
fn secondary_button_focuses_without_acting() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    open(&mut wm, "Chat");
    let event = PointerEvent::new(PointerKind::Down(PointerButton::Secondary), 60, 60);
    assert!(wm.handle_pointer(&event));
    assert_eq!(wm.active_window(), Some(notes));
    assert!(wm.interaction().is_none());
}

#[test]
fn presses_during_an_interaction_are_swallowed() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    assert!(wm.begin_drag(notes, Point::new(60, 60)));
    assert!(press(&mut wm, CLOSE));
    assert_eq!(wm.len(), 1);
    assert!(wm.interaction().is_some());
}
