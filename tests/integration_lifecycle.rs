use desk_wm::error::WmError;
use desk_wm::geometry::{Geometry, Point};
use desk_wm::surface::{HeadlessContent, HeadlessSurface, SurfaceError};
use desk_wm::window::{WindowId, WindowManager, WindowOptions, WindowState};

fn manager() -> WindowManager<HeadlessSurface> {
    WindowManager::new(HeadlessSurface::new(Geometry::new(0, 40, 1280, 720)))
}

fn open(wm: &mut WindowManager<HeadlessSurface>, title: &str) -> WindowId {
    wm.create_window(title, title.into(), WindowOptions::default())
        .unwrap()
        .id()
}

#[test]
fn new_windows_cascade_with_default_size() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    let chat = open(&mut wm, "Chat");
    assert_eq!(
        wm.window(notes).unwrap().geometry(),
        Geometry::new(50, 50, 600, 400)
    );
    assert_eq!(
        wm.window(chat).unwrap().geometry(),
        Geometry::new(80, 80, 600, 400)
    );
    assert_eq!(wm.surface().pane(chat).unwrap().bounds, Geometry::new(80, 80, 600, 400));
    assert_eq!(wm.window(chat).unwrap().state(), WindowState::Normal);
}

#[test]
fn explicit_options_are_clamped() {
    let mut wm = manager();
    let id = wm
        .create_window(
            "Tiny",
            "t".into(),
            WindowOptions::default().size(10, 10).position(-30, -90),
        )
        .unwrap()
        .id();
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(-30, 0, 300, 200));
}

#[test]
fn notes_chat_notes_reuses_the_first_window() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    let chat = open(&mut wm, "Chat");
    assert_eq!(wm.active_window(), Some(chat));

    let again = open(&mut wm, "Notes");
    assert_eq!(again, notes);
    assert_eq!(wm.len(), 2);
    assert_eq!(wm.active_window(), Some(notes));
    assert_eq!(wm.surface().len(), 2);
    let titles: Vec<&str> = wm.windows().map(|w| w.title()).collect();
    assert_eq!(titles, vec!["Notes", "Chat"]);
}

#[test]
fn reusing_a_minimized_window_restores_it() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    open(&mut wm, "Chat");
    assert!(wm.minimize_window(notes));
    assert_eq!(open(&mut wm, "Notes"), notes);
    let record = wm.window(notes).unwrap();
    assert!(!record.is_minimized());
    assert!(wm.surface().pane(notes).unwrap().visible);
    assert_eq!(wm.active_window(), Some(notes));
}

#[test]
fn z_order_is_monotonic_and_tracks_the_active_window() {
    let mut wm = manager();
    let ids: Vec<WindowId> = ["A", "B", "C"].iter().map(|t| open(&mut wm, t)).collect();
    let mut last = wm.z_counter();
    for id in [ids[0], ids[2], ids[1], ids[0]] {
        assert!(wm.focus_window(id));
        let z = wm.window(id).unwrap().z_order();
        assert!(z > last);
        last = z;
        let top = wm.windows().max_by_key(|w| w.z_order()).unwrap().id();
        assert_eq!(top, id);
        assert_eq!(wm.active_window(), Some(id));
        assert_eq!(wm.surface().pane(id).unwrap().z, z);
    }
    let active_markers = wm.surface().panes().filter(|(_, p)| p.active).count();
    assert_eq!(active_markers, 1);
}

#[test]
fn z_counter_starts_above_the_base() {
    let mut wm = manager();
    assert_eq!(wm.z_counter(), 1000);
    let id = open(&mut wm, "A");
    assert_eq!(wm.window(id).unwrap().z_order(), 1001);
}

#[test]
fn maximize_round_trip_restores_exact_geometry() {
    let mut wm = manager();
    let original = Geometry::new(50, 60, 600, 400);
    let id = wm
        .create_window(
            "Notes",
            "n".into(),
            WindowOptions::default().size(600, 400).position(50, 60),
        )
        .unwrap()
        .id();
    assert!(wm.toggle_maximize(id));
    let record = wm.window(id).unwrap();
    assert!(record.is_maximized());
    assert_eq!(record.geometry(), Geometry::new(20, 40, 1240, 680));
    assert_eq!(record.saved_geometry(), Some(original));

    assert!(wm.toggle_maximize(id));
    let record = wm.window(id).unwrap();
    assert_eq!(record.geometry(), original);
    assert_eq!(record.saved_geometry(), None);
    assert_eq!(record.state(), WindowState::Normal);
}

#[test]
fn maximize_round_trip_holds_for_any_geometry() {
    let cases = [
        Geometry::new(-500, 60, 600, 400),
        Geometry::new(5000, 3000, 800, 500),
        Geometry::new(50, 0, 600, 400),
        Geometry::new(10, 40, 3000, 2000),
        Geometry::new(100, 100, 300, 200),
    ];
    for (n, geometry) in cases.into_iter().enumerate() {
        let mut wm = manager();
        let id = wm
            .create_window(
                format!("W{n}"),
                "w".into(),
                WindowOptions::default()
                    .size(geometry.width, geometry.height)
                    .position(geometry.x, geometry.y),
            )
            .unwrap()
            .id();
        assert_eq!(wm.window(id).unwrap().geometry(), geometry);
        assert!(wm.toggle_maximize(id));
        assert_ne!(wm.window(id).unwrap().geometry(), geometry);
        assert!(wm.toggle_maximize(id));
        assert_eq!(wm.window(id).unwrap().geometry(), geometry, "case {n}");
    }
}

#[test]
fn maximize_round_trip_after_drag_and_resize() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    assert!(wm.begin_drag(id, Point::new(100, 60)));
    wm.pointer_moved(Point::new(-250, 15));
    wm.pointer_released();
    assert!(wm.begin_resize(id, Point::new(-1, 445)));
    wm.pointer_moved(Point::new(133, 517));
    wm.pointer_released();
    let moved = wm.window(id).unwrap().geometry();
    assert_eq!(moved, Geometry::new(-300, 5, 734, 472));

    assert!(wm.toggle_maximize(id));
    assert!(wm.toggle_maximize(id));
    assert_eq!(wm.window(id).unwrap().geometry(), moved);
}

#[test]
fn maximize_without_display_area_is_a_noop() {
    let mut wm = manager();
    let id = open(&mut wm, "Notes");
    wm.surface_mut().set_area(None);
    assert!(!wm.toggle_maximize(id));
    assert_eq!(wm.window(id).unwrap().state(), WindowState::Normal);
}

#[test]
fn minimize_keeps_geometry_and_restore_refocuses() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    let chat = open(&mut wm, "Chat");
    let before = wm.window(notes).unwrap().geometry();

    assert!(wm.minimize_window(notes));
    assert!(!wm.minimize_window(notes));
    assert!(!wm.surface().pane(notes).unwrap().visible);
    assert_eq!(wm.window(notes).unwrap().geometry(), before);
    assert_eq!(wm.active_window(), Some(chat));
    assert_eq!(wm.draw_order(), vec![chat]);

    assert!(wm.restore_window(notes));
    assert!(!wm.restore_window(notes));
    assert_eq!(wm.window(notes).unwrap().geometry(), before);
    assert_eq!(wm.active_window(), Some(notes));
    assert_eq!(wm.draw_order(), vec![chat, notes]);
}

#[test]
fn minimized_maximized_window_restores_to_maximized() {
    let mut wm = manager();
    let id = wm
        .create_window(
            "Notes",
            "n".into(),
            WindowOptions::default().maximized(true).minimized(true),
        )
        .unwrap()
        .id();
    let record = wm.window(id).unwrap();
    assert!(record.is_minimized());
    let saved = record.saved_geometry();
    assert_eq!(saved, Some(Geometry::new(50, 50, 600, 400)));

    assert!(wm.restore_window(id));
    let record = wm.window(id).unwrap();
    assert!(record.is_maximized());
    assert_eq!(record.saved_geometry(), saved);
    assert!(wm.toggle_maximize(id));
    assert_eq!(wm.window(id).unwrap().geometry(), Geometry::new(50, 50, 600, 400));
}

#[test]
fn close_clears_activity_and_surface() {
    let mut wm = manager();
    let notes = open(&mut wm, "Notes");
    assert!(wm.close_window(notes));
    assert!(!wm.close_window(notes));
    assert!(wm.is_empty());
    assert_eq!(wm.active_window(), None);
    assert!(wm.surface().pane(notes).is_none());
    // a closed title can be opened again as a fresh window
    let reopened = open(&mut wm, "Notes");
    assert_ne!(reopened, notes);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut wm = manager();
    let ghost = WindowId::from_raw(42);
    assert!(!wm.focus_window(ghost));
    assert!(!wm.minimize_window(ghost));
    assert!(!wm.restore_window(ghost));
    assert!(!wm.toggle_maximize(ghost));
    assert!(!wm.close_window(ghost));
    assert_eq!(wm.z_counter(), 1000);
}

#[test]
fn missing_render_target_registers_nothing() {
    let mut wm = WindowManager::new(HeadlessSurface::detached());
    let err = wm
        .create_window("Notes", HeadlessContent::from("n"), WindowOptions::default())
        .unwrap_err();
    assert!(matches!(err, WmError::Surface(SurfaceError::TargetMissing)));
    assert!(wm.is_empty());
    assert!(wm.find_by_title("Notes").is_none());
}
