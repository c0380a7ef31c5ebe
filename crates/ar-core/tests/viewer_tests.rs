// End-to-end event routing through the viewer, plus scene mapping, control
// buttons and marker status.

use ar_core::*;
use glam::{Vec2, Vec3};
use smallvec::smallvec;
use std::cell::RefCell;
use std::rc::Rc;

fn viewer() -> Viewer<str> {
    Viewer::new(
        ViewerConfig::default(),
        |target: &str| target == "control-panel" || target == "popup",
        HotspotCatalog::property(),
    )
    .expect("default config is valid")
}

fn press<'a>(target: &'a str, x: f32, y: f32) -> ViewerEvent<'a, str> {
    ViewerEvent::Press {
        target,
        contacts: smallvec![Vec2::new(x, y)],
    }
}

fn drag_to<'a>(x: f32, y: f32) -> ViewerEvent<'a, str> {
    ViewerEvent::Move {
        contacts: smallvec![Vec2::new(x, y)],
    }
}

#[test]
fn scene_transform_of_default_pose_has_base_tilt() {
    let t = SceneTransform::from_pose(&Pose::default(), BASE_TILT_DEG);
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Vec3::new(-90.0, 0.0, 0.0));
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.position_attr(), "0 0 0");
    assert_eq!(t.rotation_attr(), "-90 0 0");
    assert_eq!(t.scale_attr(), "1 1 1");
}

#[test]
fn scene_transform_maps_every_pose_field() {
    let pose = Pose {
        rotation_x: 30.0,
        rotation_y: -45.5,
        position_x: 0.4,
        position_z: -0.2,
        scale: 2.5,
    };
    let t = SceneTransform::from_pose(&pose, -90.0);
    assert_eq!(t.position, Vec3::new(0.4, 0.0, -0.2));
    assert_eq!(t.rotation, Vec3::new(-60.0, -45.5, 0.0));
    assert_eq!(t.scale_attr(), "2.5 2.5 2.5");
}

#[test]
fn buttons_parse_from_ids_and_element_ids() {
    assert_eq!("up".parse::<ControlButton>(), Ok(ControlButton::Up));
    assert_eq!("zoom-in".parse::<ControlButton>(), Ok(ControlButton::ZoomIn));
    assert_eq!("btn-zoom-out".parse::<ControlButton>(), Ok(ControlButton::ZoomOut));
    assert_eq!(
        "spin".parse::<ControlButton>(),
        Err(Error::UnknownButton("spin".into()))
    );
    for b in ControlButton::ALL {
        assert_eq!(b.element_id().parse::<ControlButton>(), Ok(b));
    }
}

#[test]
fn pan_buttons_move_along_expected_axes() {
    let mut pose = PoseMachine::default();
    ControlButton::Up.apply(&mut pose);
    assert!(pose.current().position_z < 0.0);
    ControlButton::Down.apply(&mut pose);
    ControlButton::Down.apply(&mut pose);
    assert!(pose.current().position_z > 0.0);
    ControlButton::Left.apply(&mut pose);
    assert!(pose.current().position_x < 0.0);
    ControlButton::Right.apply(&mut pose);
    assert!(pose.current().position_x.abs() < 1e-6);
    ControlButton::Reset.apply(&mut pose);
    assert_eq!(pose.current(), Pose::default());
}

#[test]
fn marker_status_labels() {
    let mut m = MarkerVisibility::default();
    assert_eq!(m.status(), MarkerStatus::Searching);
    assert_eq!(m.status().label(), "Cari Marker...");
    assert_eq!(m.status().background(), None);
    m.found();
    assert!(m.is_visible());
    assert_eq!(m.status().label(), "Marker Terdeteksi");
    assert_eq!(m.status().color(), "#27ae60");
    m.lost();
    assert_eq!(m.status().color(), "#8a3324");
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ViewerConfig {
        position_step: -1.0,
        ..ViewerConfig::default()
    };
    let res = Viewer::<str>::new(config, |_: &str| false, HotspotCatalog::property());
    assert!(res.is_err());
}

#[test]
fn drag_before_marker_found_does_not_rotate() {
    let mut v = viewer();
    v.handle(press("scene", 0.0, 0.0));
    v.handle(drag_to(40.0, 40.0));
    assert_eq!(v.pose.current(), Pose::default());

    v.handle(ViewerEvent::MarkerFound);
    v.handle(drag_to(44.0, 40.0));
    assert_eq!(v.pose.current().rotation_y, 2.0);
    assert_eq!(v.pose.current().rotation_x, 0.0);
}

#[test]
fn press_on_control_panel_then_move_leaves_pose() {
    let mut v = viewer();
    v.handle(ViewerEvent::MarkerFound);
    v.handle(press("control-panel", 0.0, 0.0));
    v.handle(drag_to(100.0, 100.0));
    v.handle(ViewerEvent::Release);
    assert_eq!(v.pose.current(), Pose::default());
}

#[test]
fn hotspot_click_is_consumed_without_starting_drag() {
    let mut v = viewer();
    v.handle(ViewerEvent::MarkerFound);
    let req = v.handle(ViewerEvent::HotspotClick("kitchen"));
    assert!(matches!(req, Some(PopupRequest::Show(ref c)) if c.title == "Dapur Terbuka"));
    assert_eq!(v.router.state(), GestureState::Idle);
    v.handle(drag_to(10.0, 10.0));
    assert_eq!(v.pose.current(), Pose::default());

    assert_eq!(v.handle(ViewerEvent::HotspotClick("garage")), None);
    assert_eq!(v.handle(ViewerEvent::ClosePopup), Some(PopupRequest::Close));
    assert!(v.hotspots.confirm_contact().is_some());
}

#[test]
fn scene_observer_receives_transform_after_each_command() {
    let mut v = viewer();
    let seen: Rc<RefCell<Vec<SceneTransform>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    v.on_scene_changed(move |t: &SceneTransform| sink.borrow_mut().push(*t));

    v.handle(ViewerEvent::Button(ControlButton::ZoomIn));
    v.handle(ViewerEvent::Button(ControlButton::Left));
    v.handle(ViewerEvent::MarkerFound);
    v.handle(press("scene", 0.0, 0.0));
    v.handle(drag_to(0.0, 20.0));
    v.handle(ViewerEvent::Release);
    v.handle(ViewerEvent::Button(ControlButton::Reset));

    let seen = seen.borrow();
    // marker and release events do not touch the pose
    assert_eq!(seen.len(), 4);
    assert!((seen[0].scale.x - 1.15).abs() < 1e-6);
    assert_eq!(seen[2].rotation, Vec3::new(-80.0, 0.0, 0.0));
    assert_eq!(seen[3], v.scene_transform());
    assert_eq!(seen[3].rotation, Vec3::new(-90.0, 0.0, 0.0));
}

#[test]
fn marker_lost_mid_drag_then_release() {
    let mut v = viewer();
    v.handle(ViewerEvent::MarkerFound);
    v.handle(press("scene", 0.0, 0.0));
    v.handle(drag_to(10.0, 0.0));
    v.handle(ViewerEvent::MarkerLost);
    v.handle(drag_to(30.0, 0.0));
    v.handle(ViewerEvent::Release);
    v.handle(ViewerEvent::MarkerFound);
    v.handle(drag_to(60.0, 0.0));
    assert_eq!(v.pose.current().rotation_y, 5.0);
    assert_eq!(v.router.state(), GestureState::Idle);
}
