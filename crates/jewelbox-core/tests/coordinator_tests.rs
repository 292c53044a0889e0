// Drives the coordinator through full focus/close cycles against a host that
// records every side effect.

use glam::{Vec2, Vec3};
use jewelbox_core::{
    FocusError, FocusPhase, Jewelbox, LightPlacement, LightRig, LightRole, RingId, RingLayout,
    SceneHost, Transform, ViewerConfig,
};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    RingTransform(RingId, Transform),
    RingVisible(RingId, bool),
    DragRotate(RingId, bool),
    CameraRig(Vec3),
    LookControls(bool),
    CloseButton(bool),
    CreateLights(usize),
    LightsVisible(bool),
    PlaceLights(LightPlacement),
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<Call>,
}

impl RecordingHost {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl SceneHost for RecordingHost {
    fn set_ring_transform(&mut self, ring: RingId, transform: &Transform) {
        self.calls.push(Call::RingTransform(ring, *transform));
    }
    fn set_ring_visible(&mut self, ring: RingId, visible: bool) {
        self.calls.push(Call::RingVisible(ring, visible));
    }
    fn set_drag_rotate(&mut self, ring: RingId, active: bool) {
        self.calls.push(Call::DragRotate(ring, active));
    }
    fn set_camera_rig_position(&mut self, position: Vec3) {
        self.calls.push(Call::CameraRig(position));
    }
    fn set_look_controls(&mut self, enabled: bool) {
        self.calls.push(Call::LookControls(enabled));
    }
    fn set_close_button_visible(&mut self, visible: bool) {
        self.calls.push(Call::CloseButton(visible));
    }
    fn create_lights(&mut self, rig: &LightRig) {
        self.calls.push(Call::CreateLights(rig.lights.len()));
    }
    fn set_lights_visible(&mut self, visible: bool) {
        self.calls.push(Call::LightsVisible(visible));
    }
    fn place_lights(&mut self, placement: &LightPlacement) {
        self.calls.push(Call::PlaceLights(placement.clone()));
    }
}

const FRAME: Duration = Duration::from_millis(100);

fn layout(origin: &str) -> RingLayout {
    let origin = origin.to_string();
    RingLayout::from_attributes(move |name| match name {
        "data-origin" => Some(origin.clone()),
        "data-scale" => Some("0.1 0.1 0.1".into()),
        _ => None,
    })
    .expect("valid layout")
}

fn jewelbox() -> Jewelbox<RecordingHost> {
    let mut jb = Jewelbox::new(RecordingHost::default(), ViewerConfig::default());
    jb.add_ring("ring1", layout("-1 1 -2"));
    jb.add_ring("ring2", layout("0 1 -2"));
    jb.add_ring("ring3", layout("1 1 -2"));
    jb.host_mut().take();
    jb
}

fn lit(calls: &[Call]) -> bool {
    calls
        .iter()
        .any(|c| matches!(c, Call::LightsVisible(true) | Call::PlaceLights(_)))
}

fn run_for(jb: &mut Jewelbox<RecordingHost>, frames: usize) {
    for _ in 0..frames {
        jb.tick(FRAME);
    }
}

fn focused(jb: &mut Jewelbox<RecordingHost>, ring: RingId) {
    jb.focus(ring).expect("focus accepted");
    run_for(jb, 8);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focused);
    jb.host_mut().take();
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn focus_isolates_ring_and_prepares_scene() {
    let mut jb = jewelbox();
    jb.focus(RingId(1)).expect("focus accepted");
    let calls = jb.host_mut().take();
    assert_eq!(
        calls,
        vec![
            Call::RingVisible(RingId(0), false),
            Call::RingVisible(RingId(1), true),
            Call::RingVisible(RingId(2), false),
            Call::LookControls(false),
            Call::CreateLights(3),
            Call::CloseButton(true),
        ]
    );
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focusing);
    assert_eq!(jb.focus_state().focused_ring(), Some(RingId(1)));
    assert!(!jb.focus_state().can_interact());
}

#[test]
fn lights_are_revealed_mid_transition() {
    let mut jb = jewelbox();
    jb.focus(RingId(0)).expect("focus accepted");
    jb.host_mut().take();

    run_for(&mut jb, 3);
    assert!(!jb.host().calls.contains(&Call::LightsVisible(true)));

    jb.tick(FRAME);
    let calls = jb.host_mut().take();
    assert!(calls.contains(&Call::LightsVisible(true)));
    let placement = calls
        .iter()
        .find_map(|c| match c {
            Call::PlaceLights(p) => Some(p.clone()),
            _ => None,
        })
        .expect("lights placed");
    assert_eq!(placement.target, Vec3::new(0.0, 0.8, 2.5));
    let key = placement.position_of(LightRole::Key).expect("key light");
    assert!(approx(key, Vec3::new(0.0, 2.3, 3.5)));
}

#[test]
fn focus_completes_after_all_three_tracks() {
    let mut jb = jewelbox();
    jb.focus(RingId(2)).expect("focus accepted");
    run_for(&mut jb, 7);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focusing);
    assert!(!jb.drag_enabled());
    jb.host_mut().take();

    jb.tick(FRAME);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focused);
    assert!(jb.drag_enabled());
    let calls = jb.host_mut().take();
    assert!(calls.contains(&Call::DragRotate(RingId(2), true)));
    let ring = jb.rings().get(RingId(2)).expect("ring");
    assert_eq!(ring.current, ring.layout.focus);
    assert!(approx(jb.camera_rig_position(), Vec3::new(0.0, 1.0, 0.8)));
    assert!(jb.is_settled());
}

#[test]
fn transform_is_interpolated_between_frames() {
    let mut jb = jewelbox();
    jb.focus(RingId(0)).expect("focus accepted");
    run_for(&mut jb, 4);
    let ring = jb.rings().get(RingId(0)).expect("ring");
    // Halfway through a cubic ease-in-out is exactly halfway in space.
    let mid = (ring.layout.origin.position + ring.layout.focus.position) * 0.5;
    assert!(approx(ring.current.position, mid));
    assert!(approx(jb.camera_rig_position(), Vec3::new(0.0, 1.0, 0.4)));
}

#[test]
fn clicks_are_ignored_while_busy() {
    let mut jb = jewelbox();
    jb.focus(RingId(0)).expect("focus accepted");
    jb.host_mut().take();
    assert_eq!(jb.focus(RingId(1)), Err(FocusError::Busy));
    assert!(jb.host().calls.is_empty());

    run_for(&mut jb, 8);
    assert_eq!(jb.focus(RingId(1)), Err(FocusError::Busy));
    assert_eq!(jb.focus_state().focused_ring(), Some(RingId(0)));
}

#[test]
fn close_is_gated_on_state() {
    let mut jb = jewelbox();
    assert_eq!(jb.close(), Err(FocusError::NothingFocused));
    jb.focus(RingId(0)).expect("focus accepted");
    assert_eq!(jb.close(), Err(FocusError::Animating));
    run_for(&mut jb, 8);
    jb.close().expect("close accepted");
    assert_eq!(jb.close(), Err(FocusError::Animating));
}

#[test]
fn close_returns_everything_to_the_layout() {
    let mut jb = jewelbox();
    focused(&mut jb, RingId(1));

    jb.close().expect("close accepted");
    let calls = jb.host_mut().take();
    assert_eq!(
        calls,
        vec![
            Call::RingVisible(RingId(1), true),
            Call::DragRotate(RingId(1), false),
            Call::LightsVisible(false),
        ]
    );
    assert!(!jb.drag_enabled());

    run_for(&mut jb, 8);
    let ring = jb.rings().get(RingId(1)).expect("ring");
    assert_eq!(ring.current, ring.layout.origin);
    assert!(approx(jb.camera_rig_position(), Vec3::new(0.0, 1.0, 0.0)));
    // Layout is restored only after the settle delay.
    assert_eq!(jb.focus_state().phase(), FocusPhase::Closing);
    assert!(!jb.host().calls.contains(&Call::CloseButton(false)));

    jb.tick(FRAME);
    let calls = jb.host_mut().take();
    for id in 0..3 {
        assert!(calls.contains(&Call::RingVisible(RingId(id), true)));
    }
    assert!(calls.contains(&Call::CloseButton(false)));
    assert!(calls.contains(&Call::LookControls(true)));
    assert_eq!(jb.focus_state().phase(), FocusPhase::Idle);
    assert_eq!(jb.focus_state().focused_ring(), None);
    assert!(jb.focus_state().can_interact());
    assert!(jb.is_settled());
}

#[test]
fn lights_are_created_once_across_cycles() {
    let mut jb = jewelbox();
    let mut created = 0;
    for ring in [RingId(0), RingId(2)] {
        jb.focus(ring).expect("focus accepted");
        run_for(&mut jb, 8);
        jb.close().expect("close accepted");
        run_for(&mut jb, 9);
        created += jb
            .host_mut()
            .take()
            .iter()
            .filter(|c| matches!(c, Call::CreateLights(_)))
            .count();
    }
    assert_eq!(created, 1);
    assert!(jb.lights_created());
}

#[test]
fn drag_rotates_the_focused_ring() {
    let mut jb = jewelbox();
    focused(&mut jb, RingId(0));
    let start = jb.rings().get(RingId(0)).expect("ring").current.rotation;

    assert!(jb.pointer_down(Vec2::new(200.0, 200.0), false));
    assert!(jb.pointer_move(Vec2::new(250.0, 190.0)));
    let rot = jb.rings().get(RingId(0)).expect("ring").current.rotation;
    assert!((rot.y - (start.y + 0.5)).abs() < 1e-5);
    assert!((rot.x - 0.1).abs() < 1e-5);
    assert_eq!(rot.z, 0.0);
    assert!(matches!(
        jb.host().calls.last(),
        Some(Call::RingTransform(RingId(0), t)) if t.rotation == rot
    ));

    jb.pointer_up();
    assert!(!jb.pointer_move(Vec2::new(400.0, 400.0)));
}

#[test]
fn drag_ignores_close_button_and_transitions() {
    let mut jb = jewelbox();
    assert!(!jb.pointer_down(Vec2::ZERO, false));

    jb.focus(RingId(0)).expect("focus accepted");
    run_for(&mut jb, 2);
    assert!(!jb.pointer_down(Vec2::ZERO, false));
    assert!(!jb.pointer_move(Vec2::new(10.0, 10.0)));

    run_for(&mut jb, 6);
    assert!(!jb.pointer_down(Vec2::ZERO, true));
    assert!(!jb.pointer_move(Vec2::new(10.0, 10.0)));
}

#[test]
fn close_animates_back_from_the_dragged_pose() {
    let mut jb = jewelbox();
    focused(&mut jb, RingId(0));
    jb.pointer_down(Vec2::ZERO, false);
    jb.pointer_move(Vec2::new(100.0, -1000.0));
    jb.pointer_up();
    let dragged = jb.rings().get(RingId(0)).expect("ring").current.rotation;
    assert_eq!(dragged.x, std::f32::consts::FRAC_PI_2);

    jb.close().expect("close accepted");
    jb.tick(FRAME);
    let mid = jb.rings().get(RingId(0)).expect("ring").current.rotation;
    assert!(mid.x > 0.0 && mid.x < dragged.x);
    run_for(&mut jb, 8);
    assert_eq!(
        jb.rings().get(RingId(0)).expect("ring").current.rotation,
        Vec3::ZERO
    );
}

#[test]
fn focus_by_name_resolves_element_ids() {
    let mut jb = jewelbox();
    assert_eq!(
        jb.focus_by_name("ring9"),
        Err(FocusError::UnknownName("ring9".into()))
    );
    jb.focus_by_name("ring3").expect("known ring");
    assert_eq!(jb.focus_state().focused_ring(), Some(RingId(2)));
}

#[test]
fn custom_timings_are_honoured() {
    let config = ViewerConfig::from_json(
        r#"{ "focus_duration_ms": 200, "light_reveal_delay_ms": 0, "close_settle_delay_ms": 0 }"#,
    )
    .expect("valid config");
    let mut jb = Jewelbox::new(RecordingHost::default(), config);
    jb.add_ring("solo", layout("0 0 0"));
    jb.focus(RingId(0)).expect("focus accepted");
    jb.tick(FRAME);
    assert!(jb.host().calls.contains(&Call::LightsVisible(true)));
    jb.tick(FRAME);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focused);
}

#[test]
fn reveal_rings_waits_for_idle() {
    let mut jb = jewelbox();
    jb.reveal_rings();
    assert_eq!(
        jb.host_mut().take(),
        (0..3).map(|i| Call::RingVisible(RingId(i), true)).collect::<Vec<_>>()
    );

    jb.focus(RingId(0)).expect("focus accepted");
    jb.host_mut().take();
    jb.reveal_rings();
    assert!(jb.host().calls.is_empty());
}

#[test]
fn registered_rings_are_placed_at_their_origin() {
    let mut jb = Jewelbox::new(RecordingHost::default(), ViewerConfig::default());
    let id = jb.add_ring("solo", layout("2 1 -3"));
    let origin = jb.rings().get(id).expect("ring").layout.origin;
    assert_eq!(origin.position, Vec3::new(2.0, 1.0, -3.0));
    assert_eq!(jb.host().calls, vec![Call::RingTransform(id, origin)]);
}

#[test]
fn late_light_reveal_never_fires_after_close() {
    let config = ViewerConfig::from_json(r#"{ "light_reveal_delay_ms": 3000 }"#)
        .expect("valid config");
    let mut jb = Jewelbox::new(RecordingHost::default(), config);
    jb.add_ring("ring1", layout("-1 1 -2"));
    jb.focus(RingId(0)).expect("focus accepted");
    run_for(&mut jb, 8);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Focused);
    jb.close().expect("close accepted");
    jb.host_mut().take();

    // Through Closing, the settle delay and well past the original deadline.
    run_for(&mut jb, 30);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Idle);
    assert!(!lit(&jb.host_mut().take()));
    assert!(jb.is_settled());
}

#[test]
fn lights_follow_the_ring_focused_after_a_cancelled_reveal() {
    let config = ViewerConfig::from_json(r#"{ "light_reveal_delay_ms": 3000 }"#)
        .expect("valid config");
    let mut jb = Jewelbox::new(RecordingHost::default(), config);
    jb.add_ring("ring1", layout("-1 1 -2"));
    let far = RingLayout::from_attributes(|name| match name {
        "data-origin" => Some("1 1 -2".into()),
        "data-focus-position" => Some("5 5 5".into()),
        _ => None,
    })
    .expect("valid layout");
    jb.add_ring("ring2", far);

    jb.focus(RingId(0)).expect("focus accepted");
    run_for(&mut jb, 8);
    jb.close().expect("close accepted");
    run_for(&mut jb, 9);
    assert_eq!(jb.focus_state().phase(), FocusPhase::Idle);

    jb.focus(RingId(1)).expect("focus accepted");
    jb.host_mut().take();
    run_for(&mut jb, 13);
    let calls = jb.host_mut().take();
    assert!(!lit(&calls));

    // Only the reveal scheduled for ring2 fires, at its own 3000 ms mark.
    run_for(&mut jb, 17);
    let targets: Vec<Vec3> = jb
        .host()
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::PlaceLights(p) => Some(p.target),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![Vec3::new(5.0, 5.0, 5.0)]);
    assert_eq!(jb.focus_state().focused_ring(), Some(RingId(1)));
}
