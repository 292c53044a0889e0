//! Sequencing of the focus and close transitions.
//!
//! [`Jewelbox`] owns every piece of interaction state and advances only when
//! [`Jewelbox::tick`] is called, so the browser frame loop and the tests drive
//! it the same way. Side effects go out through the [`SceneHost`].

use crate::config::ViewerConfig;
use crate::drag::DragRotate;
use crate::focus::{FocusError, FocusPhase, FocusState};
use crate::lighting::LightRig;
use crate::ring::{RingLayout, RingRegistry};
use crate::scene::{RingId, SceneHost};
use crate::tween::{TransformTween, Tween};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerAction {
    /// Show the focus lights around `target`.
    RevealLights { target: Vec3 },
    /// Restore the full layout once a close has landed.
    SettleClose,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    remaining: Duration,
    action: TimerAction,
}

pub struct Jewelbox<H: SceneHost> {
    host: H,
    config: ViewerConfig,
    rings: RingRegistry,
    focus: FocusState,
    rig: LightRig,
    lights_created: bool,
    camera_rig: Vec3,
    camera_tween: Option<Tween<Vec3>>,
    ring_tween: Option<(RingId, TransformTween)>,
    drag: Option<DragRotate>,
    timers: SmallVec<[Timer; 2]>,
}

impl<H: SceneHost> Jewelbox<H> {
    pub fn new(host: H, config: ViewerConfig) -> Self {
        let camera_rig = config.camera_rig_origin();
        Self {
            host,
            config,
            rings: RingRegistry::new(),
            focus: FocusState::new(),
            rig: LightRig::three_point(),
            lights_created: false,
            camera_rig,
            camera_tween: None,
            ring_tween: None,
            drag: None,
            timers: SmallVec::new(),
        }
    }

    /// Register a ring and snap it to its layout origin, which is where every
    /// focus transition starts from.
    pub fn add_ring(&mut self, name: impl Into<String>, layout: RingLayout) -> RingId {
        let name = name.into();
        log::info!("[scene] ring {} registered", name);
        let origin = layout.origin;
        let id = self.rings.add(name, layout);
        self.host.set_ring_transform(id, &origin);
        id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn rings(&self) -> &RingRegistry {
        &self.rings
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    pub fn camera_rig_position(&self) -> Vec3 {
        self.camera_rig
    }

    pub fn lights_created(&self) -> bool {
        self.lights_created
    }

    /// True while drag rotation is attached to the focused ring.
    pub fn drag_enabled(&self) -> bool {
        self.drag.is_some()
    }

    /// Nothing is animating and no timer is pending.
    pub fn is_settled(&self) -> bool {
        self.camera_tween.is_none() && self.ring_tween.is_none() && self.timers.is_empty()
    }

    /// Make every ring visible, unless one is focused or animating.
    pub fn reveal_rings(&mut self) {
        if self.focus.is_busy() {
            return;
        }
        for id in self.rings.ids() {
            self.host.set_ring_visible(id, true);
        }
    }

    pub fn focus_by_name(&mut self, name: &str) -> Result<(), FocusError> {
        match self.rings.find(name) {
            Some(id) => self.focus(id),
            None => {
                log::warn!("[focus] no ring named {}", name);
                Err(FocusError::UnknownName(name.to_string()))
            }
        }
    }

    /// Bring `ring` into the try-on pose.
    pub fn focus(&mut self, ring: RingId) -> Result<(), FocusError> {
        let (name, from, layout) = match self.rings.get(ring) {
            Some(r) => (r.name.clone(), r.current, r.layout.clone()),
            None => return Err(FocusError::UnknownRing(ring)),
        };
        if let Err(e) = self.focus.begin_focus(ring) {
            log::info!("[focus] ignored click on {}: {}", name, e);
            return Err(e);
        }
        log::info!("[focus] focusing {}", name);

        for id in self.rings.ids() {
            self.host.set_ring_visible(id, id == ring);
        }
        self.host.set_look_controls(false);

        let camera_target =
            self.config.camera_rig_origin() + Vec3::new(0.0, 0.0, layout.camera_back);
        log::info!(
            "[focus] camera rig -> ({:.2},{:.2},{:.2})",
            camera_target.x,
            camera_target.y,
            camera_target.z
        );
        self.camera_tween = Some(Tween::new(
            self.camera_rig,
            camera_target,
            self.config.focus_duration(),
        ));

        if !self.lights_created {
            self.host.create_lights(&self.rig);
            self.lights_created = true;
            log::info!("[focus] focus lighting created");
        }
        self.timers.push(Timer {
            remaining: self.config.light_reveal_delay(),
            action: TimerAction::RevealLights {
                target: layout.focus.position,
            },
        });

        self.ring_tween = Some((
            ring,
            TransformTween::new(from, layout.focus, self.config.focus_duration()),
        ));
        self.host.set_close_button_visible(true);
        Ok(())
    }

    /// Return the focused ring to its place in the layout.
    pub fn close(&mut self) -> Result<(), FocusError> {
        let ring = match self.focus.begin_close() {
            Ok(r) => r,
            Err(e) => {
                log::info!("[close] ignored: {}", e);
                return Err(e);
            }
        };
        let Some(r) = self.rings.get(ring) else {
            return Err(FocusError::UnknownRing(ring));
        };
        let (from, origin) = (r.current, r.layout.origin);
        log::info!("[close] closing {}", r.name);

        self.host.set_ring_visible(ring, true);
        self.detach_drag(ring);
        // A reveal still pending from this focus must not fire into the next one.
        self.timers
            .retain(|t| !matches!(t.action, TimerAction::RevealLights { .. }));
        if self.lights_created {
            self.host.set_lights_visible(false);
            log::info!("[close] focus lighting hidden");
        }

        self.camera_tween = Some(Tween::new(
            self.camera_rig,
            self.config.camera_rig_origin(),
            self.config.close_duration(),
        ));
        self.ring_tween = Some((
            ring,
            TransformTween::new(from, origin, self.config.close_duration()),
        ));
        Ok(())
    }

    /// Advance timers and tweens by `dt` and push the results to the host.
    pub fn tick(&mut self, dt: Duration) {
        self.run_timers(dt);

        if let Some(tween) = self.camera_tween.as_mut() {
            let step = tween.advance(dt);
            self.camera_rig = step.value;
            self.host.set_camera_rig_position(step.value);
            if step.just_finished {
                self.camera_tween = None;
            }
        }

        if let Some((ring, tween)) = self.ring_tween.as_mut() {
            let ring = *ring;
            let step = tween.advance(dt);
            if let Some(r) = self.rings.get_mut(ring) {
                r.current = step.transform;
            }
            self.host.set_ring_transform(ring, &step.transform);
            if step.finished {
                self.ring_tween = None;
                self.on_ring_tween_finished(ring, step.transform.rotation);
            }
        }
    }

    fn run_timers(&mut self, dt: Duration) {
        let mut fired: SmallVec<[TimerAction; 2]> = SmallVec::new();
        self.timers.retain(|t| {
            if t.remaining <= dt {
                fired.push(t.action);
                false
            } else {
                t.remaining -= dt;
                true
            }
        });
        for action in fired {
            match action {
                TimerAction::RevealLights { target } => self.reveal_lights(target),
                TimerAction::SettleClose => self.settle_close(),
            }
        }
    }

    fn reveal_lights(&mut self, target: Vec3) {
        if !matches!(
            self.focus.phase(),
            FocusPhase::Focusing | FocusPhase::Focused
        ) {
            return;
        }
        self.host.set_lights_visible(true);
        self.host.place_lights(&self.rig.place_around(target));
        log::info!("[focus] focus lighting activated");
    }

    fn on_ring_tween_finished(&mut self, ring: RingId, rotation: Vec3) {
        match self.focus.phase() {
            FocusPhase::Focusing => {
                self.focus.finish_focus();
                self.drag = Some(DragRotate::new(rotation, self.config.drag_radians_per_px));
                self.host.set_drag_rotate(ring, true);
                log::info!("[focus] focus complete, drag rotation enabled");
            }
            FocusPhase::Closing => {
                log::info!("[close] return animation complete");
                self.timers.push(Timer {
                    remaining: self.config.close_settle_delay(),
                    action: TimerAction::SettleClose,
                });
            }
            FocusPhase::Idle | FocusPhase::Focused => {}
        }
    }

    fn settle_close(&mut self) {
        for id in self.rings.ids() {
            self.host.set_ring_visible(id, true);
        }
        self.host.set_close_button_visible(false);
        self.host.set_look_controls(true);
        self.focus.finish_close();
        log::info!("[close] close complete");
    }

    fn detach_drag(&mut self, ring: RingId) {
        if self.drag.take().is_some() {
            self.host.set_drag_rotate(ring, false);
            log::info!("[drag] rotation disabled");
        }
    }

    /// Pointer pressed at `at` (client pixels). Presses on the close button
    /// never start a drag. Returns whether the press was consumed.
    pub fn pointer_down(&mut self, at: Vec2, on_close_button: bool) -> bool {
        if on_close_button || self.focus.phase() != FocusPhase::Focused {
            return false;
        }
        match self.drag.as_mut() {
            Some(drag) => {
                drag.press(at);
                log::debug!("[drag] started");
                true
            }
            None => false,
        }
    }

    /// Returns whether the move rotated the focused ring.
    pub fn pointer_move(&mut self, at: Vec2) -> bool {
        let Some(ring) = self.focus.focused_ring() else {
            return false;
        };
        let Some(rotation) = self.drag.as_mut().and_then(|d| d.drag_to(at)) else {
            return false;
        };
        if let Some(r) = self.rings.get_mut(ring) {
            r.current.rotation = rotation;
            let transform = r.current;
            self.host.set_ring_transform(ring, &transform);
        }
        true
    }

    pub fn pointer_up(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            if drag.release() {
                let (x, y) = drag.angles_deg();
                log::info!("[drag] ended X: {:.1} Y: {:.1} degrees", x, y);
            }
        }
    }
}
