//! Boundary to the host 3D framework.
//!
//! The coordinator never renders anything itself. It pushes transforms,
//! visibility flags and component state through [`SceneHost`], and the host
//! (A-Frame entities in the browser, a recorder in tests) applies them.

use crate::lighting::{LightPlacement, LightRig};
use glam::Vec3;

/// Index of a ring group in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingId(pub usize);

impl std::fmt::Display for RingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ring#{}", self.0)
    }
}

/// Object transform with Euler rotation in radians (XYZ order).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

pub trait SceneHost {
    fn set_ring_transform(&mut self, ring: RingId, transform: &Transform);
    fn set_ring_visible(&mut self, ring: RingId, visible: bool);
    /// Attach or detach the drag-rotate behaviour on a ring.
    fn set_drag_rotate(&mut self, ring: RingId, active: bool);

    fn set_camera_rig_position(&mut self, position: Vec3);
    /// Pause (`false`) or resume (`true`) the camera look-controls.
    fn set_look_controls(&mut self, enabled: bool);

    fn set_close_button_visible(&mut self, visible: bool);

    /// Create the focus lights, hidden. Called at most once.
    fn create_lights(&mut self, rig: &LightRig);
    fn set_lights_visible(&mut self, visible: bool);
    fn place_lights(&mut self, placement: &LightPlacement);
}
