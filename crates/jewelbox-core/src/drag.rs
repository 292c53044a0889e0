use crate::constants::{DRAG_RADIANS_PER_PX, MAX_PITCH};
use glam::{Vec2, Vec3};

/// Free-form yaw/pitch rotation of the focused ring from pointer drags.
///
/// Yaw accumulates without bound; pitch is clamped so the ring never flips
/// past vertical. Roll is always zero.
#[derive(Clone, Copy, Debug)]
pub struct DragRotate {
    dragging: bool,
    previous: Vec2,
    yaw: f32,
    pitch: f32,
    radians_per_px: f32,
}

impl DragRotate {
    /// Seed the cumulative angles from the ring's current rotation. Pitch is
    /// taken as-is and only clamped once a drag moves it.
    pub fn new(start_rotation: Vec3, radians_per_px: f32) -> Self {
        Self {
            dragging: false,
            previous: Vec2::ZERO,
            yaw: start_rotation.y,
            pitch: start_rotation.x,
            radians_per_px,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }

    /// Degrees, for logging.
    pub fn angles_deg(&self) -> (f32, f32) {
        (self.pitch.to_degrees(), self.yaw.to_degrees())
    }

    pub fn press(&mut self, at: Vec2) {
        self.dragging = true;
        self.previous = at;
    }

    /// Returns the new rotation, or `None` when no drag is in progress.
    pub fn drag_to(&mut self, at: Vec2) -> Option<Vec3> {
        if !self.dragging {
            return None;
        }
        let delta = at - self.previous;
        self.previous = at;
        self.yaw += delta.x * self.radians_per_px;
        self.pitch = (self.pitch - delta.y * self.radians_per_px).clamp(-MAX_PITCH, MAX_PITCH);
        Some(self.rotation())
    }

    /// Returns whether a drag was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }
}

impl Default for DragRotate {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DRAG_RADIANS_PER_PX)
    }
}
