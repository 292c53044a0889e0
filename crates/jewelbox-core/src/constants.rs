use glam::Vec3;

// Shared timing/layout tuning constants for the focus interaction.

// Transitions
pub const FOCUS_DURATION_MS: u64 = 800; // ring + camera tweens on focus
pub const CLOSE_DURATION_MS: u64 = 800; // ring + camera tweens on close
pub const LIGHT_REVEAL_DELAY_MS: u64 = 400; // focus lights fade in mid-transition
pub const CLOSE_SETTLE_DELAY_MS: u64 = 100; // pause before restoring the layout

// Camera rig resting position (world space)
pub const CAMERA_RIG_ORIGIN: [f32; 3] = [0.0, 1.0, 0.0];

// Per-ring focus defaults, used when a ring omits the data attribute
pub const DEFAULT_FOCUS_POSITION: [f32; 3] = [0.0, 0.8, 2.5];
pub const DEFAULT_FOCUS_SCALE: [f32; 3] = [0.15, 0.15, 0.15];
pub const DEFAULT_FOCUS_ROTATION_DEG: [f32; 3] = [0.0, 45.0, 0.0];
pub const DEFAULT_ORIGIN_ROTATION_DEG: [f32; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_CAMERA_BACK: f32 = 0.8;

// Drag rotation
pub const DRAG_RADIANS_PER_PX: f32 = 0.01;
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;

// Focus light offsets relative to the focused ring
pub const SPOT_OFFSET: [f32; 3] = [0.0, 1.5, 1.0];
pub const RIM_OFFSET: [f32; 3] = [0.0, 0.7, -1.0];
pub const FILL_OFFSET: [f32; 3] = [1.0, 0.0, 0.5];

// Metal look applied to loaded ring meshes
pub const RING_METALNESS: f32 = 0.95;
pub const RING_ROUGHNESS: f32 = 0.2;

#[inline]
pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}
