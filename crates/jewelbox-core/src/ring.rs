//! Ring layout read from `data-*` attributes, and the registry of rings.

use crate::constants::{
    vec3, DEFAULT_CAMERA_BACK, DEFAULT_FOCUS_POSITION, DEFAULT_FOCUS_ROTATION_DEG,
    DEFAULT_FOCUS_SCALE, DEFAULT_ORIGIN_ROTATION_DEG,
};
use crate::scene::{RingId, Transform};
use fnv::FnvHashMap;
use glam::Vec3;

pub const ATTR_ORIGIN: &str = "data-origin";
pub const ATTR_SCALE: &str = "data-scale";
pub const ATTR_ORIGIN_ROTATION: &str = "data-origin-rotation";
pub const ATTR_FOCUS_POSITION: &str = "data-focus-position";
pub const ATTR_FOCUS_SCALE: &str = "data-focus-scale";
pub const ATTR_FOCUS_ROTATION: &str = "data-focus-rotation";
pub const ATTR_CAMERA_BACK: &str = "data-camera-back";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RingConfigError {
    #[error("missing attribute {0}")]
    Missing(&'static str),
    #[error("{attr}: expected three numbers, got {value:?}")]
    BadVector { attr: &'static str, value: String },
    #[error("{attr}: expected a number, got {value:?}")]
    BadNumber { attr: &'static str, value: String },
}

/// Parse a space-separated `"x y z"` vector.
pub fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut parts = s.split_whitespace().map(str::parse::<f32>);
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    let v = Vec3::new(x, y, z);
    v.is_finite().then_some(v)
}

fn degrees_to_radians(v: Vec3) -> Vec3 {
    Vec3::new(v.x.to_radians(), v.y.to_radians(), v.z.to_radians())
}

/// Resting and focused pose of one ring. Rotations are stored in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct RingLayout {
    pub origin: Transform,
    pub focus: Transform,
    /// How far the camera rig backs off along +Z while this ring is focused.
    pub camera_back: f32,
}

impl RingLayout {
    /// Build a layout from an attribute lookup (usually `Element::get_attribute`).
    pub fn from_attributes<F>(attr: F) -> Result<Self, RingConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vector = |name: &'static str, default: Option<[f32; 3]>| match attr(name) {
            Some(raw) => parse_vec3(&raw).ok_or(RingConfigError::BadVector {
                attr: name,
                value: raw,
            }),
            None => default.map(vec3).ok_or(RingConfigError::Missing(name)),
        };

        let origin = Transform {
            position: vector(ATTR_ORIGIN, None)?,
            scale: vector(ATTR_SCALE, None)?,
            rotation: degrees_to_radians(vector(
                ATTR_ORIGIN_ROTATION,
                Some(DEFAULT_ORIGIN_ROTATION_DEG),
            )?),
        };
        let focus = Transform {
            position: vector(ATTR_FOCUS_POSITION, Some(DEFAULT_FOCUS_POSITION))?,
            scale: vector(ATTR_FOCUS_SCALE, Some(DEFAULT_FOCUS_SCALE))?,
            rotation: degrees_to_radians(vector(
                ATTR_FOCUS_ROTATION,
                Some(DEFAULT_FOCUS_ROTATION_DEG),
            )?),
        };
        let camera_back = match attr(ATTR_CAMERA_BACK) {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(RingConfigError::BadNumber {
                        attr: ATTR_CAMERA_BACK,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_CAMERA_BACK,
        };
        Ok(Self {
            origin,
            focus,
            camera_back,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Ring {
    pub id: RingId,
    /// Element id of the ring group, used for logging and lookups.
    pub name: String,
    pub layout: RingLayout,
    /// Last transform pushed to the host.
    pub current: Transform,
}

/// Rings in document order.
#[derive(Clone, Debug, Default)]
pub struct RingRegistry {
    rings: Vec<Ring>,
    by_name: FnvHashMap<String, RingId>,
}

impl RingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, layout: RingLayout) -> RingId {
        let id = RingId(self.rings.len());
        let name = name.into();
        self.by_name.insert(name.clone(), id);
        self.rings.push(Ring {
            id,
            name,
            current: layout.origin,
            layout,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn get(&self, id: RingId) -> Option<&Ring> {
        self.rings.get(id.0)
    }

    pub fn get_mut(&mut self, id: RingId) -> Option<&mut Ring> {
        self.rings.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<RingId> {
        self.by_name.get(name).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = RingId> + '_ {
        self.rings.iter().map(|r| r.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter()
    }
}
