//! Three-point lighting rig shown around the focused ring.

use crate::constants::{vec3, FILL_OFFSET, RIM_OFFSET, SPOT_OFFSET};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightRole {
    /// Main illumination from front-top, aimed at the ring.
    Key,
    /// Edge definition from behind.
    Rim,
    /// Shadow softening from the side.
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Spot { angle_deg: f32, penumbra: f32 },
    Point { decay: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightSpec {
    pub role: LightRole,
    /// Element id the host gives the light entity.
    pub id: &'static str,
    pub kind: LightKind,
    pub color: &'static str,
    pub intensity: f32,
    pub distance: f32,
    pub cast_shadow: bool,
    /// Initial position before the first placement.
    pub initial_position: Vec3,
    /// Offset from the focus target once placed.
    pub offset: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub lights: SmallVec<[LightSpec; 3]>,
}

/// World positions for each light, plus the point the key light aims at.
#[derive(Clone, Debug, PartialEq)]
pub struct LightPlacement {
    pub target: Vec3,
    pub positions: SmallVec<[(LightRole, Vec3); 3]>,
}

impl LightPlacement {
    pub fn position_of(&self, role: LightRole) -> Option<Vec3> {
        self.positions
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, p)| *p)
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::three_point()
    }
}

impl LightRig {
    pub fn three_point() -> Self {
        let lights = SmallVec::from_buf([
            LightSpec {
                role: LightRole::Key,
                id: "focusSpotlight",
                kind: LightKind::Spot {
                    angle_deg: 45.0,
                    penumbra: 0.3,
                },
                color: "#FFFFFF",
                intensity: 2.0,
                distance: 10.0,
                cast_shadow: false,
                initial_position: Vec3::new(0.0, 2.0, 3.0),
                offset: vec3(SPOT_OFFSET),
            },
            LightSpec {
                role: LightRole::Rim,
                id: "rimLight",
                kind: LightKind::Point { decay: 2.0 },
                color: "#FFE4B5",
                intensity: 1.5,
                distance: 5.0,
                cast_shadow: false,
                initial_position: Vec3::new(0.0, 1.5, 1.5),
                offset: vec3(RIM_OFFSET),
            },
            LightSpec {
                role: LightRole::Fill,
                id: "fillLight",
                kind: LightKind::Point { decay: 2.0 },
                color: "#FFFFFF",
                intensity: 0.8,
                distance: 4.0,
                cast_shadow: false,
                initial_position: Vec3::new(1.5, 1.0, 2.5),
                offset: vec3(FILL_OFFSET),
            },
        ]);
        Self { lights }
    }

    pub fn get(&self, role: LightRole) -> Option<&LightSpec> {
        self.lights.iter().find(|l| l.role == role)
    }

    pub fn place_around(&self, target: Vec3) -> LightPlacement {
        LightPlacement {
            target,
            positions: self
                .lights
                .iter()
                .map(|l| (l.role, target + l.offset))
                .collect(),
        }
    }
}
