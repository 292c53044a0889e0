use glam::Vec3;
use jewelbox_core::{LightKind, LightSpec};

// A-Frame attribute strings built from core types.

/// `"x y z"`, the form A-Frame accepts for vec3 attributes.
#[inline]
pub fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// The `rotation` attribute is in degrees; `object3D.rotation` is radians.
#[inline]
pub fn rotation_attr(radians: Vec3) -> String {
    vec3_attr(Vec3::new(
        radians.x.to_degrees(),
        radians.y.to_degrees(),
        radians.z.to_degrees(),
    ))
}

#[inline]
pub fn bool_attr(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Value of the `light` component for one light of the focus rig.
pub fn light_component(spec: &LightSpec) -> String {
    let common = format!(
        "color: {}; intensity: {}; distance: {}",
        spec.color, spec.intensity, spec.distance
    );
    match spec.kind {
        LightKind::Spot {
            angle_deg,
            penumbra,
        } => format!(
            "type: spot; {}; angle: {}; penumbra: {}; castShadow: {}",
            common,
            angle_deg,
            penumbra,
            bool_attr(spec.cast_shadow)
        ),
        LightKind::Point { decay } => format!("type: point; {}; decay: {}", common, decay),
    }
}
