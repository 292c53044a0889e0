//! Interaction core of the jewelbox viewer: focus state, eased tweens,
//! drag rotation and the three-point focus lighting rig.
//!
//! Nothing here touches the DOM. The web front-end implements [`SceneHost`]
//! and feeds clicks, pointer moves and frame deltas into [`Jewelbox`].

pub mod config;
pub mod constants;
pub mod coordinator;
pub mod drag;
pub mod easing;
pub mod focus;
pub mod lighting;
pub mod ring;
pub mod scene;
pub mod tween;

pub use config::{ConfigError, ViewerConfig};
pub use coordinator::Jewelbox;
pub use drag::DragRotate;
pub use easing::Easing;
pub use focus::{FocusError, FocusPhase, FocusState};
pub use lighting::{LightKind, LightPlacement, LightRig, LightRole, LightSpec};
pub use ring::{parse_vec3, RingConfigError, RingLayout, RingRegistry};
pub use scene::{RingId, SceneHost, Transform};
pub use tween::{CompletionCounter, Lerp, TransformTween, Tween, TweenStep};
