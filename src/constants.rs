// DOM hooks and page timing used by the web front-end.
// The scene markup is authored by hand, so every selector and id the glue
// relies on lives here rather than inline at the call sites.

// Scene structure
pub const SCENE_SELECTOR: &str = "a-scene";
pub const ASSETS_SELECTOR: &str = "a-assets";
pub const RING_GROUP_SELECTOR: &str = ".ring-group";
pub const RING_HITBOX_SELECTOR: &str = "[ring-click]";
pub const RING_MODEL_SELECTOR: &str = "[gltf-model]";

// Element ids
pub const CAMERA_RIG_ID: &str = "cameraRig";
pub const MAIN_CAMERA_ID: &str = "mainCamera";
pub const CLOSE_BUTTON_ID: &str = "closeButton";
pub const LOADING_MESSAGE_ID: &str = "loadingMessage";
pub const CONFIG_SCRIPT_ID: &str = "jewelbox-config";

// A-Frame component names
pub const LOOK_CONTROLS_COMPONENT: &str = "look-controls";
pub const DRAG_ROTATE_ATTR: &str = "drag-rotate-active";
pub const MESH_OBJECT_KEY: &str = "mesh";

// Loading overlay
pub const ASSETS_SETTLE_MS: i32 = 500; // after a-assets reports loaded
pub const LOADING_FALLBACK_MS: i32 = 3000; // hide the overlay even if assets never report
