use crate::aframe;
use crate::constants::{
    CAMERA_RIG_ID, CLOSE_BUTTON_ID, DRAG_ROTATE_ATTR, LOOK_CONTROLS_COMPONENT, MAIN_CAMERA_ID,
};
use crate::dom;
use crate::markup::{bool_attr, light_component, rotation_attr, vec3_attr};
use glam::Vec3;
use jewelbox_core::{Jewelbox, LightPlacement, LightRig, LightRole, RingId, SceneHost, Transform};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The coordinator as shared between event handlers and the frame loop.
pub type SharedJewelbox = Rc<RefCell<Jewelbox<WebScene>>>;

/// [`SceneHost`] backed by the entities of an A-Frame scene.
pub struct WebScene {
    document: web::Document,
    scene: web::Element,
    rings: Vec<web::Element>,
    camera_rig: Option<web::Element>,
    camera: Option<web::Element>,
    close_button: Option<web::HtmlElement>,
    lights: Vec<(LightRole, web::Element)>,
}

impl WebScene {
    pub fn new(document: &web::Document, scene: web::Element) -> Self {
        let camera_rig = document.get_element_by_id(CAMERA_RIG_ID);
        let camera = document.get_element_by_id(MAIN_CAMERA_ID);
        if camera_rig.is_none() {
            log::warn!("[scene] missing #{}", CAMERA_RIG_ID);
        }
        if camera.is_none() {
            log::warn!("[scene] missing #{}", MAIN_CAMERA_ID);
        }
        Self {
            document: document.clone(),
            scene,
            rings: Vec::new(),
            camera_rig,
            camera,
            close_button: dom::html_element_by_id(document, CLOSE_BUTTON_ID),
            lights: Vec::new(),
        }
    }

    /// Ring group elements must be added in the same order they are
    /// registered with the coordinator.
    pub fn add_ring(&mut self, el: web::Element) -> RingId {
        self.rings.push(el);
        RingId(self.rings.len() - 1)
    }

    fn set_visible(el: &web::Element, visible: bool) {
        _ = el.set_attribute("visible", bool_attr(visible));
    }
}

impl SceneHost for WebScene {
    fn set_ring_transform(&mut self, ring: RingId, transform: &Transform) {
        let Some(el) = self.rings.get(ring.0) else {
            return;
        };
        // Rings are placed at registration, before A-Frame has built object3D.
        if aframe::object3d(el).is_err() {
            _ = el.set_attribute("position", &vec3_attr(transform.position));
            _ = el.set_attribute("scale", &vec3_attr(transform.scale));
            _ = el.set_attribute("rotation", &rotation_attr(transform.rotation));
            return;
        }
        let res = aframe::set_vec3(el, "position", transform.position)
            .and_then(|_| aframe::set_vec3(el, "scale", transform.scale))
            .and_then(|_| aframe::set_vec3(el, "rotation", transform.rotation));
        if let Err(e) = res {
            log::error!("[scene] {} transform: {:?}", ring, e);
        }
    }

    fn set_ring_visible(&mut self, ring: RingId, visible: bool) {
        if let Some(el) = self.rings.get(ring.0) {
            Self::set_visible(el, visible);
        }
    }

    fn set_drag_rotate(&mut self, ring: RingId, active: bool) {
        let Some(el) = self.rings.get(ring.0) else {
            return;
        };
        if active {
            _ = el.set_attribute(DRAG_ROTATE_ATTR, "");
        } else {
            _ = el.remove_attribute(DRAG_ROTATE_ATTR);
        }
    }

    fn set_camera_rig_position(&mut self, position: Vec3) {
        if let Some(rig) = &self.camera_rig {
            if let Err(e) = aframe::set_vec3(rig, "position", position) {
                log::error!("[scene] camera rig: {:?}", e);
            }
        }
    }

    fn set_look_controls(&mut self, enabled: bool) {
        if let Some(camera) = &self.camera {
            if aframe::set_component_playing(camera, LOOK_CONTROLS_COMPONENT, enabled) {
                log::info!(
                    "[scene] look controls {}",
                    if enabled { "resumed" } else { "paused" }
                );
            }
        }
    }

    fn set_close_button_visible(&mut self, visible: bool) {
        if let Some(btn) = &self.close_button {
            dom::set_display(btn, visible);
        }
    }

    fn create_lights(&mut self, rig: &LightRig) {
        for spec in &rig.lights {
            let el = match self.document.create_element("a-entity") {
                Ok(el) => el,
                Err(e) => {
                    log::error!("[scene] create light {}: {:?}", spec.id, e);
                    continue;
                }
            };
            _ = el.set_attribute("light", &light_component(spec));
            _ = el.set_attribute("position", &vec3_attr(spec.initial_position));
            _ = el.set_attribute("id", spec.id);
            Self::set_visible(&el, false);
            if let Err(e) = self.scene.append_child(&el) {
                log::error!("[scene] append light {}: {:?}", spec.id, e);
                continue;
            }
            self.lights.push((spec.role, el));
        }
        log::info!("[scene] focus lighting system created ({} lights)", self.lights.len());
    }

    fn set_lights_visible(&mut self, visible: bool) {
        for (_, el) in &self.lights {
            Self::set_visible(el, visible);
        }
    }

    fn place_lights(&mut self, placement: &LightPlacement) {
        for (role, el) in &self.lights {
            let Some(pos) = placement.position_of(*role) else {
                continue;
            };
            // Entities appended this frame may not have their object3D yet.
            if aframe::set_vec3(el, "position", pos).is_err() {
                _ = el.set_attribute("position", &vec3_attr(pos));
                continue;
            }
            if *role == LightRole::Key {
                _ = aframe::look_at(el, placement.target);
            }
        }
    }
}
