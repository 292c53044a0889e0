use crate::constants::CLOSE_BUTTON_ID;
use crate::dom;
use crate::scene::SharedJewelbox;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn mouse_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First touch point, if any finger is down.
#[inline]
fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn targets_close_button(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.id() == CLOSE_BUTTON_ID)
        .unwrap_or(false)
}

/// Mouse and touch drags anywhere on the scene rotate the focused ring. The
/// coordinator ignores them unless a ring is fully focused.
pub fn wire_drag_handlers(jewelbox: &SharedJewelbox, scene: &web::Element) {
    wire_mouse(jewelbox, scene);
    wire_touch(jewelbox, scene);
}

fn wire_mouse(jewelbox: &SharedJewelbox, scene: &web::Element) {
    let jb = jewelbox.clone();
    dom::add_listener(scene, "mousedown", move |ev: web::MouseEvent| {
        let on_close = targets_close_button(&ev);
        if jb.borrow_mut().pointer_down(mouse_point(&ev), on_close) {
            ev.prevent_default();
        }
    });

    let jb = jewelbox.clone();
    dom::add_listener(scene, "mousemove", move |ev: web::MouseEvent| {
        if jb.borrow_mut().pointer_move(mouse_point(&ev)) {
            ev.prevent_default();
        }
    });

    let jb = jewelbox.clone();
    dom::add_listener(scene, "mouseup", move |_ev: web::MouseEvent| {
        jb.borrow_mut().pointer_up();
    });
}

fn wire_touch(jewelbox: &SharedJewelbox, scene: &web::Element) {
    let jb = jewelbox.clone();
    dom::add_active_listener(scene, "touchstart", move |ev: web::TouchEvent| {
        let Some(at) = touch_point(&ev) else {
            return;
        };
        let on_close = targets_close_button(&ev);
        if jb.borrow_mut().pointer_down(at, on_close) {
            ev.prevent_default();
        }
    });

    let jb = jewelbox.clone();
    dom::add_active_listener(scene, "touchmove", move |ev: web::TouchEvent| {
        let Some(at) = touch_point(&ev) else {
            return;
        };
        if jb.borrow_mut().pointer_move(at) {
            ev.prevent_default();
        }
    });

    let jb = jewelbox.clone();
    dom::add_listener(scene, "touchend", move |_ev: web::TouchEvent| {
        jb.borrow_mut().pointer_up();
    });
}
