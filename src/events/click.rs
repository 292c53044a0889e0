use crate::constants::RING_HITBOX_SELECTOR;
use crate::dom;
use crate::scene::SharedJewelbox;
use jewelbox_core::RingId;
use web_sys as web;

/// Clicking a ring's hitbox focuses the ring group that contains it. Groups
/// without a dedicated hitbox take clicks on the group itself.
pub fn wire_ring_clicks(jewelbox: &SharedJewelbox, rings: &[(RingId, web::Element)]) {
    for (id, group) in rings {
        let target = match group.query_selector(RING_HITBOX_SELECTOR) {
            Ok(Some(hitbox)) => hitbox,
            _ => group.clone(),
        };
        let jb = jewelbox.clone();
        let id = *id;
        let name = group.id();
        dom::add_listener(&target, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            ev.prevent_default();
            log::info!("[click] hitbox clicked for {}", name);
            // Rejections are logged by the coordinator.
            _ = jb.borrow_mut().focus(id);
        });
        log::debug!("[click] handler attached to {}", group.id());
    }
}

pub fn wire_close_button(jewelbox: &SharedJewelbox, button: &web::HtmlElement) {
    let jb = jewelbox.clone();
    dom::add_listener(button, "click", move |ev: web::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        _ = jb.borrow_mut().close();
    });
    // Keep touches on the button from reaching the scene's drag handlers.
    dom::add_listener(button, "touchstart", move |ev: web::TouchEvent| {
        ev.stop_propagation();
    });
}
