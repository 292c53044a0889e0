use crate::dom;
use crate::scene::SharedJewelbox;
use web_sys as web;

/// `Escape` behaves like the close button.
pub fn wire_escape_close(jewelbox: &SharedJewelbox) {
    let Some(window) = web::window() else {
        return;
    };
    let jb = jewelbox.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        let mut jb = jb.borrow_mut();
        if jb.focus_state().focused_ring().is_some() {
            _ = jb.close();
            ev.prevent_default();
        }
    });
}
