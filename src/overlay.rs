use crate::constants::{ASSETS_SELECTOR, ASSETS_SETTLE_MS, LOADING_FALLBACK_MS, LOADING_MESSAGE_ID};
use crate::dom;
use crate::scene::SharedJewelbox;
use web_sys as web;

#[inline]
pub fn hide_loading(document: &web::Document) {
    dom::hide_by_id(document, LOADING_MESSAGE_ID);
}

/// Hide the loading message once `a-assets` reports loaded, revealing the
/// ring layout. A fallback timer hides it even if the event never arrives.
pub fn wire_loading_overlay(document: &web::Document, jewelbox: &SharedJewelbox) {
    match document.query_selector(ASSETS_SELECTOR) {
        Ok(Some(assets)) => {
            let doc = document.clone();
            let jb = jewelbox.clone();
            dom::add_listener(&assets, "loaded", move |_ev: web::Event| {
                log::info!("[scene] assets loaded");
                let doc = doc.clone();
                let jb = jb.clone();
                dom::set_timeout(ASSETS_SETTLE_MS, move || {
                    hide_loading(&doc);
                    jb.borrow_mut().reveal_rings();
                    log::info!("[scene] ready for interaction");
                });
            });
        }
        _ => log::warn!("[scene] no {} element; relying on fallback", ASSETS_SELECTOR),
    }

    let doc = document.clone();
    dom::set_timeout(LOADING_FALLBACK_MS, move || hide_loading(&doc));
}
