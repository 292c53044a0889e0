#![cfg(target_arch = "wasm32")]
use jewelbox_core::{Jewelbox, RingId, RingLayout, ViewerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod aframe;
mod constants;
mod dom;
mod events;
mod frame;
mod markup;
mod models;
mod overlay;
mod scene;

use constants::{CLOSE_BUTTON_ID, CONFIG_SCRIPT_ID, RING_GROUP_SELECTOR, SCENE_SELECTOR};
use scene::{SharedJewelbox, WebScene};

fn log_banner() {
    log::info!("==============================================");
    log::info!("Jewelbox viewer initialised");
    log::info!("3-point focus lighting:");
    log::info!("  - spotlight: main illumination");
    log::info!("  - rim light: edge definition");
    log::info!("  - fill light: shadow softening");
    log::info!("==============================================");
}

/// Page-supplied overrides from `<script type="application/json" id="jewelbox-config">`.
fn load_config(document: &web::Document) -> ViewerConfig {
    let Some(src) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return ViewerConfig::default();
    };
    match ViewerConfig::from_json(&src) {
        Ok(cfg) => {
            log::info!("[config] loaded overrides from #{}", CONFIG_SCRIPT_ID);
            cfg
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            ViewerConfig::default()
        }
    }
}

/// Resolves once the A-Frame scene has fired `loaded` (immediately if it
/// already has).
async fn scene_loaded(scene: &web::Element) -> anyhow::Result<()> {
    if aframe::has_loaded(scene) {
        return Ok(());
    }
    let target = scene.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_loaded = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "loaded",
            on_loaded.unchecked_ref(),
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("waiting for scene load: {:?}", e))?;
    Ok(())
}

/// Register every `.ring-group` with both the scene host and the coordinator,
/// skipping groups whose layout attributes are unusable.
fn collect_rings(
    document: &web::Document,
    mut host: WebScene,
    config: ViewerConfig,
) -> (Jewelbox<WebScene>, Vec<(RingId, web::Element)>) {
    let mut accepted = Vec::new();
    let mut layouts = Vec::new();
    for group in dom::query_all(document, RING_GROUP_SELECTOR) {
        let name = group.id();
        match RingLayout::from_attributes(|attr| group.get_attribute(attr)) {
            Ok(layout) => {
                let id = host.add_ring(group.clone());
                accepted.push((id, group));
                layouts.push((name, layout));
            }
            Err(e) => log::warn!("[scene] skipping ring {}: {}", name, e),
        }
    }
    let mut jewelbox = Jewelbox::new(host, config);
    for ((host_id, _), (name, layout)) in accepted.iter().zip(layouts) {
        let id = jewelbox.add_ring(name, layout);
        debug_assert_eq!(id, *host_id);
    }
    (jewelbox, accepted)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("jewelbox-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene_el = document
        .query_selector(SCENE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("A-Frame scene not found"))?;

    let config = load_config(&document);
    let (metalness, roughness) = (config.ring_metalness, config.ring_roughness);
    let host = WebScene::new(&document, scene_el.clone());
    let (jewelbox, rings) = collect_rings(&document, host, config);
    log::info!("[scene] {} rings registered", rings.len());
    let jewelbox: SharedJewelbox = Rc::new(RefCell::new(jewelbox));

    overlay::wire_loading_overlay(&document, &jewelbox);
    events::wire_ring_clicks(&jewelbox, &rings);
    match dom::html_element_by_id(&document, CLOSE_BUTTON_ID) {
        Some(btn) => events::wire_close_button(&jewelbox, &btn),
        None => log::warn!("[scene] missing #{}", CLOSE_BUTTON_ID),
    }
    events::wire_escape_close(&jewelbox);

    scene_loaded(&scene_el).await?;
    log::info!(
        "[scene] scene loaded, camera rig at {:?}",
        jewelbox.borrow().camera_rig_position()
    );

    let groups: Vec<web::Element> = rings.into_iter().map(|(_, el)| el).collect();
    models::wire_model_finish(&groups, metalness, roughness);
    events::wire_drag_handlers(&jewelbox, &scene_el);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(jewelbox.clone())));
    frame::start_loop(frame_ctx);
    log_banner();
    Ok(())
}
