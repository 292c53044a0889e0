use crate::aframe;
use crate::constants::RING_MODEL_SELECTOR;
use crate::dom;
use web_sys as web;

fn finish_model(model: &web::Element, label: &str, metalness: f32, roughness: f32) {
    let Some(mesh) = aframe::mesh(model) else {
        return;
    };
    match aframe::tune_mesh_materials(&mesh, metalness, roughness) {
        Ok(n) => log::info!("[scene] {} model loaded, {} materials tuned", label, n),
        Err(e) => log::warn!("[scene] {} material tuning failed: {:?}", label, e),
    }
}

/// Give each ring's glTF model a polished-metal finish once it loads.
pub fn wire_model_finish(ring_groups: &[web::Element], metalness: f32, roughness: f32) {
    for (index, group) in ring_groups.iter().enumerate() {
        let Ok(Some(model)) = group.query_selector(RING_MODEL_SELECTOR) else {
            continue;
        };
        let label = format!("ring {}", index + 1);
        // The model may already be in place if it loaded before we got here.
        finish_model(&model, &label, metalness, roughness);
        let target = model.clone();
        dom::add_listener(&model, "model-loaded", move |_ev: web::Event| {
            finish_model(&target, &label, metalness, roughness);
        });
    }
}
