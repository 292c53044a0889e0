//! Thin reflection layer over A-Frame entities and their three.js objects.
//!
//! A-Frame has no Rust bindings, so everything goes through `js_sys::Reflect`
//! on the element's `object3D` and `components` properties.

use crate::constants::MESH_OBJECT_KEY;
use glam::Vec3;
use js_sys::{Array, Function, Reflect};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

#[inline]
fn get_defined(target: &JsValue, key: &str) -> Option<JsValue> {
    get(target, key)
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    get(target, name)?.dyn_into::<Function>()
}

pub fn object3d(el: &web::Element) -> Result<JsValue, JsValue> {
    get_defined(el, "object3D").ok_or_else(|| JsValue::from_str("entity has no object3D"))
}

/// `el.object3D[prop].set(x, y, z)` for `position`, `scale` or `rotation`.
pub fn set_vec3(el: &web::Element, prop: &str, v: Vec3) -> Result<(), JsValue> {
    let target = get(&object3d(el)?, prop)?;
    method(&target, "set")?.call3(
        &target,
        &JsValue::from_f64(v.x as f64),
        &JsValue::from_f64(v.y as f64),
        &JsValue::from_f64(v.z as f64),
    )?;
    Ok(())
}

/// `el.object3D.lookAt(x, y, z)`.
pub fn look_at(el: &web::Element, target: Vec3) -> Result<(), JsValue> {
    let obj = object3d(el)?;
    method(&obj, "lookAt")?.call3(
        &obj,
        &JsValue::from_f64(target.x as f64),
        &JsValue::from_f64(target.y as f64),
        &JsValue::from_f64(target.z as f64),
    )?;
    Ok(())
}

/// Play or pause a component instance. Returns false when the entity does not
/// carry the component.
pub fn set_component_playing(el: &web::Element, component: &str, playing: bool) -> bool {
    let Some(instance) = get_defined(el, "components").and_then(|c| get_defined(&c, component))
    else {
        return false;
    };
    let name = if playing { "play" } else { "pause" };
    match method(&instance, name).and_then(|f| f.call0(&instance)) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[scene] {}.{}() failed: {:?}", component, name, e);
            false
        }
    }
}

/// `true` once A-Frame has initialised the entity (`el.hasLoaded`).
pub fn has_loaded(el: &web::Element) -> bool {
    get_defined(el, "hasLoaded")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// `el.getObject3D("mesh")`, if the model has been attached.
pub fn mesh(el: &web::Element) -> Option<JsValue> {
    let f = method(el, "getObject3D").ok()?;
    f.call1(el, &JsValue::from_str(MESH_OBJECT_KEY))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn tune_material(material: &JsValue, metalness: f32, roughness: f32) {
    _ = Reflect::set(
        material,
        &JsValue::from_str("metalness"),
        &JsValue::from_f64(metalness as f64),
    );
    _ = Reflect::set(
        material,
        &JsValue::from_str("roughness"),
        &JsValue::from_f64(roughness as f64),
    );
    _ = Reflect::set(
        material,
        &JsValue::from_str("needsUpdate"),
        &JsValue::TRUE,
    );
}

/// Walk a three.js object tree and give every mesh material a polished-metal
/// finish. Returns how many materials were touched.
pub fn tune_mesh_materials(
    root: &JsValue,
    metalness: f32,
    roughness: f32,
) -> Result<u32, JsValue> {
    let touched = Rc::new(Cell::new(0u32));
    let counter = touched.clone();
    let visitor = Closure::wrap(Box::new(move |node: JsValue| {
        let is_mesh = get_defined(&node, "isMesh")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !is_mesh {
            return;
        }
        let Some(material) = get_defined(&node, "material") else {
            return;
        };
        if Array::is_array(&material) {
            for m in Array::from(&material).iter() {
                tune_material(&m, metalness, roughness);
                counter.set(counter.get() + 1);
            }
        } else {
            tune_material(&material, metalness, roughness);
            counter.set(counter.get() + 1);
        }
    }) as Box<dyn FnMut(JsValue)>);
    method(root, "traverse")?.call1(root, visitor.as_ref())?;
    drop(visitor);
    Ok(touched.get())
}
