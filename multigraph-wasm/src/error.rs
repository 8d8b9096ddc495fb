use wasm_bindgen::prelude::*;
use js_sys::{Object, Reflect};

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_index(index: u32, count: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    set_kv(&d, "count", &JsValue::from_f64(count as f64));
    err("invalid_index", format!("vertex index {} out of range", index), Some(d.into()))
}

#[inline]
pub fn no_edge(i: u32, j: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "i", &JsValue::from_f64(i as f64));
    set_kv(&d, "j", &JsValue::from_f64(j as f64));
    err("no_edge", "no edge between the given vertices", Some(d.into()))
}

#[inline]
pub fn invalid_tool(message: impl Into<String>) -> JsValue {
    err("invalid_tool", message, None)
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}
