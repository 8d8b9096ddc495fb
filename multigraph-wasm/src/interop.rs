use js_sys::{Object, Reflect, Uint32Array, Float32Array, Uint8Array};
use multigraph::geometry::edge_path::{EdgeGeometry, EdgePath};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_f32(slice: &[f32]) -> Float32Array {
    let arr = Float32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_u8(slice: &[u8]) -> Uint8Array {
    let arr = Uint8Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

// Packs sampled polylines as { kinds, offsets, points }. Path p owns
// points[2*offsets[p] .. 2*offsets[p+1]] as interleaved x,y.
pub fn paths_obj<'a>(geometry: &EdgeGeometry, paths: impl IntoIterator<Item = &'a EdgePath>) -> Object {
    let mut kinds = Vec::new();
    let mut offsets = vec![0u32];
    let mut points = Vec::new();
    for path in paths {
        kinds.push(path.kind_code());
        for p in geometry.samples(path) {
            points.push(p.x);
            points.push(p.y);
        }
        offsets.push((points.len() / 2) as u32);
    }
    let obj = new_obj();
    set_kv(&obj, "kinds", &arr_u8(&kinds).into());
    set_kv(&obj, "offsets", &arr_u32(&offsets).into());
    set_kv(&obj, "points", &arr_f32(&points).into());
    obj
}
