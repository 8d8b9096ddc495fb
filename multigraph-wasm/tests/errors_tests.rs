use js_sys::Reflect;
use multigraph_wasm::Editor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

#[wasm_bindgen_test]
fn invalid_indices_return_typed_errors() {
    let mut ed = Editor::new(false);
    let ver = ed.version();
    assert!(is_err(&ed.delete_vertex_res(0), "invalid_index"));
    assert!(is_err(&ed.add_edge_res(0, 1), "invalid_index"));
    assert_eq!(ed.version(), ver, "state mutated on error");

    ed.add_vertex(0.0, 0.0, "V1", 255, 0, 0, 255);
    ed.add_vertex(10.0, 0.0, "V2", 255, 0, 0, 255);
    let ver = ed.version();
    assert!(is_err(&ed.delete_edge_res(0, 1), "no_edge"));
    assert!(is_err(&ed.delete_edge_res(0, 7), "invalid_index"));
    assert!(is_err(&ed.distance_to_edge_res(0, 1, 5.0, 5.0), "no_edge"));
    assert_eq!(ed.version(), ver);
    // Plain variants stay silent
    assert!(!ed.delete_edge(0, 1));
    assert!(!ed.add_edge(0, 9));
}

#[wasm_bindgen_test]
fn non_finite_inputs_are_rejected() {
    let mut ed = Editor::new(false);
    assert!(is_err(&ed.add_vertex_res(f32::NAN, 0.0, "V1", 0, 0, 0, 255), "non_finite"));
    assert!(is_err(&ed.add_vertex_res(0.0, f32::INFINITY, "V1", 0, 0, 0, 255), "non_finite"));
    assert_eq!(ed.add_vertex(f32::NAN, 0.0, "V1", 0, 0, 0, 255), None);
    assert_eq!(ed.vertex_count(), 0);
    let t = js_sys::Object::new();
    Reflect::set(&t, &JsValue::from_str("tool"), &JsValue::from_str("add_vertex")).unwrap();
    assert!(is_err(&ed.press_res(t.into(), f32::NAN, 0.0), "non_finite"));
}

#[wasm_bindgen_test]
fn bad_tool_and_config() {
    let mut ed = Editor::new(false);
    let t = js_sys::Object::new();
    Reflect::set(&t, &JsValue::from_str("tool"), &JsValue::from_str("teleport")).unwrap();
    assert!(is_err(&ed.press_res(t.into(), 0.0, 0.0), "invalid_tool"));
    assert!(is_err(&ed.set_config_res(JsValue::from_str("nope")), "invalid_config"));
    let cfg = js_sys::Object::new();
    Reflect::set(&cfg, &JsValue::from_str("edge_hit_threshold"), &JsValue::from_f64(3.0)).unwrap();
    assert!(ed.set_config(cfg.into()));
}
