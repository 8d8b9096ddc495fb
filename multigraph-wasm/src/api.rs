use crate::Editor;
use multigraph::algorithms::picking::distance_to_pair;
use multigraph::model::{Color, Vec2};
use multigraph::{EditorConfig, Outcome, Pick, Tool};
use std::str::FromStr;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::{arr_f32, arr_u32, arr_u8, new_obj, paths_obj, set_kv};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. `level` is one of
/// error/warn/info/debug/trace; anything else means info.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let level = log::Level::from_str(level).unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("multigraph: logger already initialized"));
    }
}

fn outcome_to_js(o: Outcome) -> JsValue {
    let obj = new_obj();
    let idx = |v: usize| JsValue::from_f64(v as f64);
    let kind = match o {
        Outcome::Nothing => "nothing",
        Outcome::VertexAdded(i) => { set_kv(&obj, "index", &idx(i)); "vertex_added" }
        Outcome::EdgeStarted(i) => { set_kv(&obj, "index", &idx(i)); "edge_started" }
        Outcome::EdgeAdded { i, j } => { set_kv(&obj, "i", &idx(i)); set_kv(&obj, "j", &idx(j)); "edge_added" }
        Outcome::StaleSelection => "stale_selection",
        Outcome::VertexDeleted(i) => { set_kv(&obj, "index", &idx(i)); "vertex_deleted" }
        Outcome::EdgeDeleted { i, j, k } => {
            set_kv(&obj, "i", &idx(i)); set_kv(&obj, "j", &idx(j)); set_kv(&obj, "k", &JsValue::from_f64(k as f64));
            "edge_deleted"
        }
        Outcome::Grabbed(i) => { set_kv(&obj, "index", &idx(i)); "grabbed" }
        Outcome::Recolored(i) => { set_kv(&obj, "index", &idx(i)); "recolored" }
        Outcome::Renamed(i) => { set_kv(&obj, "index", &idx(i)); "renamed" }
        Outcome::Report(r) => {
            set_kv(&obj, "report", &serde_wasm_bindgen::to_value(&r).unwrap_or(JsValue::NULL));
            set_kv(&obj, "text", &JsValue::from_str(&r.to_string()));
            "report"
        }
    };
    set_kv(&obj, "kind", &JsValue::from_str(kind));
    obj.into()
}

fn parse_tool(tool: JsValue) -> Result<Tool, String> {
    serde_wasm_bindgen::from_value(tool).map_err(|e| e.to_string())
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new(directed: bool) -> Editor {
        crate::Editor::rs_new(directed)
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }
    pub fn is_directed(&self) -> bool {
        self.inner.graph().is_directed()
    }

    // Config
    pub fn set_config(&mut self, cfg: JsValue) -> bool {
        match self.parse_config(cfg) {
            Ok(c) => { self.inner.set_config(c); true }
            Err(_) => false,
        }
    }
    pub fn set_config_res(&mut self, cfg: JsValue) -> JsValue {
        match self.parse_config(cfg) {
            Ok(c) => { self.inner.set_config(c); error::ok(JsValue::TRUE) }
            Err(msg) => error::invalid_config(msg),
        }
    }
    pub fn get_config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.config()).unwrap_or(JsValue::NULL)
    }

    // Vertices
    /// Index of the new vertex; `undefined` for a non-finite position.
    pub fn add_vertex(&mut self, x: f32, y: f32, label: &str, r: u8, g: u8, b: u8, a: u8) -> Option<u32> {
        self.inner.graph_mut().add_vertex(x, y, label, Color::rgba(r, g, b, a)).map(|i| i as u32)
    }
    pub fn add_vertex_res(&mut self, x: f32, y: f32, label: &str, r: u8, g: u8, b: u8, a: u8) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.add_vertex(x, y, label, r, g, b, a) {
            Some(index) => error::ok(JsValue::from_f64(index as f64)),
            None => error::non_finite("x"),
        }
    }
    pub fn delete_vertex(&mut self, index: u32) -> bool {
        self.inner.graph_mut().delete_vertex(index as usize)
    }
    pub fn delete_vertex_res(&mut self, index: u32) -> JsValue {
        if let Some(e) = self.check_index(index) {
            return e;
        }
        error::ok(JsValue::from_bool(self.delete_vertex(index)))
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().vertex_count() as u32
    }
    pub fn move_vertex(&mut self, index: u32, x: f32, y: f32) -> bool {
        self.inner.graph_mut().move_vertex(index as usize, x, y)
    }
    pub fn index_of(&self, id: u32) -> Option<u32> {
        self.inner.graph().index_of(multigraph::model::VertexId(id)).map(|i| i as u32)
    }

    // Edges
    pub fn add_edge(&mut self, i: u32, j: u32) -> bool {
        self.inner.graph_mut().add_edge(i as usize, j as usize)
    }
    pub fn add_edge_res(&mut self, i: u32, j: u32) -> JsValue {
        if let Some(e) = self.check_index(i).or_else(|| self.check_index(j)) {
            return e;
        }
        error::ok(JsValue::from_bool(self.add_edge(i, j)))
    }
    pub fn delete_edge(&mut self, i: u32, j: u32) -> bool {
        self.inner.graph_mut().delete_edge(i as usize, j as usize)
    }
    pub fn delete_edge_res(&mut self, i: u32, j: u32) -> JsValue {
        if let Some(e) = self.check_index(i).or_else(|| self.check_index(j)) {
            return e;
        }
        if !self.delete_edge(i, j) {
            return error::no_edge(i, j);
        }
        error::ok(JsValue::TRUE)
    }
    pub fn clear_edges(&mut self, i: u32, j: u32) -> u32 {
        self.inner.graph_mut().clear_edges(i as usize, j as usize)
    }
    pub fn multiplicity(&self, i: u32, j: u32) -> u32 {
        self.inner.graph().multiplicity(i as usize, j as usize)
    }
    pub fn degree(&self, i: u32) -> u32 {
        self.inner.graph().degree(i as usize)
    }
    pub fn in_degree(&self, i: u32) -> u32 {
        self.inner.graph().in_degree(i as usize)
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph().edge_count()
    }

    // Typed arrays getters
    pub fn get_vertex_data(&self) -> JsValue {
        let g = self.inner.graph();
        let mut ids = Vec::with_capacity(g.vertex_count());
        let mut pos = Vec::with_capacity(2 * g.vertex_count());
        let mut rgba = Vec::with_capacity(4 * g.vertex_count());
        for v in g.vertices() {
            ids.push(v.id.0);
            pos.push(v.pos.x);
            pos.push(v.pos.y);
            rgba.extend_from_slice(&[v.color.r, v.color.g, v.color.b, v.color.a]);
        }
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "positions", &arr_f32(&pos).into());
        set_kv(&obj, "colors", &arr_u8(&rgba).into());
        obj.into()
    }
    pub fn get_labels(&self) -> JsValue {
        let labels: Vec<&str> = self.inner.graph().vertices().iter().map(|v| v.label.as_str()).collect();
        serde_wasm_bindgen::to_value(&labels).unwrap_or(JsValue::NULL)
    }
    /// Row-major N×N multiplicity matrix.
    pub fn get_matrix(&self) -> JsValue {
        let g = self.inner.graph();
        let data: Vec<u32> = g.matrix().iter().flatten().copied().collect();
        let obj = new_obj();
        set_kv(&obj, "n", &JsValue::from_f64(g.vertex_count() as f64));
        set_kv(&obj, "data", &arr_u32(&data).into());
        obj.into()
    }

    // Geometry
    pub fn edge_paths(&self, i: u32, j: u32) -> JsValue {
        let geom = self.inner.geometry();
        let paths = self.inner.graph().edge_paths(geom, i as usize, j as usize);
        paths_obj(geom, &paths).into()
    }
    /// Every instance path; `pairs` holds (i, j, k) triples aligned with `kinds`.
    pub fn all_edge_paths(&self) -> JsValue {
        let geom = self.inner.geometry();
        let all = self.inner.graph().all_edge_paths(geom);
        let mut pairs = Vec::with_capacity(3 * all.len());
        for (i, j, k, _) in &all {
            pairs.extend_from_slice(&[*i as u32, *j as u32, *k]);
        }
        let obj = paths_obj(geom, all.iter().map(|(_, _, _, p)| p));
        set_kv(&obj, "pairs", &arr_u32(&pairs).into());
        obj.into()
    }
    pub fn distance_to_edge(&self, i: u32, j: u32, x: f32, y: f32) -> Option<f32> {
        distance_to_pair(self.inner.graph(), self.inner.geometry(), i as usize, j as usize, Vec2 { x, y })
    }
    pub fn distance_to_edge_res(&self, i: u32, j: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if let Some(e) = self.check_index(i).or_else(|| self.check_index(j)) {
            return e;
        }
        match self.distance_to_edge(i, j, x, y) {
            Some(d) => error::ok(JsValue::from_f64(d as f64)),
            None => error::no_edge(i, j),
        }
    }

    // Picking
    pub fn pick(&self, x: f32, y: f32) -> JsValue {
        let cfg = self.inner.config();
        let picked = self.inner.graph().pick(self.inner.geometry(), x, y, cfg.vertex_hit_radius, cfg.edge_hit_threshold);
        let obj = new_obj();
        match picked {
            Some(Pick::Vertex { index, dist }) => {
                set_kv(&obj, "kind", &JsValue::from_str("vertex"));
                set_kv(&obj, "index", &JsValue::from_f64(index as f64));
                set_kv(&obj, "dist", &JsValue::from_f64(dist as f64));
            }
            Some(Pick::Edge { i, j, k, dist }) => {
                set_kv(&obj, "kind", &JsValue::from_str("edge"));
                set_kv(&obj, "i", &JsValue::from_f64(i as f64));
                set_kv(&obj, "j", &JsValue::from_f64(j as f64));
                set_kv(&obj, "k", &JsValue::from_f64(k as f64));
                set_kv(&obj, "dist", &JsValue::from_f64(dist as f64));
            }
            None => return JsValue::NULL,
        }
        obj.into()
    }

    // Tools
    pub fn press(&mut self, tool: JsValue, x: f32, y: f32) -> JsValue {
        match parse_tool(tool) {
            Ok(t) => outcome_to_js(self.inner.press(&t, x, y)),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn press_res(&mut self, tool: JsValue, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match parse_tool(tool) {
            Ok(t) => error::ok(outcome_to_js(self.inner.press(&t, x, y))),
            Err(msg) => error::invalid_tool(msg),
        }
    }
    pub fn drag(&mut self, x: f32, y: f32) -> bool {
        self.inner.drag(x, y)
    }
    pub fn release(&mut self) {
        self.inner.release()
    }
    pub fn cancel(&mut self) {
        self.inner.cancel()
    }
    pub fn pending_edge_start(&self) -> Option<u32> {
        self.inner.pending_edge_start().map(|i| i as u32)
    }

    // Report
    pub fn report_text(&self) -> String {
        self.inner.report().to_string()
    }
    pub fn report_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.report()).unwrap_or(JsValue::NULL)
    }

    pub fn clear(&mut self) {
        self.inner.cancel();
        self.inner.graph_mut().clear();
    }
}

impl Editor {
    fn parse_config(&self, cfg: JsValue) -> Result<EditorConfig, String> {
        let v: serde_json::Value = serde_wasm_bindgen::from_value(cfg).map_err(|e| e.to_string())?;
        EditorConfig::from_json_value(v).map_err(|e| e.to_string())
    }
    fn check_index(&self, index: u32) -> Option<JsValue> {
        let n = self.inner.graph().vertex_count();
        if (index as usize) < n { None } else { Some(error::invalid_index(index, n)) }
    }
}
