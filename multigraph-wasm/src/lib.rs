use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Editor { pub(crate) inner: multigraph::Editor }

impl Editor {
    pub fn rs_new(directed: bool) -> Editor {
        let config = multigraph::EditorConfig { directed, ..Default::default() };
        Editor { inner: multigraph::Editor::new(config) }
    }
    pub fn rs_version(&self) -> u64 { self.inner.graph().version() }
}
