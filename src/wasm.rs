//! WebAssembly bindings.

use wasm_bindgen::prelude::*;

use crate::solver::SolveRequest;

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// Solves a request object (`{ directed, vertex_count, edges, config? }`)
/// and returns the tour object.
///
/// Failures are thrown as JavaScript `Error`s carrying the error message.
#[wasm_bindgen(js_name = solvePostman)]
pub fn solve_postman(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SolveRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| js_error(e.to_string()))?;
    let tour = request.solve().map_err(|e| js_error(e.to_string()))?;
    serde_wasm_bindgen::to_value(&tour).map_err(|e| js_error(e.to_string()))
}
