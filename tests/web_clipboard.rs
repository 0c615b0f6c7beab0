use live_dom_hooks::clipboard::copy_text;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::window;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn copies_on_a_secure_context() {
	// The test server is localhost, which counts as a secure context, so the async clipboard
	// is exposed.
	let navigator = window().unwrap().navigator();
	copy_text(&navigator, "Hello live-dom-hooks!").unwrap();
}
