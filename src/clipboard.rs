use core::fmt::{self, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::Navigator;

/// The browser exposes no [***Clipboard***](https://developer.mozilla.org/en-US/docs/Web/API/Clipboard) API.
#[derive(Debug)]
pub struct ClipboardUnavailable;

impl Display for ClipboardUnavailable {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "the browser does not support clipboard copy")
	}
}

impl std::error::Error for ClipboardUnavailable {}

/// Writes `text` to the async clipboard, fire-and-forget.
///
/// The caller decides how to surface [`ClipboardUnavailable`] to the user; no window-scoped
/// fallback (such as an alert) happens here.
///
/// # Errors
///
/// [`ClipboardUnavailable`] if `navigator` carries no clipboard.
pub fn copy_text(navigator: &Navigator, text: &str) -> Result<(), ClipboardUnavailable> {
	let clipboard = navigator.clipboard();
	let js_clipboard: &JsValue = clipboard.as_ref();
	if js_clipboard.is_undefined() {
		return Err(ClipboardUnavailable);
	}
	// The returned promise resolves once the write lands; nothing depends on it.
	let _ = clipboard.write_text(text);
	Ok(())
}
