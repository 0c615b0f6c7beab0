/// A per-element adapter invoked by the host rendering framework's lifecycle.
///
/// One instance is bound to exactly one [`web_sys::Element`]; the element is owned by the host,
/// which creates and destroys it as the remote renderer's patches dictate. Implementations only
/// observe it within a lifecycle window.
///
/// # Correct Use
///
/// The host must call [`before_update`](`Hook::before_update`) and [`updated`](`Hook::updated`)
/// in strict alternation for a given element, with no concurrent replacement of the same element
/// from two sources. Implementations rely on this ordering instead of re-checking it.
///
/// All methods run synchronously on the UI thread in response to host lifecycle events and must
/// not block.
pub trait Hook {
	/// Called once after the element entered the document.
	fn mounted(&mut self, element: &web_sys::Element) {
		let _ = element;
	}

	/// Called immediately before the remote renderer replaces the element's subtree.
	///
	/// The element is still attached and not yet mutated by the pending replacement.
	fn before_update(&mut self, element: &web_sys::Element) {
		let _ = element;
	}

	/// Called immediately after the remote renderer finished replacing the element's subtree.
	///
	/// Attribute values may differ from before; attributes may have been added or removed.
	fn updated(&mut self, element: &web_sys::Element) {
		let _ = element;
	}

	/// Called once after the element left the document.
	fn destroyed(&mut self, element: &web_sys::Element) {
		let _ = element;
	}
}
