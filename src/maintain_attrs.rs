use crate::hook::Hook;
use tracing::{trace, warn};
use web_sys::Element;

/// Configuration attribute on the bound element naming the attributes to preserve,
/// comma-and-space-separated (e.g. `data-attrs="maxlength, data-expanded"`).
pub const CONFIG_ATTRIBUTE: &str = "data-attrs";

/// Preserves a configured set of an element's attributes across a subtree replacement driven by
/// the remote renderer, so that externally-driven re-rendering cannot clobber attributes the user
/// or other client code adjusted since the last server render.
///
/// The set is read from the element's [`CONFIG_ATTRIBUTE`] at snapshot time; a missing or empty
/// value means nothing is preserved. Restoration uses the set as captured, even if the
/// configuration attribute itself was rewritten by the replacement.
///
/// Absence is preserved too: a listed attribute that did not exist before the replacement is
/// removed afterwards, even if the replacement added it.
#[derive(Debug, Default)]
pub struct MaintainAttrs {
	snapshot: Option<Vec<(String, Option<String>)>>,
}

impl MaintainAttrs {
	#[must_use]
	pub fn new() -> Self {
		Self { snapshot: None }
	}
}

impl Hook for MaintainAttrs {
	fn before_update(&mut self, element: &Element) {
		let snapshot: Vec<_> = preserved_names(element)
			.into_iter()
			.map(|name| {
				let value = element.get_attribute(&name);
				(name, value)
			})
			.collect();
		trace!("Captured {} attribute(s).", snapshot.len());
		self.snapshot = Some(snapshot);
	}

	fn updated(&mut self, element: &Element) {
		let snapshot = match self.snapshot.take() {
			Some(snapshot) => snapshot,
			// Nothing to restore, e.g. freshly mounted.
			None => return trace!("No live snapshot."),
		};
		for (name, value) in snapshot {
			match value {
				Some(value) => {
					if let Err(error) = element.set_attribute(&name, &value) {
						warn!("Could not restore attribute {:?}={:?}: {:?}", name, value, error);
					}
				}
				None => {
					if let Err(error) = element.remove_attribute(&name) {
						warn!("Could not remove attribute {:?}: {:?}", name, error);
					}
				}
			}
		}
	}
}

fn preserved_names(element: &Element) -> Vec<String> {
	element
		.get_attribute(CONFIG_ATTRIBUTE)
		.map(|list| parse_attr_list(&list))
		.unwrap_or_default()
}

fn parse_attr_list(list: &str) -> Vec<String> {
	list.split(',')
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.map(str::to_owned)
		.collect()
}
