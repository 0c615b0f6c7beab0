use crate::hook::Hook;
use hashbrown::HashMap;
use tracing::{instrument, trace, warn};
use web_sys::Element;

/// Attribute on an element naming the hook to bind to it, e.g. `data-hook="MaintainAttrs"`.
pub const HOOK_ATTRIBUTE: &str = "data-hook";

/// Constructs a fresh hook instance for one element binding.
pub type HookFactory = Box<dyn Fn() -> Box<dyn Hook>>;

/// Page-loading indicator driven by the live-update transport's loading notifications.
///
/// Injected into the [`HookRegistry`] by whatever composes the client, instead of being reached
/// through a window-scoped global.
pub trait LoadingIndicator {
	fn show(&self);
	fn hide(&self);
}

/// Identifies one element's hook binding between [`HookRegistry::bind`] and
/// [`HookRegistry::unbind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

struct Binding {
	element: Element,
	hook: Box<dyn Hook>,
}

/// Composes hooks for the host rendering framework: hook implementations are registered by name,
/// elements select theirs through [`HOOK_ATTRIBUTE`], and the host's per-element lifecycle
/// notifications are forwarded to the bound instance.
///
/// Each bound element gets an independent hook instance; bindings share no state.
///
/// # Correct Use
///
/// The host must report the lifecycle in order per element: [`bind`](`HookRegistry::bind`) once,
/// then alternating [`before_update`](`HookRegistry::before_update`) and
/// [`updated`](`HookRegistry::updated`) pairs, then [`unbind`](`HookRegistry::unbind`) once.
#[derive(Default)]
pub struct HookRegistry {
	factories: HashMap<String, HookFactory>,
	bindings: HashMap<BindingId, Binding>,
	next_id: u32,
	loading: Option<Box<dyn LoadingIndicator>>,
}

impl HookRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_loading_indicator(indicator: Box<dyn LoadingIndicator>) -> Self {
		Self {
			loading: Some(indicator),
			..Self::default()
		}
	}

	/// Registers `factory` under `name`, replacing any previous registration of that name.
	pub fn register(&mut self, name: impl Into<String>, factory: HookFactory) {
		self.factories.insert(name.into(), factory);
	}

	/// Binds the hook named by the element's [`HOOK_ATTRIBUTE`] to `element` and reports the
	/// mount to it.
	///
	/// Returns [`None`] without binding if the element names no hook or an unregistered one.
	#[instrument(skip(self))]
	pub fn bind(&mut self, element: &Element) -> Option<BindingId> {
		let name = match element.get_attribute(HOOK_ATTRIBUTE) {
			Some(name) => name,
			None => return None,
		};
		let factory = match self.factories.get(&name) {
			Some(factory) => factory,
			None => {
				warn!("No hook registered under {:?}.", name);
				return None;
			}
		};
		let mut hook = factory();
		hook.mounted(element);

		let id = BindingId(self.next_id);
		self.next_id += 1;
		self.bindings.insert(
			id,
			Binding {
				element: element.clone(),
				hook,
			},
		);
		trace!("Bound hook {:?} as {:?}.", name, id);
		Some(id)
	}

	/// Reports the start of a subtree replacement to the binding's hook.
	#[instrument(skip(self))]
	pub fn before_update(&mut self, id: BindingId) {
		match self.bindings.get_mut(&id) {
			Some(binding) => binding.hook.before_update(&binding.element),
			None => warn!("Unknown binding {:?}.", id),
		}
	}

	/// Reports a finished subtree replacement to the binding's hook.
	#[instrument(skip(self))]
	pub fn updated(&mut self, id: BindingId) {
		match self.bindings.get_mut(&id) {
			Some(binding) => binding.hook.updated(&binding.element),
			None => warn!("Unknown binding {:?}.", id),
		}
	}

	/// Reports the element's removal to the binding's hook and drops the binding, and with it
	/// any listeners the hook still holds.
	#[instrument(skip(self))]
	pub fn unbind(&mut self, id: BindingId) {
		match self.bindings.remove(&id) {
			Some(mut binding) => binding.hook.destroyed(&binding.element),
			None => warn!("Unknown binding {:?}.", id),
		}
	}

	/// Forwards a transport page-loading-start notification to the injected indicator.
	pub fn loading_started(&self) {
		if let Some(loading) = &self.loading {
			loading.show();
		}
	}

	/// Forwards a transport page-loading-stop notification to the injected indicator.
	pub fn loading_stopped(&self) {
		if let Some(loading) = &self.loading {
			loading.hide();
		}
	}

	/// Number of live bindings.
	#[must_use]
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}
