use crate::hook::Hook;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, EventInit, KeyboardEvent};

/// Synthesizes a bubbling, cancelable [***submit***](https://developer.mozilla.org/en-US/docs/Web/API/HTMLFormElement/submit_event)
/// event from the bound element whenever Ctrl+Enter is pressed inside it, so that multi-line
/// inputs can submit their surrounding form without a button press.
///
/// The listener is attached on mount and detached when the element is destroyed.
#[derive(Default)]
pub struct CtrlEnterSubmit {
	listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl CtrlEnterSubmit {
	#[must_use]
	pub fn new() -> Self {
		Self { listener: None }
	}
}

impl Hook for CtrlEnterSubmit {
	fn mounted(&mut self, element: &Element) {
		let target = element.clone();
		let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
			if event.ctrl_key() && event.key() == "Enter" {
				dispatch_submit(&target);
			}
		}) as Box<dyn FnMut(KeyboardEvent)>);

		if let Err(error) = element.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
			return warn!("Could not attach keydown listener: {:?}", error);
		}
		self.listener = Some(listener);
	}

	fn destroyed(&mut self, element: &Element) {
		if let Some(listener) = self.listener.take() {
			if let Err(error) = element.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
				warn!("Could not detach keydown listener: {:?}", error);
			}
		}
	}
}

fn dispatch_submit(target: &Element) {
	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = match Event::new_with_event_init_dict("submit", &init) {
		Ok(event) => event,
		Err(error) => return warn!("Could not create submit event: {:?}", error),
	};
	if let Err(error) = target.dispatch_event(&event) {
		warn!("Could not dispatch submit event: {:?}", error);
	}
}
