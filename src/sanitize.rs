//! Keyup input sanitizers.
//!
//! Each hook rewrites the input's value after every keystroke. All replacements are single, not
//! global: each keystroke replaces or strips at most one offending occurrence, with later
//! keystrokes picking up the rest.

use crate::hook::Hook;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, HtmlInputElement};

/// Normalizes a comma-separated tag list as it is typed: a space becomes a comma, a doubled comma
/// collapses, and a character outside `[a-zA-Z0-9,]` is stripped.
#[derive(Default)]
pub struct SanitizeTags {
	listener: Option<Closure<dyn FnMut(Event)>>,
}

impl SanitizeTags {
	#[must_use]
	pub fn new() -> Self {
		Self { listener: None }
	}
}

impl Hook for SanitizeTags {
	fn mounted(&mut self, element: &Element) {
		self.listener = attach(element, sanitize_tag_list);
	}

	fn destroyed(&mut self, element: &Element) {
		detach(element, self.listener.take());
	}
}

/// Normalizes a URL-safe title as it is typed: a space becomes a dash and a character outside
/// `[a-zA-Z0-9-]` is stripped.
#[derive(Default)]
pub struct SanitizeTitles {
	listener: Option<Closure<dyn FnMut(Event)>>,
}

impl SanitizeTitles {
	#[must_use]
	pub fn new() -> Self {
		Self { listener: None }
	}
}

impl Hook for SanitizeTitles {
	fn mounted(&mut self, element: &Element) {
		self.listener = attach(element, sanitize_title);
	}

	fn destroyed(&mut self, element: &Element) {
		detach(element, self.listener.take());
	}
}

fn attach(element: &Element, sanitize: fn(&str) -> String) -> Option<Closure<dyn FnMut(Event)>> {
	let listener = Closure::wrap(Box::new(move |event: Event| {
		let input = match event.target().and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) {
			Some(input) => input,
			None => return warn!("keyup target is not an HtmlInputElement."),
		};
		input.set_value(&sanitize(&input.value()));
	}) as Box<dyn FnMut(Event)>);

	if let Err(error) = element.add_event_listener_with_callback("keyup", listener.as_ref().unchecked_ref()) {
		warn!("Could not attach keyup listener: {:?}", error);
		return None;
	}
	Some(listener)
}

fn detach(element: &Element, listener: Option<Closure<dyn FnMut(Event)>>) {
	if let Some(listener) = listener {
		if let Err(error) = element.remove_event_listener_with_callback("keyup", listener.as_ref().unchecked_ref()) {
			warn!("Could not detach keyup listener: {:?}", error);
		}
	}
}

fn sanitize_tag_list(value: &str) -> String {
	let value = value.replacen(' ', ",", 1);
	let value = value.replacen(",,", ",", 1);
	strip_first(&value, |c| c.is_ascii_alphanumeric() || c == ',')
}

fn sanitize_title(value: &str) -> String {
	let value = value.replacen(' ', "-", 1);
	strip_first(&value, |c| c.is_ascii_alphanumeric() || c == '-')
}

/// Removes the first character not accepted by `allowed`; at most one per call.
fn strip_first(value: &str, allowed: impl Fn(char) -> bool) -> String {
	match value.char_indices().find(|&(_, c)| !allowed(c)) {
		Some((i, c)) => {
			let mut stripped = String::with_capacity(value.len() - c.len_utf8());
			stripped.push_str(&value[..i]);
			stripped.push_str(&value[i + c.len_utf8()..]);
			stripped
		}
		None => value.to_owned(),
	}
}
