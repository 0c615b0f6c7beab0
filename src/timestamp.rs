//! Locale-aware timestamp formatters.
//!
//! Both hooks rewrite the bound element's text content from its machine-readable `datetime`
//! attribute (as carried by [***&lt;time&gt;***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/time))
//! through [***Intl.DateTimeFormat***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Intl/DateTimeFormat)
//! in the viewer's locale, on mount and after every server patch. A missing or unparsable
//! timestamp leaves the text untouched.

use crate::hook::Hook;
use js_sys::{Array, Date, Intl, Object, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

/// Attribute holding the machine-readable timestamp.
pub const DATETIME_ATTRIBUTE: &str = "datetime";

/// Renders the date part only, pinned to UTC so that a calendar date chosen by the server is not
/// shifted by the viewer's time zone.
#[derive(Debug, Default)]
pub struct LocalDate;

impl Hook for LocalDate {
	fn mounted(&mut self, element: &Element) {
		display(element, &date_options());
	}

	fn updated(&mut self, element: &Element) {
		display(element, &date_options());
	}
}

/// Renders date and time in the viewer's time zone.
#[derive(Debug, Default)]
pub struct LocalDateTime;

impl Hook for LocalDateTime {
	fn mounted(&mut self, element: &Element) {
		display(element, &date_time_options());
	}

	fn updated(&mut self, element: &Element) {
		display(element, &date_time_options());
	}
}

fn date_options() -> Object {
	let options = Object::new();
	set(&options, "timeZone", "Etc/UTC");
	set(&options, "dateStyle", "short");
	options
}

fn date_time_options() -> Object {
	let options = Object::new();
	set(&options, "dateStyle", "short");
	set(&options, "timeStyle", "long");
	options
}

fn set(options: &Object, key: &str, value: &str) {
	// Only fails on frozen or proxied objects, which a fresh `Object` is not.
	Reflect::set(options, &JsValue::from_str(key), &JsValue::from_str(value)).unwrap_or_else(|error| {
		warn!("Could not set format option {:?}: {:?}", key, error);
		false
	});
}

fn display(element: &Element, options: &Object) {
	let timestamp = match element.get_attribute(DATETIME_ATTRIBUTE) {
		Some(timestamp) => timestamp,
		None => return warn!("Missing {:?} attribute.", DATETIME_ATTRIBUTE),
	};
	let date = Date::new(&JsValue::from_str(&timestamp));
	if date.get_time().is_nan() {
		return warn!("Unparsable timestamp {:?}.", timestamp);
	}

	// Empty locale list: the viewer's default locale.
	let format = Intl::DateTimeFormat::new(&Array::new(), options);
	let formatted = match format.format().call1(&format, &date) {
		Ok(formatted) => formatted,
		Err(error) => return warn!("Could not format {:?}: {:?}", timestamp, error),
	};
	let formatted = match formatted.as_string() {
		Some(formatted) => formatted,
		None => return warn!("Non-string format result for {:?}.", timestamp),
	};

	match element.dyn_ref::<HtmlElement>() {
		Some(element) => element.set_inner_text(&formatted),
		None => warn!("Bound element is not an HtmlElement: {:?}", element),
	}
}
