use live_dom_hooks::{ctrl_enter::CtrlEnterSubmit, hook::Hook};
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Element, Event, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn textarea() -> Element {
	let document = window().unwrap().document().unwrap();
	let element = document.create_element("textarea").unwrap();
	document.body().unwrap().append_child(&element).unwrap();
	element
}

fn submit_counter(element: &Element) -> (Rc<Cell<u32>>, Closure<dyn FnMut(Event)>) {
	let submits = Rc::new(Cell::new(0));
	let listener = Closure::wrap(Box::new({
		let submits = submits.clone();
		move |_: Event| submits.set(submits.get() + 1)
	}) as Box<dyn FnMut(Event)>);
	element.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref()).unwrap();
	(submits, listener)
}

fn press(element: &Element, key: &str, ctrl: bool) {
	let init = KeyboardEventInit::new();
	init.set_key(key);
	init.set_ctrl_key(ctrl);
	init.set_bubbles(true);
	let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	element.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn ctrl_enter_synthesizes_one_submit() {
	let element = textarea();
	let (submits, _listener) = submit_counter(&element);

	let mut hook = CtrlEnterSubmit::new();
	hook.mounted(&element);

	press(&element, "Enter", true);
	assert_eq!(submits.get(), 1);
}

#[wasm_bindgen_test]
fn other_keystrokes_do_not_submit() {
	let element = textarea();
	let (submits, _listener) = submit_counter(&element);

	let mut hook = CtrlEnterSubmit::new();
	hook.mounted(&element);

	press(&element, "Enter", false);
	press(&element, "a", true);
	assert_eq!(submits.get(), 0);
}

#[wasm_bindgen_test]
fn destroyed_detaches_the_listener() {
	let element = textarea();
	let (submits, _listener) = submit_counter(&element);

	let mut hook = CtrlEnterSubmit::new();
	hook.mounted(&element);
	press(&element, "Enter", true);
	assert_eq!(submits.get(), 1);

	hook.destroyed(&element);
	press(&element, "Enter", true);
	assert_eq!(submits.get(), 1);
}
