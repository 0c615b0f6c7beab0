#![doc(html_root_url = "https://docs.rs/live-dom-hooks/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod clipboard;
pub mod ctrl_enter;
pub mod hook;
pub mod maintain_attrs;
pub mod registry;
pub mod sanitize;
pub mod timestamp;
