use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub trait InputExt {
	/// The current value of the form control that raised the event.
	fn input_value(&self) -> Option<String>;
}

impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		let target = self.target()?;
		if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
			return Some(select.value());
		}
		if let Some(text_area) = target.dyn_ref::<HtmlTextAreaElement>() {
			return Some(text_area.value());
		}
		log::warn!(target: "web_ext", "event target is not a form control");
		None
	}
}
