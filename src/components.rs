use crate::controller::Controller;
use yew::prelude::*;

mod app;
pub use app::*;
mod toolbar;
pub use toolbar::*;
mod activity_list;
pub use activity_list::*;
mod signup_form;
pub use signup_form::*;
mod status;
pub use status::*;
mod login;
pub use login::*;
mod create_activity;
pub use create_activity::*;

#[hook]
pub fn use_controller() -> Controller {
	use_context::<Controller>().expect("Controller is provided by App")
}

#[derive(Clone, PartialEq, Properties)]
pub struct ModalProps {
	pub id: AttrValue,
	pub title: AttrValue,
	pub on_close: Callback<()>,
	#[prop_or_default]
	pub children: Html,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
	let close = props.on_close.reform(|_: MouseEvent| ());
	html! {
		<div class="modal" id={props.id.clone()} style="display: block;">
			<div class="modal-content">
				<span class="close" onclick={close}>{"×"}</span>
				<h3>{props.title.clone()}</h3>
				{props.children.clone()}
			</div>
		</div>
	}
}
