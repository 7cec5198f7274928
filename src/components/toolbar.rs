use super::use_controller;
use crate::{
	board::BoardAction,
	data::{SortKey, ViewFilter},
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToolbarProps {
	pub filter: ViewFilter,
	pub categories: Vec<String>,
}

#[function_component]
pub fn Toolbar(ToolbarProps { filter, categories }: &ToolbarProps) -> Html {
	let controller = use_controller();
	let change = Callback::from(move |change: BoardAction| {
		let controller = controller.clone();
		wasm_bindgen_futures::spawn_local(async move { controller.change_filter(change).await });
	});
	let on_search = change.filter_reform(|e: InputEvent| e.input_value().map(BoardAction::Search));
	let on_category = change.filter_reform(|e: Event| {
		e.input_value().map(|category| BoardAction::Category(Some(category)))
	});
	let on_sort = change.filter_reform(|e: Event| {
		e.input_value().map(|sort| BoardAction::Sort(SortKey::from_value(&sort)))
	});
	let on_search = Callback::from(move |e| { let _ = on_search.emit(e); });
	let on_category = Callback::from(move |e| { let _ = on_category.emit(e); });
	let on_sort = Callback::from(move |e| { let _ = on_sort.emit(e); });
	html! {
		<div id="toolbar">
			<input
				type="text" id="search-bar" placeholder="Search activities..."
				value={filter.search.clone()}
				oninput={on_search}
			/>
			<select id="category-filter" onchange={on_category}>
				<option value="" selected={filter.category.is_none()}>{"All Categories"}</option>
				{for categories.iter().map(|category| html! {
					<option value={category.clone()} selected={filter.category.as_ref() == Some(category)}>
						{category.clone()}
					</option>
				})}
			</select>
			<select id="sort-options" onchange={on_sort}>
				{for SortKey::all().iter().map(|key| html! {
					<option value={key.value()} selected={filter.sort == *key}>{key.label()}</option>
				})}
			</select>
		</div>
	}
}
