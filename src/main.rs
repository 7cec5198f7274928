#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

mod api;
mod board;
mod components;
mod config;
mod controller;
mod data;
mod login_form;
mod response;
mod session;
mod util;
mod view;

#[cfg(target_family = "wasm")]
fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
	let config = std::rc::Rc::new(config::Config::from_document());
	log::set_max_level(config.log_level);
	yew::Renderer::<components::App>::with_props(components::AppProps { config }).render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	simplelog::SimpleLogger::init(log::LevelFilter::Info, simplelog::Config::default())?;
	log::warn!("activity-board runs in the browser; build it for wasm32-unknown-unknown and serve index.html");
	Ok(())
}
