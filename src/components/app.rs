use super::{ActivityList, AddActivity, SessionButton, SignupForm, StatusBanner, Toolbar};
use crate::{
	api::HttpApi,
	board::Board,
	config::Config,
	controller::{BrowserNotifier, Controller},
	session::Session,
	view::render,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
	pub config: Rc<Config>,
}

#[function_component]
pub fn App(AppProps { config }: &AppProps) -> Html {
	let session = use_memo((), |_| Session::browser());
	let board = use_reducer({
		let session = session.clone();
		move || Board::new(session.is_logged_in())
	});
	let controller = use_memo((), {
		let config = config.clone();
		let session = (*session).clone();
		let dispatcher = board.dispatcher();
		move |_| {
			let api = Rc::new(HttpApi::new(config.api_root.clone()));
			let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
			Controller::new(api, session, Rc::new(BrowserNotifier), dispatch, config)
		}
	});
	use_mount({
		let controller = (*controller).clone();
		move || {
			log::info!(target: "board", "Loading activities from {}", controller.config().api_root);
			wasm_bindgen_futures::spawn_local(async move { controller.refresh().await });
		}
	});

	let view = render(&board);
	html! {
		<ContextProvider<Controller> context={(*controller).clone()}>
			<header>
				<h1>{"Mergington High School"}</h1>
				<h2>{"Extracurricular Activities"}</h2>
				<SessionButton logged_in={board.logged_in} />
			</header>
			<main>
				<section id="activities-container">
					<h3>{"Available Activities"}</h3>
					<Toolbar filter={board.filter.clone()} categories={view.category_options.clone()} />
					<AddActivity visible={view.show_add_activity} />
					<ActivityList list={view.list.clone()} />
				</section>
				<section id="signup-container">
					<h3>{"Sign Up for an Activity"}</h3>
					<SignupForm options={view.signup_options.clone()} />
					<StatusBanner status={view.status.clone()} timer={board.status_timer(config)} />
				</section>
			</main>
		</ContextProvider<Controller>>
	}
}
