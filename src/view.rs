use crate::board::{Board, LoadState, StatusMessage};

pub static LOADING_TEXT: &str = "Loading activities...";
pub static LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub static NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// What the page should look like for one board state. Applied to the DOM by the components.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
	pub list: ListView,
	/// Activities offered by the signup form, always the whole snapshot in fetch order.
	pub signup_options: Vec<String>,
	pub category_options: Vec<String>,
	pub show_add_activity: bool,
	pub status: Option<StatusMessage>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
	Loading,
	Unavailable(&'static str),
	Cards(Vec<CardView>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub spots_left: i64,
	/// Empty renders the "no participants" notice.
	pub participants: Vec<ParticipantView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantView {
	pub activity: String,
	pub email: String,
	/// Whether the delete control is shown.
	pub removable: bool,
}

pub fn render(board: &Board) -> BoardView {
	let list = match (board.load, &board.snapshot) {
		(LoadState::Failed, _) => ListView::Unavailable(LOAD_FAILED_TEXT),
		(_, None) => ListView::Loading,
		(_, Some(snapshot)) => {
			let cards = board.filter.apply(snapshot).into_iter();
			let cards = cards.map(|(name, activity)| CardView {
				name: name.to_owned(),
				description: activity.description.clone(),
				schedule: activity.display_schedule(),
				spots_left: activity.spots_left(),
				participants: activity
					.participants
					.iter()
					.map(|email| ParticipantView {
						activity: name.to_owned(),
						email: email.clone(),
						removable: board.logged_in,
					})
					.collect(),
			});
			ListView::Cards(cards.collect())
		}
	};
	let (signup_options, category_options) = match &board.snapshot {
		Some(snapshot) => (snapshot.names(), snapshot.categories()),
		None => (Vec::new(), Vec::new()),
	};
	BoardView {
		list,
		signup_options,
		category_options,
		show_add_activity: board.logged_in,
		status: board.status.clone(),
	}
}
