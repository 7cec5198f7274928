use crate::{
	config::Config,
	data::{Snapshot, SortKey, ViewFilter},
};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
	Loading,
	Ready,
	Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
	Success,
	Error,
}
impl Tone {
	pub fn class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
	/// Distinguishes this message from any that replace it.
	pub id: u64,
	pub text: String,
	pub tone: Tone,
}

/// Everything the page shows, derived from the last accepted fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
	pub snapshot: Option<Rc<Snapshot>>,
	pub load: LoadState,
	pub filter: ViewFilter,
	pub status: Option<StatusMessage>,
	pub logged_in: bool,
	latest_fetch: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoardAction {
	Search(String),
	Category(Option<String>),
	Sort(SortKey),
	FetchIssued(u64),
	FetchLoaded { seq: u64, snapshot: Rc<Snapshot> },
	FetchFailed(u64),
	ShowStatus(StatusMessage),
	HideStatus(u64),
	Session(bool),
}

impl Board {
	pub fn new(logged_in: bool) -> Self {
		Self {
			snapshot: None,
			load: LoadState::Loading,
			filter: ViewFilter::default(),
			status: None,
			logged_in,
			latest_fetch: 0,
		}
	}

	pub fn apply(&mut self, action: BoardAction) {
		match action {
			BoardAction::Search(search) => self.filter.search = search,
			BoardAction::Category(category) => self.filter.category = category.filter(|c| !c.is_empty()),
			BoardAction::Sort(sort) => self.filter.sort = sort,
			BoardAction::FetchIssued(seq) => self.latest_fetch = self.latest_fetch.max(seq),
			BoardAction::FetchLoaded { seq, snapshot } => {
				if self.is_stale(seq) {
					return;
				}
				self.snapshot = Some(snapshot);
				self.load = LoadState::Ready;
			}
			BoardAction::FetchFailed(seq) => {
				if self.is_stale(seq) {
					return;
				}
				self.load = LoadState::Failed;
			}
			BoardAction::ShowStatus(message) => self.status = Some(message),
			BoardAction::HideStatus(id) => {
				if self.status.as_ref().map(|status| status.id) == Some(id) {
					self.status = None;
				}
			}
			BoardAction::Session(logged_in) => self.logged_in = logged_in,
		}
	}

	/// The status on screen and how long it stays there. A new message means a new timer.
	pub fn status_timer(&self, config: &Config) -> Option<(u64, u32)> {
		let status = self.status.as_ref()?;
		Some((status.id, config.status_duration_ms))
	}

	fn is_stale(&self, seq: u64) -> bool {
		if seq < self.latest_fetch {
			log::debug!(target: "board", "Dropping response {seq}, waiting on {}", self.latest_fetch);
			return true;
		}
		false
	}
}

impl Reducible for Board {
	type Action = BoardAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut board = (*self).clone();
		board.apply(action);
		match board != *self {
			true => Rc::new(board),
			false => self,
		}
	}
}
