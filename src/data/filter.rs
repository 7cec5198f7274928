use super::{Activity, Snapshot};
use icu_collator::{Collator, CollatorOptions, Strength};
use itertools::Itertools;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
	#[default]
	Unsorted,
	Name,
	Schedule,
}

impl SortKey {
	pub fn all() -> &'static [Self] {
		&[Self::Unsorted, Self::Name, Self::Schedule]
	}

	/// The form value used by the sort selector.
	pub fn value(self) -> &'static str {
		match self {
			Self::Unsorted => "",
			Self::Name => "name",
			Self::Schedule => "schedule",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Unsorted => "-- Sort by --",
			Self::Name => "Name",
			Self::Schedule => "Schedule",
		}
	}

	pub fn from_value(value: &str) -> Self {
		match value {
			"name" => Self::Name,
			"schedule" => Self::Schedule,
			_ => Self::Unsorted,
		}
	}
}

/// The search, category and sort controls as they stood for one render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewFilter {
	pub search: String,
	/// `None` matches every category.
	pub category: Option<String>,
	pub sort: SortKey,
}

impl ViewFilter {
	pub fn matches(&self, name: &str, activity: &Activity) -> bool {
		let query = self.search.to_lowercase();
		let matches_search =
			name.to_lowercase().contains(&query) || activity.description.to_lowercase().contains(&query);
		let matches_category = match &self.category {
			None => true,
			Some(category) => activity.category.as_ref() == Some(category),
		};
		matches_search && matches_category
	}

	/// Filters the snapshot and orders the survivors. Ties keep fetch order.
	pub fn apply<'a>(&self, snapshot: &'a Snapshot) -> Vec<(&'a str, &'a Activity)> {
		let kept = snapshot.iter().filter(|(name, activity)| self.matches(name, activity));
		match self.sort {
			SortKey::Unsorted => kept.collect(),
			SortKey::Name => kept.sorted_by(|a, b| locale_cmp(a.0, b.0)).collect(),
			SortKey::Schedule => kept
				.sorted_by(|a, b| locale_cmp(&a.1.display_schedule(), &b.1.display_schedule()))
				.collect(),
		}
	}
}

thread_local! {
	static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
	let mut options = CollatorOptions::new();
	options.strength = Some(Strength::Tertiary);
	match Collator::try_new(&Default::default(), options) {
		Ok(collator) => Some(collator),
		Err(err) => {
			log::error!(target: "filter", "No collation data, sorting by code point: {err:?}");
			None
		}
	}
}

/// Compares like the browser's default `localeCompare`: root-locale collation, where accents
/// and case only break ties between otherwise equal letters.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
	COLLATOR.with(|collator| match collator {
		Some(collator) => collator.compare(a, b),
		None => a.cmp(b),
	})
}
