use itertools::Itertools;
use serde::{
	de::{MapAccess, Visitor},
	Deserialize, Deserializer, Serialize,
};

/// An extracurricular offering as reported by the activities endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
	pub description: String,
	/// Display-formatted meeting times, e.g. "Fridays, 3:30 PM - 5:00 PM".
	#[serde(default)]
	pub schedule: String,
	#[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	/// Not validated by the server; may be negative.
	pub max_participants: i64,
	/// Emails of everyone signed up, in signup order.
	#[serde(default)]
	pub participants: Vec<String>,
	/// Only present on activities created through the board.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start_time: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_time: Option<String>,
}

impl Activity {
	/// Remaining capacity. Negative when the roster is over capacity.
	pub fn spots_left(&self) -> i64 {
		self.max_participants - self.participants.len() as i64
	}

	pub fn display_schedule(&self) -> String {
		if !self.schedule.is_empty() {
			return self.schedule.clone();
		}
		match (&self.start_time, &self.end_time) {
			(Some(start), Some(end)) => format!("{start} - {end}"),
			(Some(time), None) | (None, Some(time)) => time.clone(),
			(None, None) => String::new(),
		}
	}
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<String>::deserialize(deserializer)?;
	Ok(value.filter(|category| !category.is_empty()))
}

/// Every activity from one fetch, keyed by name, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot(Vec<(String, Activity)>);

impl Snapshot {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&Activity> {
		self.0.iter().find(|(key, _)| key == name).map(|(_, activity)| activity)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> + '_ {
		self.0.iter().map(|(name, activity)| (name.as_str(), activity))
	}

	pub fn names(&self) -> Vec<String> {
		self.0.iter().map(|(name, _)| name.clone()).collect()
	}

	/// Distinct categories in first-seen order.
	pub fn categories(&self) -> Vec<String> {
		self.0
			.iter()
			.filter_map(|(_, activity)| activity.category.clone())
			.unique()
			.collect()
	}

	fn insert(&mut self, name: String, activity: Activity) {
		match self.0.iter_mut().find(|(key, _)| *key == name) {
			Some(entry) => entry.1 = activity,
			None => self.0.push((name, activity)),
		}
	}
}

impl FromIterator<(String, Activity)> for Snapshot {
	fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
		let mut snapshot = Self::default();
		for (name, activity) in iter {
			snapshot.insert(name, activity);
		}
		snapshot
	}
}

impl<'de> Deserialize<'de> for Snapshot {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct SnapshotVisitor;
		impl<'de> Visitor<'de> for SnapshotVisitor {
			type Value = Snapshot;

			fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				f.write_str("a map of activity name to activity")
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut snapshot = Snapshot::default();
				while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
					snapshot.insert(name, activity);
				}
				Ok(snapshot)
			}
		}
		deserializer.deserialize_map(SnapshotVisitor)
	}
}
