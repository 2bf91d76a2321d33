use serde::{Deserialize, Serialize};

/// One invited party. Records are created by the host when an invitation link is
/// generated, and mutated once by the invitee when they respond.
///
/// `confirmed` is tri-state: attending, declined, or no response yet. Party size and
/// the free-text fields only carry values once the invitee has responded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub guests: Option<u32>,
	#[serde(default)]
	pub confirmed: Option<bool>,
	#[serde(default, rename = "dietaryRestrictions")]
	pub dietary_restrictions: Option<String>,
	#[serde(default, rename = "specialRequests")]
	pub special_requests: Option<String>,
	#[serde(rename = "maxGuests")]
	pub max_guests_allowed: u32,
}

impl Guest {
	pub fn status(&self) -> RsvpStatus {
		match self.confirmed {
			Some(true) => RsvpStatus::Confirmed,
			Some(false) => RsvpStatus::Cancelled,
			None => RsvpStatus::Pending,
		}
	}
}

/// Status filter for the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsvpStatus {
	#[default]
	All,
	Confirmed,
	Cancelled,
	Pending,
}

impl RsvpStatus {
	pub fn matches(&self, guest: &Guest) -> bool {
		match self {
			Self::All => true,
			Self::Confirmed => guest.confirmed == Some(true),
			Self::Cancelled => guest.confirmed == Some(false),
			Self::Pending => guest.confirmed.is_none(),
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Confirmed => "Confirmed",
			Self::Cancelled => "Cancelled",
			Self::Pending => "Pending",
		}
	}

	/// Stable identifier used as the `<option>` value in the filter select.
	pub fn value(&self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Confirmed => "confirmed",
			Self::Cancelled => "cancelled",
			Self::Pending => "pending",
		}
	}

	pub fn from_value(value: &str) -> Self {
		match value {
			"confirmed" => Self::Confirmed,
			"cancelled" => Self::Cancelled,
			"pending" => Self::Pending,
			_ => Self::All,
		}
	}

	pub fn iter() -> impl Iterator<Item = Self> {
		[Self::All, Self::Confirmed, Self::Cancelled, Self::Pending].into_iter()
	}
}

/// A change-feed notification from the remote store.
#[derive(Debug, Clone, PartialEq)]
pub enum GuestEvent {
	Inserted(Guest),
	Updated(Guest),
	Deleted(i64),
}

#[cfg(test)]
mod test {
	use super::*;

	fn guest(id: i64, confirmed: Option<bool>) -> Guest {
		Guest {
			id,
			name: format!("guest {id}"),
			guests: None,
			confirmed,
			dietary_restrictions: None,
			special_requests: None,
			max_guests_allowed: 2,
		}
	}

	#[test]
	fn filter_predicates() {
		let attending = guest(1, Some(true));
		let declined = guest(2, Some(false));
		let waiting = guest(3, None);
		for g in [&attending, &declined, &waiting] {
			assert!(RsvpStatus::All.matches(g));
		}
		assert!(RsvpStatus::Confirmed.matches(&attending));
		assert!(!RsvpStatus::Confirmed.matches(&declined));
		assert!(!RsvpStatus::Confirmed.matches(&waiting));
		assert!(RsvpStatus::Cancelled.matches(&declined));
		assert!(!RsvpStatus::Cancelled.matches(&waiting));
		assert!(RsvpStatus::Pending.matches(&waiting));
		assert!(!RsvpStatus::Pending.matches(&attending));
	}

	#[test]
	fn filter_value_round_trip() {
		for status in RsvpStatus::iter() {
			assert_eq!(RsvpStatus::from_value(status.value()), status);
		}
		assert_eq!(RsvpStatus::from_value("garbage"), RsvpStatus::All);
	}

	#[test]
	fn record_wire_names() {
		let parsed: Guest = serde_json::from_str(
			r#"{
				"id": 7,
				"name": "Ana",
				"guests": 2,
				"confirmed": true,
				"dietaryRestrictions": "vegetarian",
				"specialRequests": null,
				"maxGuests": 4
			}"#,
		)
		.unwrap();
		assert_eq!(parsed.id, 7);
		assert_eq!(parsed.guests, Some(2));
		assert_eq!(parsed.dietary_restrictions.as_deref(), Some("vegetarian"));
		assert_eq!(parsed.special_requests, None);
		assert_eq!(parsed.max_guests_allowed, 4);
	}

	#[test]
	fn pending_record_with_missing_optionals() {
		let parsed: Guest = serde_json::from_str(r#"{"id": 1, "name": "Leo", "maxGuests": 1}"#).unwrap();
		assert_eq!(parsed.status(), RsvpStatus::Pending);
		assert_eq!(parsed.guests, None);
	}
}
