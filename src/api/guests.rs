use super::{rest, Error};
use crate::{data::Guest, response::Response};
use reqwest::Method;
use serde::Serialize;

static TABLE: &str = "guests";

/// Full ordered read of the guest collection. Runs once when the dashboard table
/// activates; everything afterwards arrives through the change feed.
pub async fn fetch_all() -> Result<Vec<Guest>, Error> {
	Response::<Vec<Guest>>::from(rest(Method::GET, TABLE))
		.with_query(&[("select", "*"), ("order", "id.asc")])
		.send()
		.await
}

/// Single-record read for the invitation page. `Ok(None)` means the link does not
/// correspond to any invitation (revoked or mistyped), which is not a transport error.
pub async fn fetch_one(id: i64) -> Result<Option<Guest>, Error> {
	let rows = Response::<Vec<Guest>>::from(rest(Method::GET, TABLE))
		.with_query(&[("select", "*".to_owned()), ("id", format!("eq.{id}"))])
		.send()
		.await?;
	Ok(rows.into_iter().next())
}

/// Attendance response submitted by the invitee. Declining clears the party fields;
/// the caller builds the change accordingly.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpChange {
	pub confirmed: bool,
	pub guests: Option<u32>,
	#[serde(rename = "dietaryRestrictions")]
	pub dietary_restrictions: Option<String>,
	#[serde(rename = "specialRequests")]
	pub special_requests: Option<String>,
}

impl RsvpChange {
	pub fn attending(guests: u32, dietary_restrictions: Option<String>, special_requests: Option<String>) -> Self {
		Self {
			confirmed: true,
			guests: Some(guests),
			dietary_restrictions,
			special_requests,
		}
	}

	pub fn declined() -> Self {
		Self {
			confirmed: false,
			guests: None,
			dietary_restrictions: None,
			special_requests: None,
		}
	}
}

pub async fn update_one(id: i64, change: &RsvpChange) -> Result<Guest, Error> {
	let rows = Response::<Vec<Guest>>::from(
		rest(Method::PATCH, TABLE).header("Prefer", "return=representation"),
	)
	.with_query(&[("id", format!("eq.{id}"))])
	.with_json(change)
	.send()
	.await?;
	// an empty representation means the row no longer exists
	rows.into_iter().next().ok_or(Error::Status(404))
}

/// Host-side invitation creation; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewGuest {
	pub name: String,
	#[serde(rename = "maxGuests")]
	pub max_guests_allowed: u32,
}

pub async fn create_one(new_guest: &NewGuest) -> Result<Guest, Error> {
	let rows = Response::<Vec<Guest>>::from(
		rest(Method::POST, TABLE).header("Prefer", "return=representation"),
	)
	.with_json(new_guest)
	.send()
	.await?;
	rows.into_iter().next().ok_or(Error::Status(404))
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn declining_clears_party_fields() {
		let change = RsvpChange::declined();
		let body = serde_json::to_value(&change).unwrap();
		assert_eq!(body["confirmed"], serde_json::json!(false));
		assert_eq!(body["guests"], serde_json::Value::Null);
		assert_eq!(body["dietaryRestrictions"], serde_json::Value::Null);
		assert_eq!(body["specialRequests"], serde_json::Value::Null);
	}

	#[test]
	fn attending_serializes_wire_names() {
		let change = RsvpChange::attending(3, Some("no nuts".into()), None);
		let body = serde_json::to_value(&change).unwrap();
		assert_eq!(body["confirmed"], serde_json::json!(true));
		assert_eq!(body["guests"], serde_json::json!(3));
		assert_eq!(body["dietaryRestrictions"], serde_json::json!("no nuts"));
	}

	#[test]
	fn new_guest_carries_the_cap() {
		let body = serde_json::to_value(&NewGuest {
			name: "Ana".into(),
			max_guests_allowed: 4,
		})
		.unwrap();
		assert_eq!(body["maxGuests"], serde_json::json!(4));
	}
}
