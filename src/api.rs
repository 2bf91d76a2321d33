use crate::{
	config,
	session::{Session, SessionValue},
};
use reqwest::Method;

pub mod feed;
pub mod guests;

/// Failures at the remote-store seam. None of these are fatal to the app: every
/// caller either surfaces the error with a manual retry path or falls back to an
/// empty-but-usable state. Nothing retries automatically.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("guest service unreachable: {0}")]
	RemoteUnavailable(String),
	#[error("guest service returned status {0}")]
	Status(u16),
	#[error("invalid response payload: {1}")]
	InvalidJson(String, String),
}

impl Error {
	/// Short message suitable for an error banner or toast.
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::RemoteUnavailable(_) => "The guest service is unreachable. Check your connection and try again.",
			Self::Status(_) | Self::InvalidJson(..) => "The guest service could not handle the request. Try again in a moment.",
		}
	}
}

/// Request builder for the table API. Authenticated hosts send their session token;
/// anonymous visitors (the invitation page) fall back to the public key and whatever
/// row-level access it grants.
pub(crate) fn rest(method: Method, table: &str) -> reqwest::RequestBuilder {
	let token = match Session::load() {
		Some(session) => session.access_token,
		None => config::ANON_KEY.to_owned(),
	};
	reqwest::Client::new()
		.request(method, format!("{}/rest/v1/{table}", config::PROJECT_URL))
		.header("apikey", config::ANON_KEY)
		.header("Authorization", format!("Bearer {token}"))
		.header("Accept", "application/json")
}

pub(crate) fn auth(path: &str) -> reqwest::RequestBuilder {
	reqwest::Client::new()
		.post(format!("{}/auth/v1/{path}", config::PROJECT_URL))
		.header("apikey", config::ANON_KEY)
		.header("Content-Type", "application/json")
}
