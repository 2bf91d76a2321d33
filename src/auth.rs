//! Email/password authentication against the hosted auth endpoint. The endpoint is a
//! plain token grant; everything session-shaped lives in [`crate::session`].

use crate::{
	api,
	response::Response,
	session::{Account, Session},
};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AuthError {
	#[error("Incorrect email or password")]
	InvalidCredentials,
	#[error("{}", .0.user_message())]
	Remote(#[from] api::Error),
}

#[derive(Serialize)]
struct Credentials<'a> {
	email: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
	user: AuthUser,
}

#[derive(Deserialize)]
struct AuthUser {
	email: String,
	#[serde(default)]
	user_metadata: Metadata,
}

#[derive(Deserialize, Default)]
struct Metadata {
	#[serde(default)]
	first_name: Option<String>,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, AuthError> {
	let response = Response::<TokenResponse>::from(api::auth("token"))
		.with_query(&[("grant_type", "password")])
		.with_json(&Credentials { email, password })
		.send()
		.await;
	let granted = match response {
		Ok(granted) => granted,
		// the grant endpoint answers 400 for a wrong email/password pair
		Err(api::Error::Status(400 | 401 | 403)) => return Err(AuthError::InvalidCredentials),
		Err(err) => return Err(err.into()),
	};
	Ok(Session {
		access_token: granted.access_token,
		account: Account {
			email: granted.user.email,
			first_name: granted.user.user_metadata.first_name,
		},
	})
}

#[derive(Serialize)]
struct SignUp<'a> {
	email: &'a str,
	password: &'a str,
	data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
	first_name: &'a str,
}

/// Registers a host account. The response body is the provisional user record; the
/// account still has to be confirmed by email before `sign_in` succeeds, so only
/// success/failure is surfaced here.
pub async fn sign_up(email: &str, password: &str, first_name: &str) -> Result<(), AuthError> {
	Response::<serde_json::Value>::from(api::auth("signup"))
		.with_json(&SignUp {
			email,
			password,
			data: SignUpMetadata { first_name },
		})
		.send()
		.await?;
	Ok(())
}
