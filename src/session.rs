use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};

/// Typed values persisted in browser session storage. Each implementor owns one slot;
/// the slot survives reloads within the tab but not the tab itself.
pub trait SessionValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		SessionStorage::get::<Self>(Self::id()).ok()
	}

	fn save(self)
	where
		Self: Sized + Serialize,
	{
		let _ = SessionStorage::set(Self::id(), self);
	}

	fn delete() {
		SessionStorage::delete(Self::id());
	}
}

/// The signed-in host. Issued by the auth endpoint; the access token rides along on
/// every table request while the session lasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
	pub access_token: String,
	pub account: Account,
}
impl SessionValue for Session {
	fn id() -> &'static str {
		"session"
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
	pub email: String,
	pub first_name: Option<String>,
}

impl Account {
	/// Name for the dashboard greeting.
	pub fn display_name(&self) -> &str {
		match &self.first_name {
			Some(name) if !name.is_empty() => name,
			_ => self.email.as_str(),
		}
	}
}

/// App-wide auth context. Components read it through yewdux and never touch storage
/// directly; the two signed_in/signed_out transitions keep the store and the
/// persisted slot in step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore(pub Option<Session>);

impl yewdux::store::Store for SessionStore {
	fn new(_cx: &yewdux::Context) -> Self {
		Self(Session::load())
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl SessionStore {
	pub fn signed_in(dispatch: &yewdux::Dispatch<Self>, session: Session) {
		session.clone().save();
		dispatch.set(Self(Some(session)));
	}

	pub fn signed_out(dispatch: &yewdux::Dispatch<Self>) {
		Session::delete();
		dispatch.set(Self(None));
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn greeting_falls_back_to_email() {
		let mut account = Account {
			email: "host@example.com".into(),
			first_name: Some("Paulo".into()),
		};
		assert_eq!(account.display_name(), "Paulo");
		account.first_name = Some(String::new());
		assert_eq!(account.display_name(), "host@example.com");
		account.first_name = None;
		assert_eq!(account.display_name(), "host@example.com");
	}
}
