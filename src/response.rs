use crate::api::Error;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A pending request whose body deserializes to `T`. Thin wrapper over
/// [`reqwest::RequestBuilder`] so call sites state the payload type once and every
/// transport failure funnels into [`crate::api::Error`].
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, Error> {
		let response = self
			.builder
			.send()
			.await
			.map_err(|err| Error::RemoteUnavailable(err.to_string()))?;
		let status = response.status();
		let text = response
			.text()
			.await
			.map_err(|err| Error::RemoteUnavailable(err.to_string()))?;
		if !status.is_success() {
			log::debug!(target: "api", "request rejected with {status}: {text}");
			return Err(Error::Status(status.as_u16()));
		}
		serde_json::from_str(&text).map_err(|err| Error::InvalidJson(text, err.to_string()))
	}
}
