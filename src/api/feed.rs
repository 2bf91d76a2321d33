//! Change feed for the guest table: a standing websocket on which the store pushes
//! insert/update/delete notifications. The subscription lives exactly as long as the
//! component that opened it; dropping it leaves the join, detaches every listener,
//! and closes the socket. Reconnection is left to whoever owns the subscription (no
//! policy here beyond what the transport provides).

use crate::{config, data::GuestEvent};
use gloo_events::EventListener;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};
use yew::Callback;

static LOG: &str = "feed";
static TOPIC: &str = "realtime:public:guests";
const HEARTBEAT_MILLIS: u32 = 30_000;

pub struct Subscription {
	socket: WebSocket,
	join_ref: String,
	_listeners: Vec<EventListener>,
	_heartbeat: gloo_timers::callback::Interval,
}

impl Subscription {
	/// Opens the socket and joins the guests topic. `on_event` fires once per decoded
	/// change; protocol frames (join replies, heartbeats) never reach it.
	pub fn open(on_event: Callback<GuestEvent>) -> Result<Self, super::Error> {
		let endpoint = endpoint().map_err(|err| super::Error::RemoteUnavailable(err.to_string()))?;
		let socket = WebSocket::new(endpoint.as_str())
			.map_err(|err| super::Error::RemoteUnavailable(format!("{err:?}")))?;
		let join_ref = uuid::Uuid::new_v4().to_string();

		let mut listeners = Vec::with_capacity(3);
		listeners.push(EventListener::new(&socket, "open", {
			let socket = socket.clone();
			let join = control_frame(TOPIC, "phx_join", &join_ref);
			move |_| {
				if let Err(err) = socket.send_with_str(&join) {
					log::error!(target: LOG, "failed to join guests topic: {err:?}");
				}
			}
		}));
		listeners.push(EventListener::new(&socket, "message", move |event| {
			let Some(message) = event.dyn_ref::<MessageEvent>() else { return };
			let Some(text) = message.data().as_string() else { return };
			if let Some(change) = decode(&text) {
				on_event.emit(change);
			}
		}));
		listeners.push(EventListener::new(&socket, "close", |_| {
			log::debug!(target: LOG, "change feed closed");
		}));

		let heartbeat = {
			let socket = socket.clone();
			gloo_timers::callback::Interval::new(HEARTBEAT_MILLIS, move || {
				let frame = control_frame("phoenix", "heartbeat", &uuid::Uuid::new_v4().to_string());
				let _ = socket.send_with_str(&frame);
			})
		};

		Ok(Self {
			socket,
			join_ref,
			_listeners: listeners,
			_heartbeat: heartbeat,
		})
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		// best effort; the socket may already be closed or never have opened
		let _ = self.socket.send_with_str(&control_frame(TOPIC, "phx_leave", &self.join_ref));
		let _ = self.socket.close();
	}
}

fn endpoint() -> Result<url::Url, url::ParseError> {
	let mut url = url::Url::parse(config::PROJECT_URL)?;
	let scheme = match url.scheme() {
		"http" => "ws",
		_ => "wss",
	};
	let _ = url.set_scheme(scheme);
	url.set_path("/realtime/v1/websocket");
	url.query_pairs_mut()
		.append_pair("apikey", config::ANON_KEY)
		.append_pair("vsn", "1.0.0");
	Ok(url)
}

fn control_frame(topic: &str, event: &str, reference: &str) -> String {
	serde_json::json!({
		"topic": topic,
		"event": event,
		"payload": {},
		"ref": reference,
	})
	.to_string()
}

#[derive(Deserialize)]
struct Frame {
	event: String,
	#[serde(default)]
	payload: serde_json::Value,
}

/// Decodes one inbound frame. Protocol chatter returns `None`; a frame that claims to
/// be a change but fails to parse is logged and dropped, never an error, since the
/// store remains the source of truth and the next full read heals any gap.
fn decode(text: &str) -> Option<GuestEvent> {
	let frame = match serde_json::from_str::<Frame>(text) {
		Ok(frame) => frame,
		Err(err) => {
			log::warn!(target: LOG, "undecodable frame: {err}");
			return None;
		}
	};
	let record = |payload: &serde_json::Value, key: &str| -> Option<crate::data::Guest> {
		match serde_json::from_value(payload.get(key)?.clone()) {
			Ok(guest) => Some(guest),
			Err(err) => {
				log::warn!(target: LOG, "{} frame with malformed {key}: {err}", frame.event);
				None
			}
		}
	};
	match frame.event.as_str() {
		"INSERT" => record(&frame.payload, "record").map(GuestEvent::Inserted),
		"UPDATE" => record(&frame.payload, "record").map(GuestEvent::Updated),
		// deletes only carry the replica identity of the old row
		"DELETE" => frame.payload.get("old_record")?.get("id")?.as_i64().map(GuestEvent::Deleted),
		_ => None,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn guest_json(id: i64) -> String {
		format!(r#"{{"id": {id}, "name": "Ana", "confirmed": true, "guests": 2, "maxGuests": 4}}"#)
	}

	#[test]
	fn decodes_insert_and_update() {
		let insert = format!(
			r#"{{"topic":"realtime:public:guests","event":"INSERT","payload":{{"record":{}}},"ref":null}}"#,
			guest_json(5)
		);
		let Some(GuestEvent::Inserted(guest)) = decode(&insert) else {
			panic!("expected insert event");
		};
		assert_eq!(guest.id, 5);

		let update = insert.replace("INSERT", "UPDATE");
		assert!(matches!(decode(&update), Some(GuestEvent::Updated(g)) if g.id == 5));
	}

	#[test]
	fn decodes_delete_from_old_record() {
		let delete = r#"{"topic":"realtime:public:guests","event":"DELETE","payload":{"old_record":{"id":9}},"ref":null}"#;
		assert_eq!(decode(delete), Some(GuestEvent::Deleted(9)));
	}

	#[test]
	fn protocol_chatter_is_ignored() {
		let reply = r#"{"topic":"realtime:public:guests","event":"phx_reply","payload":{"status":"ok"},"ref":"1"}"#;
		assert_eq!(decode(reply), None);
		assert_eq!(decode(r#"{"event":"heartbeat","payload":{}}"#), None);
	}

	#[test]
	fn endpoint_upgrades_scheme_and_carries_key() {
		let url = endpoint().unwrap();
		assert_eq!(url.scheme(), "wss");
		assert_eq!(url.path(), "/realtime/v1/websocket");
		assert!(url.query().unwrap().contains("apikey="));
	}

	#[test]
	fn malformed_frames_never_panic() {
		assert_eq!(decode("not json at all"), None);
		assert_eq!(decode(r#"{"event":"INSERT","payload":{}}"#), None);
		assert_eq!(decode(r#"{"event":"INSERT","payload":{"record":{"id":"nope"}}}"#), None);
		assert_eq!(decode(r#"{"event":"DELETE","payload":{"old_record":{}}}"#), None);
	}
}
