use crate::{
	api::{self, feed::Subscription, guests},
	components::{InviteModal, Notice, Toast},
	data::{Guest, GuestEvent, GuestList, RsvpStatus},
	util,
};
use yew::prelude::*;

static LOG: &str = "guest-table";

/// Host dashboard table: the full guest collection behind a status filter and
/// five-row pages, kept live by the change feed. The collection is read once in
/// `create`; every later mutation comes in as a [`GuestEvent`].
pub struct GuestTable {
	list: GuestList,
	loading: bool,
	load_error: Option<api::Error>,
	// events that arrived while the bulk read was in flight; replayed once it lands
	// so a stale read cannot clobber a newer change
	backlog: Vec<GuestEvent>,
	notice: Option<Notice>,
	_feed: Option<Subscription>,
}

pub enum Msg {
	Loaded(Vec<Guest>),
	LoadFailed(api::Error),
	Retry,
	FilterChanged(RsvpStatus),
	NextPage,
	PreviousPage,
	Remote(GuestEvent),
	CopyUrl(i64),
	Notify(Notice),
	DismissNotice,
}

impl Component for GuestTable {
	type Message = Msg;
	type Properties = ();

	fn create(ctx: &Context<Self>) -> Self {
		ctx.link().send_future(Self::load());
		let feed = match Subscription::open(ctx.link().callback(Msg::Remote)) {
			Ok(subscription) => Some(subscription),
			Err(err) => {
				// the table still works, it just will not update live
				log::error!(target: LOG, "change feed unavailable: {err}");
				None
			}
		};
		Self {
			list: GuestList::default(),
			loading: true,
			load_error: None,
			backlog: Vec::new(),
			notice: None,
			_feed: feed,
		}
	}

	fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
		match msg {
			Msg::Loaded(guests) => {
				self.apply_loaded(guests);
				true
			}
			Msg::LoadFailed(err) => {
				log::error!(target: LOG, "failed to fetch guests: {err}");
				self.apply_load_failure(err);
				true
			}
			Msg::Retry => {
				self.begin_reload();
				ctx.link().send_future(Self::load());
				true
			}
			Msg::FilterChanged(filter) => {
				self.list.set_filter(filter);
				true
			}
			Msg::NextPage => {
				self.list.next_page();
				true
			}
			Msg::PreviousPage => {
				self.list.previous_page();
				true
			}
			Msg::Remote(event) => self.apply_remote(event),
			Msg::CopyUrl(id) => {
				let url = format!("{}/invitation/{id}", util::origin());
				ctx.link().send_future(async move {
					match util::copy_to_clipboard(url).await {
						Ok(()) => Msg::Notify(Notice::info("Invitation link copied")),
						Err(err) => {
							log::error!(target: LOG, "{err:?}");
							Msg::Notify(Notice::error("Could not copy the invitation link"))
						}
					}
				});
				false
			}
			Msg::Notify(notice) => {
				self.notice = Some(notice);
				true
			}
			Msg::DismissNotice => {
				self.notice = None;
				true
			}
		}
	}

	fn view(&self, ctx: &Context<Self>) -> Html {
		let on_created = ctx.link().callback(|guest| Msg::Remote(GuestEvent::Inserted(guest)));
		html! {
			<div class="guest-table">
				<div class="d-flex justify-content-end mb-2">
					<InviteModal {on_created} />
				</div>
				{self.view_table(ctx)}
				<div class="d-flex align-items-center justify-content-between mt-2">
					{self.view_filter(ctx)}
					{self.view_pager(ctx)}
				</div>
				<Toast notice={self.notice.clone()} on_dismiss={ctx.link().callback(|_| Msg::DismissNotice)} />
			</div>
		}
	}
}

impl GuestTable {
	async fn load() -> Msg {
		match guests::fetch_all().await {
			Ok(guests) => Msg::Loaded(guests),
			Err(err) => Msg::LoadFailed(err),
		}
	}

	fn apply_loaded(&mut self, guests: Vec<Guest>) {
		self.loading = false;
		self.load_error = None;
		self.list.set_all(guests);
		for event in self.backlog.drain(..) {
			self.list.reconcile(event);
		}
	}

	fn apply_load_failure(&mut self, err: api::Error) {
		self.loading = false;
		self.load_error = Some(err);
		// The list is live again from here, so what arrived mid-flight merges now,
		// in arrival order. Holding it back instead would replay it over a later
		// successful read and revert newer state.
		for event in self.backlog.drain(..) {
			self.list.reconcile(event);
		}
	}

	fn begin_reload(&mut self) {
		self.loading = true;
		self.load_error = None;
	}

	fn apply_remote(&mut self, event: GuestEvent) -> bool {
		if self.loading {
			self.backlog.push(event);
			false
		} else {
			self.list.reconcile(event);
			true
		}
	}

	fn view_table(&self, ctx: &Context<Self>) -> Html {
		if self.loading {
			return html! {
				<div class="text-center p-5">
					<div class="spinner-border" role="status" />
				</div>
			};
		}
		if let Some(err) = &self.load_error {
			return html! {
				<div class="alert alert-danger d-flex justify-content-between align-items-center">
					<span>{err.user_message()}</span>
					<button class="btn btn-outline-danger btn-sm" onclick={ctx.link().callback(|_| Msg::Retry)}>
						{"Retry"}
					</button>
				</div>
			};
		}
		let rows = self.list.current_page();
		html! {
			<div class="table-responsive border rounded">
				<table class="table align-middle mb-0">
					<thead class="table-dark">
						<tr>
							<th class="w-50">{"Name"}</th>
							<th class="text-center">{"Party size"}</th>
							<th class="text-center">{"Actions"}</th>
							<th class="text-center">{"Status"}</th>
						</tr>
					</thead>
					<tbody>
						{match rows.is_empty() {
							true => html! {
								<tr>
									<td colspan="4" class="text-center text-muted fw-semibold">
										{"No guests to show"}
									</td>
								</tr>
							},
							false => rows.into_iter().map(|guest| self.view_row(ctx, guest)).collect::<Html>(),
						}}
					</tbody>
				</table>
			</div>
		}
	}

	fn view_row(&self, ctx: &Context<Self>, guest: &Guest) -> Html {
		let id = guest.id;
		let party_size = match guest.guests {
			Some(count) => count.to_string(),
			None => "--".to_owned(),
		};
		let badge = match guest.status() {
			RsvpStatus::Confirmed => "badge bg-success",
			RsvpStatus::Cancelled => "badge bg-danger",
			_ => "badge bg-warning text-dark",
		};
		html! {
			<tr key={id}>
				<td class="fw-medium">{&guest.name}</td>
				<td class="text-center">{party_size}</td>
				<td class="text-center">
					<button class="btn btn-outline-secondary btn-sm" onclick={ctx.link().callback(move |_| Msg::CopyUrl(id))}>
						{"Copy link"}
					</button>
				</td>
				<td class="text-center">
					<span class={badge}>{guest.status().label()}</span>
				</td>
			</tr>
		}
	}

	fn view_filter(&self, ctx: &Context<Self>) -> Html {
		let onchange = ctx.link().callback(|event: Event| {
			let value = event.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
			Msg::FilterChanged(RsvpStatus::from_value(&value))
		});
		html! {
			<div class="d-flex align-items-center gap-2">
				<span class="small fw-medium">{"Filter by status"}</span>
				<select class="form-select form-select-sm w-auto" {onchange}>
					{RsvpStatus::iter().map(|status| html! {
						<option value={status.value()} selected={status == self.list.filter()}>
							{status.label()}
						</option>
					}).collect::<Html>()}
				</select>
			</div>
		}
	}

	fn view_pager(&self, ctx: &Context<Self>) -> Html {
		html! {
			<div class="d-flex align-items-center gap-2">
				<button
					class="btn btn-outline-secondary btn-sm"
					disabled={!self.list.has_previous_page()}
					onclick={ctx.link().callback(|_| Msg::PreviousPage)}
				>
					{"Previous"}
				</button>
				<button
					class="btn btn-outline-secondary btn-sm"
					disabled={!self.list.has_next_page()}
					onclick={ctx.link().callback(|_| Msg::NextPage)}
				>
					{"Next"}
				</button>
			</div>
		}
	}
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

	fn loading_table() -> GuestTable {
		GuestTable {
			list: GuestList::default(),
			loading: true,
			load_error: None,
			backlog: Vec::new(),
			notice: None,
			_feed: None,
		}
	}

	fn confirmed(table: &GuestTable, id: i64) -> Option<bool> {
		table.list.filtered().find(|g| g.id == id).and_then(|g| g.confirmed)
	}

	#[test]
	fn events_during_load_replay_after_the_read_lands() {
		let mut table = loading_table();
		assert!(!table.apply_remote(GuestEvent::Updated(guest(1, Some(true)))));
		table.apply_loaded(vec![guest(1, None), guest(2, None)]);
		assert_eq!(confirmed(&table, 1), Some(true));
		assert!(table.backlog.is_empty());
	}

	#[test]
	fn failed_load_drains_the_backlog() {
		let mut table = loading_table();
		table.apply_remote(GuestEvent::Inserted(guest(3, None)));
		table.apply_load_failure(api::Error::RemoteUnavailable("down".into()));
		assert!(table.load_error.is_some());
		assert!(table.backlog.is_empty());
		// the insert that arrived mid-flight is already visible
		assert_eq!(table.list.filtered().count(), 1);
	}

	#[test]
	fn events_from_before_a_failed_load_cannot_revert_a_later_read() {
		let mut table = loading_table();
		// stale update arrives while the first read is in flight
		table.apply_remote(GuestEvent::Updated(guest(1, Some(false))));
		table.apply_load_failure(api::Error::RemoteUnavailable("down".into()));
		// the guest responds again before the host retries
		table.begin_reload();
		table.apply_loaded(vec![guest(1, Some(true))]);
		assert_eq!(confirmed(&table, 1), Some(true));
	}

	#[test]
	fn events_apply_directly_once_live() {
		let mut table = loading_table();
		table.apply_loaded(vec![guest(1, None)]);
		assert!(table.apply_remote(GuestEvent::Updated(guest(1, Some(false)))));
		assert_eq!(confirmed(&table, 1), Some(false));
		assert!(table.backlog.is_empty());
	}
}
