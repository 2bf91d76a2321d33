use super::{Guest, GuestEvent, RsvpStatus};

pub const PAGE_SIZE: usize = 5;

/// Locally-owned projection over the full guest collection: a status filter and
/// fixed-size pages over the filtered subsequence.
///
/// The collection is fetched in full once. Every later change arrives as a
/// [`GuestEvent`] and is merged in place by id (`reconcile`); nothing here ever
/// re-queries the store. Records keep the order the store assigned (ascending id
/// on the initial read, append order for live inserts).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestList {
	all: Vec<Guest>,
	filter: RsvpStatus,
	page_index: usize,
}

impl GuestList {
	/// Installs the result of the initial bulk read.
	pub fn set_all(&mut self, guests: Vec<Guest>) {
		self.all = guests;
		self.snap_to_first_page_if_out_of_range();
	}

	pub fn filter(&self) -> RsvpStatus {
		self.filter
	}

	pub fn set_filter(&mut self, filter: RsvpStatus) {
		self.filter = filter;
		self.page_index = 0;
	}

	pub fn filtered(&self) -> impl Iterator<Item = &Guest> {
		self.all.iter().filter(|guest| self.filter.matches(guest))
	}

	pub fn page_count(&self) -> usize {
		self.filtered().count().div_ceil(PAGE_SIZE)
	}

	pub fn page_index(&self) -> usize {
		self.page_index
	}

	/// At most `PAGE_SIZE` records of the filtered subsequence.
	pub fn current_page(&self) -> Vec<&Guest> {
		self.filtered().skip(self.page_index * PAGE_SIZE).take(PAGE_SIZE).collect()
	}

	pub fn has_next_page(&self) -> bool {
		self.page_index + 1 < self.page_count()
	}

	pub fn has_previous_page(&self) -> bool {
		self.page_index > 0
	}

	pub fn next_page(&mut self) {
		if self.has_next_page() {
			self.page_index += 1;
		}
	}

	pub fn previous_page(&mut self) {
		if self.has_previous_page() {
			self.page_index -= 1;
		}
	}

	/// Merges one remote change into the list. Updates and deletes referencing an
	/// unknown id are ignored; the store is the source of truth and a transient
	/// ordering mismatch must not surface as an error. An insert for an id already
	/// present replaces the existing record (last writer wins).
	pub fn reconcile(&mut self, event: GuestEvent) {
		match event {
			GuestEvent::Inserted(guest) => match self.all.iter_mut().find(|existing| existing.id == guest.id) {
				Some(existing) => *existing = guest,
				None => self.all.push(guest),
			},
			GuestEvent::Updated(guest) => {
				if let Some(existing) = self.all.iter_mut().find(|existing| existing.id == guest.id) {
					*existing = guest;
				}
			}
			GuestEvent::Deleted(id) => self.all.retain(|existing| existing.id != id),
		}
		self.snap_to_first_page_if_out_of_range();
	}

	// A shrinking result set can leave the index past the last page; the table then
	// shows the first page again rather than an empty slice.
	fn snap_to_first_page_if_out_of_range(&mut self) {
		if self.page_index + 1 > self.page_count() {
			self.page_index = 0;
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
			guests: confirmed.and_then(|attending| attending.then_some(1)),
			confirmed,
			dietary_restrictions: None,
			special_requests: None,
			max_guests_allowed: 2,
		}
	}

	fn list_of(guests: Vec<Guest>) -> GuestList {
		let mut list = GuestList::default();
		list.set_all(guests);
		list
	}

	fn ids(list: &GuestList) -> Vec<i64> {
		list.filtered().map(|guest| guest.id).collect()
	}

	#[test]
	fn filter_returns_exact_subsequence_in_order() {
		let list = {
			let mut list = list_of(vec![
				guest(1, None),
				guest(2, Some(true)),
				guest(3, Some(false)),
				guest(4, Some(true)),
				guest(5, None),
			]);
			list.set_filter(RsvpStatus::Confirmed);
			list
		};
		assert_eq!(ids(&list), vec![2, 4]);
	}

	#[test]
	fn empty_list_has_no_pages() {
		let list = GuestList::default();
		assert_eq!(list.page_count(), 0);
		assert!(list.current_page().is_empty());
	}

	#[test]
	fn page_count_and_slicing() {
		let mut list = list_of((1..=12).map(|id| guest(id, None)).collect());
		assert_eq!(list.page_count(), 3);
		assert_eq!(list.current_page().len(), PAGE_SIZE);
		list.next_page();
		assert_eq!(list.current_page().iter().map(|g| g.id).collect::<Vec<_>>(), vec![6, 7, 8, 9, 10]);
		list.next_page();
		assert_eq!(list.current_page().len(), 2);
	}

	#[test]
	fn pagination_is_bounded() {
		let mut list = list_of((1..=7).map(|id| guest(id, None)).collect());
		list.previous_page();
		assert_eq!(list.page_index(), 0);
		list.next_page();
		list.next_page();
		list.next_page();
		assert_eq!(list.page_index(), 1);
		list.previous_page();
		assert_eq!(list.page_index(), 0);
	}

	#[test]
	fn changing_filter_resets_to_first_page() {
		let mut list = list_of((1..=12).map(|id| guest(id, Some(true))).collect());
		list.next_page();
		assert_eq!(list.page_index(), 1);
		list.set_filter(RsvpStatus::Pending);
		assert_eq!(list.page_index(), 0);
	}

	#[test]
	fn shrinking_result_set_snaps_back_to_first_page() {
		let mut list = list_of((1..=6).map(|id| guest(id, None)).collect());
		list.next_page();
		assert_eq!(list.page_index(), 1);
		list.reconcile(GuestEvent::Deleted(6));
		assert_eq!(list.page_index(), 0);
		assert_eq!(list.page_count(), 1);
	}

	#[test]
	fn insert_appends_only_when_absent() {
		let mut list = list_of(vec![guest(1, None)]);
		list.reconcile(GuestEvent::Inserted(guest(2, None)));
		assert_eq!(ids(&list), vec![1, 2]);
		// same id again replaces instead of duplicating
		list.reconcile(GuestEvent::Inserted(guest(2, Some(true))));
		assert_eq!(ids(&list), vec![1, 2]);
		assert_eq!(list.filtered().find(|g| g.id == 2).unwrap().confirmed, Some(true));
	}

	#[test]
	fn insert_final_set_is_order_independent() {
		let mut forward = list_of(vec![]);
		forward.reconcile(GuestEvent::Inserted(guest(1, None)));
		forward.reconcile(GuestEvent::Inserted(guest(2, None)));
		let mut reverse = list_of(vec![]);
		reverse.reconcile(GuestEvent::Inserted(guest(2, None)));
		reverse.reconcile(GuestEvent::Inserted(guest(1, None)));
		let mut forward_ids = ids(&forward);
		let mut reverse_ids = ids(&reverse);
		// the sequences differ (append order), the sets do not
		assert_eq!(forward_ids, vec![1, 2]);
		assert_eq!(reverse_ids, vec![2, 1]);
		forward_ids.sort_unstable();
		reverse_ids.sort_unstable();
		assert_eq!(forward_ids, reverse_ids);
	}

	#[test]
	fn update_is_idempotent() {
		let mut list = list_of(vec![guest(1, None), guest(2, None)]);
		let response = guest(2, Some(true));
		list.reconcile(GuestEvent::Updated(response.clone()));
		let once = list.clone();
		list.reconcile(GuestEvent::Updated(response));
		assert_eq!(list, once);
	}

	#[test]
	fn update_for_unknown_id_is_ignored() {
		let mut list = list_of(vec![guest(1, None)]);
		list.reconcile(GuestEvent::Updated(guest(9, Some(true))));
		assert_eq!(ids(&list), vec![1]);
	}

	#[test]
	fn delete_removes_once_then_is_a_no_op() {
		let mut list = list_of(vec![guest(1, None), guest(2, None), guest(3, None)]);
		list.reconcile(GuestEvent::Deleted(2));
		assert_eq!(ids(&list), vec![1, 3]);
		list.reconcile(GuestEvent::Deleted(2));
		assert_eq!(ids(&list), vec![1, 3]);
	}

	#[test]
	fn confirmed_filter_scenario() {
		let mut list = list_of(vec![guest(1, None), guest(2, Some(true)), guest(3, Some(false))]);
		list.set_filter(RsvpStatus::Confirmed);
		assert_eq!(ids(&list), vec![2]);
		assert_eq!(list.page_count(), 1);
		assert_eq!(list.current_page().len(), 1);
	}
}
