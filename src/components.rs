mod auth_guard;
pub use auth_guard::*;
mod guest_table;
pub use guest_table::*;
mod invite_modal;
pub use invite_modal::*;
mod navbar;
pub use navbar::*;
mod rsvp_form;
pub use rsvp_form::*;
mod toast;
pub use toast::*;
