mod guest;
pub use guest::*;

mod guest_list;
pub use guest_list::*;

pub mod validate;
