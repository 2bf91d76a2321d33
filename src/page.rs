mod dashboard;
pub use dashboard::*;
mod invitation;
pub use invitation::*;
mod login;
pub use login::*;
mod register;
pub use register::*;
