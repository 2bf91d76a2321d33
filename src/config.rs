//! Deployment configuration for the hosted backend project. The defaults point at the
//! development project; release builds override them at compile time.

pub static PROJECT_URL: &str = match option_env!("RSVP_PROJECT_URL") {
	Some(url) => url,
	None => "https://pjramg-rsvp.supabase.co",
};

/// Public (anonymous) API key; row-level security on the backend decides what it may
/// read and write.
pub static ANON_KEY: &str = match option_env!("RSVP_ANON_KEY") {
	Some(key) => key,
	None => "anon-development-key",
};
