//! Local form validation. A failure here blocks the remote call entirely; nothing in
//! this module performs I/O.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationFailure {
	#[error("Enter a valid email address")]
	InvalidEmail,
	#[error("Enter your password")]
	MissingPassword,
	#[error("Enter a name")]
	MissingName,
	#[error("Party size must be between 1 and {0}")]
	PartySizeOutOfRange(u32),
}

pub fn email(value: &str) -> Result<(), ValidationFailure> {
	if EMAIL.is_match(value.trim()) {
		Ok(())
	} else {
		Err(ValidationFailure::InvalidEmail)
	}
}

pub fn password(value: &str) -> Result<(), ValidationFailure> {
	if value.is_empty() {
		Err(ValidationFailure::MissingPassword)
	} else {
		Ok(())
	}
}

pub fn guest_name(value: &str) -> Result<(), ValidationFailure> {
	if value.trim().is_empty() {
		Err(ValidationFailure::MissingName)
	} else {
		Ok(())
	}
}

/// Party size comes from a select bounded by the invitation's cap, but the cap is
/// checked again here so a stale form can never submit an oversized party.
pub fn party_size(value: u32, max_allowed: u32) -> Result<(), ValidationFailure> {
	if value >= 1 && value <= max_allowed {
		Ok(())
	} else {
		Err(ValidationFailure::PartySizeOutOfRange(max_allowed))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn email_shapes() {
		assert!(email("host@example.com").is_ok());
		assert!(email("  host@example.com  ").is_ok());
		assert!(email("host@example").is_err());
		assert!(email("not an email").is_err());
		assert!(email("").is_err());
	}

	#[test]
	fn party_size_bounds() {
		assert!(party_size(1, 4).is_ok());
		assert!(party_size(4, 4).is_ok());
		assert_eq!(party_size(0, 4), Err(ValidationFailure::PartySizeOutOfRange(4)));
		assert_eq!(party_size(5, 4), Err(ValidationFailure::PartySizeOutOfRange(4)));
	}

	#[test]
	fn names_must_be_non_blank() {
		assert!(guest_name("Ana").is_ok());
		assert!(guest_name("   ").is_err());
	}
}
