//! # User Record
//!
//! An in-memory user account (identifier, username, email) with a single
//! well-formedness rule: username and email are present and the email contains an `@`.
//!
//! Records never fail to build. Ask them afterwards:
//!
//! ```rust
//! use user_record::UserRecord;
//!
//! let user = UserRecord::new(Some(1), Some("alice".into()), Some("alice@example.com".into()));
//! assert!(user.is_valid());
//! assert_eq!(user.email(), Some("alice@example.com"));
//!
//! let user = UserRecord::new(Some(2), Some("bob".into()), Some("bob.example.com".into()));
//! assert!(!user.is_valid());
//! ```

pub mod domain;
pub mod logging;

#[cfg(test)]
mod integration_tests;

pub use domain::{UserRecord, UserRecordError};
