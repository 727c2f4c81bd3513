use thiserror::Error;

/// Rules a [`UserRecord`](super::UserRecord) can break.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UserRecordError {
    #[error("User validation error: username is missing")]
    MissingUsername,
    #[error("User validation error: email is missing")]
    MissingEmail,
    #[error("User validation error: email has no '@'")]
    EmailWithoutAtSign,
}
