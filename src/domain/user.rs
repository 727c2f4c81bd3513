use super::error::UserRecordError;

/// A user account as handed over by a caller.
///
/// Fields are stored exactly as given and may all be absent. Whether the record is
/// acceptable is asked separately through [`UserRecord::is_valid`].
#[derive(Debug, Clone)]
pub struct UserRecord {
    #[allow(dead_code)]
    id: Option<i64>,
    username: Option<String>,
    email: Option<String>,
}

impl UserRecord {
    /// Creates a new record.
    ///
    /// # Arguments
    /// * `id` - Numeric identifier, `None` for records that were never persisted
    /// * `username` - Login name, `Some("")` counts as present
    /// * `email` - Email address, kept verbatim
    pub fn new(id: Option<i64>, username: Option<String>, email: Option<String>) -> Self {
        Self { id, username, email }
    }

    /// The email as it was passed in.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Username and email are present and the email contains an `@`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the first rule this record breaks.
    pub fn validate(&self) -> Result<(), UserRecordError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Every rule this record breaks, username first.
    pub fn violations(&self) -> Vec<UserRecordError> {
        let mut violations = Vec::new();

        if self.username.is_none() {
            violations.push(UserRecordError::MissingUsername);
        }
        match &self.email {
            None => violations.push(UserRecordError::MissingEmail),
            Some(email) if !email.contains('@') => {
                violations.push(UserRecordError::EmailWithoutAtSign)
            }
            Some(_) => {}
        }

        violations
    }
}
