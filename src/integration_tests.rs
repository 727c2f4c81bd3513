#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::domain::{UserRecord, UserRecordError};

    fn scenarios() -> Vec<(UserRecord, bool)> {
        vec![
            (UserRecord::new(Some(1), Some("alice".into()), Some("alice@example.com".into())), true),
            (UserRecord::new(Some(2), Some("bob".into()), Some("bob.example.com".into())), false),
            (UserRecord::new(None, None, Some("x@y.com".into())), false),
            (UserRecord::new(Some(3), Some("carol".into()), None), false),
            (UserRecord::new(Some(4), Some(String::new()), Some("@".into())), true),
        ]
    }

    #[test]
    fn test_reference_scenarios() {
        for (user, expected) in scenarios() {
            assert_eq!(user.is_valid(), expected, "{:?}", user);
            assert_eq!(user.validate().is_ok(), expected, "{:?}", user);
            assert_eq!(user.violations().is_empty(), expected, "{:?}", user);
        }
    }

    #[test]
    fn test_clone_keeps_answers() {
        for (user, expected) in scenarios() {
            let copy = user.clone();
            assert_eq!(copy.is_valid(), expected);
            assert_eq!(copy.email(), user.email());
        }
    }

    #[tokio::test]
    async fn test_shared_record_across_tasks() {
        let user = Arc::new(UserRecord::new(
            Some(9),
            Some("heidi".into()),
            Some("heidi.example.com".into()),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let user = Arc::clone(&user);
                tokio::spawn(async move { (user.is_valid(), user.validate(), user.email().map(String::from)) })
            })
            .collect();

        for handle in handles {
            let (valid, result, email) = handle.await.unwrap();
            assert!(!valid);
            assert_eq!(result, Err(UserRecordError::EmailWithoutAtSign));
            assert_eq!(email.as_deref(), Some("heidi.example.com"));
        }
    }
}
