use tracing::{debug, info, info_span, warn};
use user_record::logging::setup_tracing;
use user_record::UserRecord;

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Checking sample user records");

    let samples = [
        UserRecord::new(Some(1), Some("alice".into()), Some("alice@example.com".into())),
        UserRecord::new(Some(2), Some("bob".into()), Some("bob.example.com".into())),
        UserRecord::new(None, None, Some("x@y.com".into())),
        UserRecord::new(Some(3), Some("carol".into()), None),
        UserRecord::new(Some(4), Some(String::new()), Some("@".into())),
    ];

    let mut accepted = 0;
    for (index, user) in samples.iter().enumerate() {
        let _span = info_span!("user_check", index).entered();

        match user.validate() {
            Ok(()) => {
                accepted += 1;
                info!(email = ?user.email(), "User record accepted");
            }
            Err(e) => {
                warn!(error = %e, email = ?user.email(), "User record rejected");
                for violation in user.violations() {
                    debug!(%violation, "Rule broken");
                }
            }
        }
    }

    info!(accepted, rejected = samples.len() - accepted, "Done");
    Ok(())
}
