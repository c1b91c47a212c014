//! Shared account resolution by username or email.

use crate::errors::DomainResult;
use crate::repositories::AccountStore;

/// Resolve an account from a username-or-email identifier
///
/// An identifier containing `@` is treated as an email. Anything else is
/// looked up as a username first, with an email lookup as fallback, so a
/// username that happens to equal a stored email still resolves.
pub async fn resolve_account<S: AccountStore>(
    store: &S,
    username_or_email: &str,
) -> DomainResult<Option<S::Record>> {
    if username_or_email.contains('@') {
        return store.find_by_email(username_or_email).await;
    }

    if let Some(account) = store.find_by_username(username_or_email).await? {
        return Ok(Some(account));
    }

    store.find_by_email(username_or_email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccountRecord, User};
    use crate::repositories::MockUserStore;

    fn seeded_store() -> MockUserStore {
        MockUserStore::with_user(User::new(1, "jdoe", "jdoe@example.com", "Jane", "enc", 2))
    }

    #[tokio::test]
    async fn test_email_identifier_uses_email_lookup() {
        let store = seeded_store();
        let account = resolve_account(&store, "jdoe@example.com").await.unwrap();
        assert_eq!(account.unwrap().id(), 1);
    }

    #[tokio::test]
    async fn test_username_identifier_resolves() {
        let store = seeded_store();
        let account = resolve_account(&store, "jdoe").await.unwrap();
        assert_eq!(account.unwrap().id(), 1);
    }

    #[tokio::test]
    async fn test_username_miss_falls_back_to_email() {
        // An account whose email has no '@' cannot occur in practice, but
        // the fallback also covers usernames stored in the email column.
        let store = MockUserStore::with_user({
            let mut user = User::new(5, "other", "plain-identifier", "Sam", "enc", 2);
            user.username = "unrelated".to_string();
            user
        });

        let account = resolve_account(&store, "plain-identifier").await.unwrap();
        assert_eq!(account.unwrap().id(), 5);
    }

    #[tokio::test]
    async fn test_unknown_identifier_resolves_to_none() {
        let store = seeded_store();
        assert!(resolve_account(&store, "nobody").await.unwrap().is_none());
        assert!(resolve_account(&store, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
