use async_trait::async_trait;
use crate::autocomplete::model::UserRecord;
use crate::database::UserDirectory;

/// A user directory held in memory, answering searches in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<UserRecord>,
}

impl InMemoryUserDirectory {

    pub fn new(users: Vec<UserRecord>) -> Self {
        InMemoryUserDirectory { users }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {

    async fn search_active_users(&self, query: &str, limit: i64) -> Result<Vec<UserRecord>, sqlx::Error> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let users = self.users
            .iter()
            .filter(|user| user.is_active && user.matches(query))
            .take(limit)
            .cloned()
            .collect();
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, first_name: &str, last_name: &str, is_active: bool) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            is_active,
        }
    }

    fn directory() -> InMemoryUserDirectory {
        InMemoryUserDirectory::new(vec![
            user("asmith", "Alice", "Smith", true),
            user("bsmith", "Bob", "Smith", true),
            user("ajones", "Al", "Jones", false),
        ])
    }

    fn usernames(users: Vec<UserRecord>) -> Vec<String> {
        users.into_iter().map(|u| u.username).collect()
    }

    #[tokio::test]
    async fn skips_inactive_users() {
        let found = directory().search_active_users("jones", 10).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn matches_names_and_usernames_ignoring_case() {
        assert_eq!(usernames(directory().search_active_users("SMITH", 10).await.unwrap()), vec!["asmith", "bsmith"]);
        assert_eq!(usernames(directory().search_active_users("bsm", 10).await.unwrap()), vec!["bsmith"]);
        assert_eq!(usernames(directory().search_active_users("lic", 10).await.unwrap()), vec!["asmith"]);
    }

    #[tokio::test]
    async fn truncates_to_the_limit() {
        let found = directory().search_active_users("smith", 1).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn wildcard_characters_are_literal() {
        let directory = InMemoryUserDirectory::new(vec![user("a_b", "A", "B", true), user("axb", "A", "X", true)]);
        assert_eq!(usernames(directory.search_active_users("a_b", 10).await.unwrap()), vec!["a_b"]);
    }
}
