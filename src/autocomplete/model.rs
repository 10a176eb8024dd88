use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user as stored in the user directory. Only read by this service.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl UserRecord {

    /// First and last name separated by a space, with surrounding whitespace removed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Case-insensitive containment of `needle` in the first name, last name or username.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.first_name, &self.last_name, &self.username]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl From<UserRecord> for Suggestion {
    fn from(user: UserRecord) -> Self {
        Suggestion {
            label: user.full_name(),
            id: user.username,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Users,
}

/// A fully validated autocomplete request.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteQuery {
    pub q: String,
    pub search_type: SearchType,
    pub limit: i64,
}
