use async_trait::async_trait;
use sqlx::{query_as, Pool, Postgres};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{debug, error, info};
use crate::autocomplete::model::UserRecord;
use crate::core::UserDbConfig;

/// Read access to the users an autocomplete request may suggest.
#[async_trait]
pub trait UserDirectory: Send + Sync {

    /// Active users whose first name, last name or username contains `query`, ignoring case.
    /// Returns at most `limit` records in no particular order.
    async fn search_active_users(&self, query: &str, limit: i64) -> Result<Vec<UserRecord>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct UserDbClient {
    pool: Pool<Postgres>,
}

impl UserDbClient {

    pub async fn new(config: &UserDbConfig) -> Result<Self, sqlx::Error> {
        let opt = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .database(&config.db_name)
            .username(&config.db_user)
            .password(&config.db_password);
        match PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opt)
            .await
        {
            Ok(pool) => {
                info!("Established connection to the user database.");
                Ok(UserDbClient { pool })
            }
            Err(err) => {
                error!("Failed to connect to the user database: {:?}", err);
                Err(err)
            }
        }
    }
}

#[async_trait]
impl UserDirectory for UserDbClient {

    async fn search_active_users(&self, query: &str, limit: i64) -> Result<Vec<UserRecord>, sqlx::Error> {
        debug!("Searching active users matching '{}' (limit {})", query, limit);
        let users = query_as::<_, UserRecord>(
            r#"SELECT username, first_name, last_name, is_active
                FROM auth_user
                WHERE is_active = TRUE
                AND (first_name ILIKE $1 ESCAPE '\'
                    OR last_name ILIKE $1 ESCAPE '\'
                    OR username ILIKE $1 ESCAPE '\')
                LIMIT $2
            "#
        )
            .bind(contains_pattern(query))
            .bind(limit)
            .fetch_all(&self.pool).await?;
        Ok(users)
    }
}

/// Wraps `query` into a `%…%` LIKE pattern in which `%`, `_` and `\` only match themselves.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn plain_text_is_wrapped_in_wildcards() {
        assert_eq!(contains_pattern("smith"), "%smith%");
    }

    #[test]
    fn wildcards_in_the_query_are_escaped() {
        assert_eq!(contains_pattern("50%"), r"%50\%%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"c:\x"), r"%c:\\x%");
    }

    #[test]
    fn non_ascii_is_passed_through() {
        assert_eq!(contains_pattern("Jürgen"), "%Jürgen%");
    }
}
