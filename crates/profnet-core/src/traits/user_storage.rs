use crate::errors::ProfnetResult;
use crate::models::{PersonSummary, User};

/// Salted password digest as persisted. Both fields are hex/opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub password_hash: String,
    pub salt: String,
}

/// User account persistence.
pub trait IUserStorage: Send + Sync {
    /// Insert a user. Fails with `UserAlreadyExists` on a duplicate id.
    fn create_user(&self, user: &User, credentials: &StoredCredentials) -> ProfnetResult<()>;
    fn get_user(&self, user_id: &str) -> ProfnetResult<Option<User>>;
    fn user_exists(&self, user_id: &str) -> ProfnetResult<bool>;
    fn get_credentials(&self, user_id: &str) -> ProfnetResult<Option<StoredCredentials>>;
    /// Returns false if the user does not exist.
    fn update_credentials(
        &self,
        user_id: &str,
        credentials: &StoredCredentials,
    ) -> ProfnetResult<bool>;
    /// Exact match on display name.
    fn search_by_name(&self, name: &str) -> ProfnetResult<Vec<PersonSummary>>;
}
