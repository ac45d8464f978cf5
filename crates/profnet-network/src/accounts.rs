//! Registration, log-in, and people search.

use chrono::Utc;

use profnet_core::errors::{ProfnetError, ProfnetResult};
use profnet_core::models::{NewUser, PersonSummary, User};
use profnet_core::traits::IUserStorage;
use profnet_observability::account_span;

use crate::engine::NetworkEngine;
use crate::password;
use crate::session::AuthenticatedUser;
use crate::validation;

impl NetworkEngine {
    /// Register a new account. The password is stored only as a salted digest.
    pub fn create_user(&self, new_user: NewUser) -> ProfnetResult<User> {
        let _span = account_span!("create_user", new_user.user_id).entered();

        validation::require_user_id("user_id", &new_user.user_id)?;
        validation::require_non_empty("password", &new_user.password)?;
        validation::require_email(&new_user.email)?;

        let user = User {
            user_id: new_user.user_id,
            email: new_user.email,
            name: new_user.name,
            date_of_birth: new_user.date_of_birth,
            created_at: Utc::now(),
        };
        let credentials = password::hash_password(&new_user.password);
        self.storage.create_user(&user, &credentials)?;

        tracing::info!(user_id = %user.user_id, "user created");
        Ok(user)
    }

    /// Check a login/password pair. Unknown users and wrong passwords are
    /// indistinguishable to the caller.
    pub fn log_in(&self, user_id: &str, password: &str) -> ProfnetResult<AuthenticatedUser> {
        let _span = account_span!("log_in", user_id).entered();

        let Some(stored) = self.storage.get_credentials(user_id)? else {
            tracing::warn!("log-in for unknown user");
            return Err(ProfnetError::InvalidCredentials);
        };
        if !password::verify_password(password, &stored) {
            tracing::warn!("log-in with wrong password");
            return Err(ProfnetError::InvalidCredentials);
        }

        tracing::info!("user logged in");
        Ok(AuthenticatedUser::new(user_id))
    }

    pub fn change_password(
        &self,
        actor: &AuthenticatedUser,
        new_password: &str,
    ) -> ProfnetResult<()> {
        let _span = account_span!("change_password", actor).entered();

        validation::require_non_empty("password", new_password)?;
        let credentials = password::hash_password(new_password);
        if !self.storage.update_credentials(actor.user_id(), &credentials)? {
            return Err(ProfnetError::UserNotFound {
                id: actor.user_id().to_string(),
            });
        }

        tracing::info!("password changed");
        Ok(())
    }

    /// People whose display name is exactly `name`.
    pub fn search_people(&self, name: &str) -> ProfnetResult<Vec<PersonSummary>> {
        validation::require_non_empty("name", name)?;
        self.storage.search_by_name(name)
    }

    pub fn get_user(&self, user_id: &str) -> ProfnetResult<Option<User>> {
        self.storage.get_user(user_id)
    }
}
