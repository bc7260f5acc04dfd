//! Auth service: registration, login, one-time passwords, identity.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, warn};

use crate::{
    auth::{
        errors::AuthServiceError,
        models::{AuthTokens, AuthenticatedUser, NewUser, ProfileUpdate, Role, User, UserUuid},
        otp::{generate_otp_code, otp_expiry},
        password::{hash_password, verify_password},
        repository::{NewUserRecord, PgAuthRepository},
        token::TokenCodec,
    },
    database::Db,
    mailer::{Mailer, otp_email},
};

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new customer account and log them in.
    async fn register(&self, new_user: NewUser) -> Result<AuthTokens, AuthServiceError>;

    /// Verify an email and password pair and issue a token.
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AuthServiceError>;

    /// Issue a one-time password for `email` if such an account exists.
    ///
    /// Succeeds either way so the response does not reveal whether the
    /// address is registered.
    async fn request_otp(&self, email: &str) -> Result<(), AuthServiceError>;

    /// Consume a one-time password and issue a token.
    async fn verify_otp(&self, email: &str, code: &str) -> Result<AuthTokens, AuthServiceError>;

    /// Establish the identity carried by a bearer token.
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthServiceError>;

    /// Fetch the user's profile.
    async fn profile(&self, user: UserUuid) -> Result<User, AuthServiceError>;

    /// Update the user's contact details.
    async fn update_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError>;

    /// Delete the user's account.
    async fn delete_account(&self, user: UserUuid) -> Result<(), AuthServiceError>;
}

/// Account maintenance operations used by the CLI, kept off the API
/// surface on purpose.
pub struct AuthAdmin {
    db: Db,
    repository: PgAuthRepository,
}

impl AuthAdmin {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }

    /// Change the role of the account registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UserNotFound`] when no account uses
    /// that email.
    pub async fn set_role(&self, email: &str, role: Role) -> Result<User, AuthServiceError> {
        let email = normalize_email(email);

        let mut tx = self.db.begin().await?;
        let updated = self.repository.set_user_role(&mut tx, &email, role).await?;
        tx.commit().await?;

        updated.ok_or(AuthServiceError::UserNotFound)
    }
}

/// Postgres-backed [`AuthService`].
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
    tokens: TokenCodec,
    mailer: Arc<dyn Mailer>,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, tokens: TokenCodec, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
            tokens,
            mailer,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn register(&self, new_user: NewUser) -> Result<AuthTokens, AuthServiceError> {
        let password_hash = hash_password(&new_user.password)?;

        let record = NewUserRecord {
            uuid: UserUuid::new(),
            username: new_user.username,
            email: normalize_email(&new_user.email),
            password_hash,
            role: Role::Customer,
            name: new_user.name,
            phone: new_user.phone,
        };

        let mut tx = self.db.begin().await?;
        let user = self.repository.create_user(&mut tx, &record).await?;
        tx.commit().await?;

        let token = self.tokens.issue(&user)?;

        Ok(AuthTokens { token, user })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AuthServiceError> {
        let email = normalize_email(email);

        let mut tx = self.db.begin().await?;
        let found = self.repository.find_user_by_email(&mut tx, &email).await?;
        tx.commit().await?;

        let Some(found) = found else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password, &found.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(&found.user)?;

        Ok(AuthTokens {
            token,
            user: found.user,
        })
    }

    async fn request_otp(&self, email: &str) -> Result<(), AuthServiceError> {
        let email = normalize_email(email);

        let mut tx = self.db.begin().await?;

        let Some(found) = self.repository.find_user_by_email(&mut tx, &email).await? else {
            tx.commit().await?;
            debug!(email, "OTP requested for unknown email; ignoring");
            return Ok(());
        };

        let code = generate_otp_code();
        let expires_at = otp_expiry(Timestamp::now());

        self.repository
            .create_otp(&mut tx, &email, &code, expires_at)
            .await?;

        tx.commit().await?;

        let message = otp_email(&email, found.user.display_name(), &code);

        if let Err(error) = self.mailer.send(&message).await {
            warn!(email, %error, "failed to deliver OTP email");
        }

        Ok(())
    }

    async fn verify_otp(&self, email: &str, code: &str) -> Result<AuthTokens, AuthServiceError> {
        let email = normalize_email(email);

        let mut tx = self.db.begin().await?;

        let Some(otp) = self
            .repository
            .find_otp_for_update(&mut tx, &email, code)
            .await?
        else {
            return Err(AuthServiceError::OtpInvalid);
        };

        if otp.used {
            return Err(AuthServiceError::OtpUsed);
        }

        if otp.expires_at < Timestamp::now() {
            return Err(AuthServiceError::OtpExpired);
        }

        self.repository.mark_otp_used(&mut tx, otp.uuid).await?;

        let Some(found) = self.repository.find_user_by_email(&mut tx, &email).await? else {
            return Err(AuthServiceError::UserNotFound);
        };

        tx.commit().await?;

        let token = self.tokens.issue(&found.user)?;

        Ok(AuthTokens {
            token,
            user: found.user,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthServiceError> {
        self.tokens
            .verify(token)
            .map_err(AuthServiceError::InvalidToken)
    }

    async fn profile(&self, user: UserUuid) -> Result<User, AuthServiceError> {
        let mut tx = self.db.begin().await?;
        let found = self.repository.find_user_by_uuid(&mut tx, user).await?;
        tx.commit().await?;

        found.ok_or(AuthServiceError::UserNotFound)
    }

    async fn update_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_user_profile(&mut tx, user, &update)
            .await?;

        tx.commit().await?;

        updated.ok_or(AuthServiceError::UserNotFound)
    }

    async fn delete_account(&self, user: UserUuid) -> Result<(), AuthServiceError> {
        let mut tx = self.db.begin().await?;
        let rows_affected = self.repository.delete_user(&mut tx, user).await?;
        tx.commit().await?;

        if rows_affected == 0 {
            return Err(AuthServiceError::UserNotFound);
        }

        Ok(())
    }
}

/// Emails are stored and matched lowercase, so `Asha@Example.com` and
/// `asha@example.com` name the same account.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::models::NewUser,
        test::TestContext,
    };

    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            name: None,
            phone: None,
        }
    }

    #[test]
    fn emails_normalize_to_lowercase() {
        assert_eq!(normalize_email(" Asha@Example.COM "), "asha@example.com");
        assert_eq!(normalize_email("asha@example.com"), "asha@example.com");
    }

    #[tokio::test]
    async fn register_stores_the_email_lowercase() -> TestResult {
        let ctx = TestContext::new().await;

        let tokens = ctx
            .auth
            .register(new_user("asha", "Asha@Example.COM"))
            .await?;

        assert_eq!(tokens.user.email, "asha@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn login_matches_email_case_insensitively() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .register(new_user("asha", "Asha@Example.com"))
            .await?;

        let tokens = ctx
            .auth
            .login("asha@EXAMPLE.com", "correct horse battery staple")
            .await?;

        assert_eq!(tokens.user.username, "asha");

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_case_variant_duplicate_emails() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .register(new_user("asha", "Foo@Bar.com"))
            .await?;

        let result = ctx.auth.register(new_user("asha2", "foo@bar.com")).await;

        assert!(
            matches!(result, Err(AuthServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
