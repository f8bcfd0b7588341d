//! Sign In Use Case
//!
//! Authenticates an account and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AccountRepository, AuthSessionRepository};
use crate::domain::value_object::{account_password::RawPassword, username::Username};
use crate::error::{AuthError, AuthResult};

/// Re-export ClientInfo from platform
pub use platform::client::ClientInfo;

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub account_id: uuid::Uuid,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AccountRepository,
    S: AuthSessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AccountRepository,
    S: AuthSessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput, client: ClientInfo) -> AuthResult<SignInOutput> {
        // Every failure path below collapses to InvalidCredentials so the
        // response never reveals whether the username exists.
        let username =
            Username::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .account_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = account
            .password_hash
            .verify(&raw_password, self.config.pepper())?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // Update account's last login
        let mut account = account;
        account.record_login();
        self.account_repo.update(&account).await?;

        // Create session bound to the client fingerprint
        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = AuthSession::new(
            account.account_id,
            client.fingerprint_vec(),
            client.ip_string(),
            Some(client.user_agent.clone()),
            ttl,
        );

        self.session_repo.create(&session).await?;

        let session_token = self.generate_session_token(&session);

        tracing::info!(
            account_id = %account.account_id,
            session_id = %session.session_id,
            "Account signed in"
        );

        Ok(SignInOutput {
            session_token,
            account_id: account.account_id.into_uuid(),
            username: account.username.original().to_string(),
        })
    }

    /// Generate signed session token
    fn generate_session_token(&self, session: &AuthSession) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let session_id = session.session_id.to_string();

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            session_id,
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
        )
    }
}
