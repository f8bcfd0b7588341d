//! Unit tests for the auth crate
//!
//! Use cases are exercised against an in-memory repository so the full
//! signup/login/logout flows run without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::entity::{account::Account, auth_session::AuthSession};
use crate::domain::repository::{AccountRepository, AuthSessionRepository};
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AuthError, AuthResult};
use kernel::id::AccountId;
use platform::client::ClientInfo;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemAuthRepository {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
    sessions: Arc<Mutex<HashMap<Uuid, AuthSession>>>,
}

impl AccountRepository for MemAuthRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.account_id.into_uuid(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().get(account_id.as_uuid()).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.username.canonical() == username.canonical())
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .any(|a| a.username.canonical() == username.canonical()))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .any(|a| a.email == *email))
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.account_id.into_uuid(), account.clone());
        Ok(())
    }
}

impl AuthSessionRepository for MemAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AuthSession>> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(s) if s.client_fingerprint_hash != fingerprint_hash => {
                Err(AuthError::SessionFingerprintMismatch)
            }
            other => Ok(other.cloned()),
        }
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        session_secret: [7u8; 32],
        cookie_secure: false,
        ..Default::default()
    })
}

fn test_client() -> ClientInfo {
    ClientInfo {
        ip: None,
        user_agent: "test-agent/1.0".to_string(),
    }
}

async fn sign_up(
    repo: &Arc<MemAuthRepository>,
    config: &Arc<AuthConfig>,
    username: &str,
    email: &str,
    password: &str,
) -> AuthResult<crate::application::SignUpOutput> {
    let use_case = SignUpUseCase::new(repo.clone(), config.clone());
    use_case
        .execute(SignUpInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
}

// ============================================================================
// Sign up
// ============================================================================

#[tokio::test]
async fn test_sign_up_stores_hash_not_plaintext() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    let output = sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    let account = AccountRepository::find_by_id(
        repo.as_ref(),
        &AccountId::from_uuid(output.account_id),
    )
    .await
    .unwrap()
    .unwrap();

    assert_ne!(account.password_hash.as_str(), "correct horse");
    assert!(account.password_hash.as_str().starts_with("$argon2id$"));

    let raw = crate::domain::value_object::account_password::RawPassword::new(
        "correct horse".to_string(),
    )
    .unwrap();
    assert!(account.password_hash.verify(&raw, config.pepper()).unwrap());
}

#[tokio::test]
async fn test_sign_up_duplicate_username_conflicts() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    // Same username (different casing), different email
    let err = sign_up(&repo, &config, "Alice", "other@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UsernameTaken));

    // Different username, same email
    let err = sign_up(&repo, &config, "alice2", "alice@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));

    // No extra account was created
    assert_eq!(repo.accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_sign_up_rejects_bad_input() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    let err = sign_up(&repo, &config, "al", "alice@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    let err = sign_up(&repo, &config, "alice", "not-an-email", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    let err = sign_up(&repo, &config, "alice", "alice@example.com", "short")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::PasswordPolicy(_)));
}

// ============================================================================
// Sign in / session
// ============================================================================

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());

    // Unknown user
    let err = use_case
        .execute(
            SignInInput {
                username: "nobody".to_string(),
                password: "correct horse".to_string(),
            },
            test_client(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    // Wrong password
    let err = use_case
        .execute(
            SignInInput {
                username: "alice".to_string(),
                password: "wrong password".to_string(),
            },
            test_client(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_sign_in_creates_verifiable_session() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    let signed_up = sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = sign_in
        .execute(
            SignInInput {
                username: "alice".to_string(),
                password: "correct horse".to_string(),
            },
            test_client(),
        )
        .await
        .unwrap();

    assert_eq!(output.account_id, signed_up.account_id);

    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    let fingerprint = test_client().fingerprint();

    let info = check
        .execute(&output.session_token, &fingerprint)
        .await
        .unwrap();
    assert_eq!(info.account_id, signed_up.account_id);
}

#[tokio::test]
async fn test_session_rejects_tampered_token() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = sign_in
        .execute(
            SignInInput {
                username: "alice".to_string(),
                password: "correct horse".to_string(),
            },
            test_client(),
        )
        .await
        .unwrap();

    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    let fingerprint = test_client().fingerprint();

    // Flip the signature
    let mut tampered = output.session_token.clone();
    tampered.pop();
    tampered.push('A');
    assert!(!check.is_valid(&tampered, &fingerprint).await);

    // Malformed token
    assert!(!check.is_valid("garbage", &fingerprint).await);

    // Wrong fingerprint (different User-Agent)
    let other_client = ClientInfo {
        ip: None,
        user_agent: "другой агент".to_string(),
    };
    assert!(
        !check
            .is_valid(&output.session_token, &other_client.fingerprint())
            .await
    );
}

#[tokio::test]
async fn test_sign_out_invalidates_session() {
    let repo = Arc::new(MemAuthRepository::default());
    let config = test_config();

    sign_up(&repo, &config, "alice", "alice@example.com", "correct horse")
        .await
        .unwrap();

    let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = sign_in
        .execute(
            SignInInput {
                username: "alice".to_string(),
                password: "correct horse".to_string(),
            },
            test_client(),
        )
        .await
        .unwrap();

    let fingerprint = test_client().fingerprint();
    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    assert!(check.is_valid(&output.session_token, &fingerprint).await);

    let sign_out = SignOutUseCase::new(repo.clone(), config.clone());
    sign_out.execute(&output.session_token).await.unwrap();

    assert!(!check.is_valid(&output.session_token, &fingerprint).await);
}
