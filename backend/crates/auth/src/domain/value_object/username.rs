//! Username Value Object
//!
//! ユーザー名は、アカウントを識別するための**公開識別子（ハンドル）**。
//! ログイン、画面表示、主催者名の表示に使用される。
//!
//! ## 設計方針
//! - ASCII文字のみ許可（a-z, 0-9, _ . - +）
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 先頭・末尾: 英数字または `_`
//! - 連続ドット禁止（`..`）
//! - 英数字を最低1文字含む（記号のみ禁止）
//! - 空白禁止

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for a username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in a username
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Reserved words that cannot be used as usernames
///
/// Mostly routing and operational terms.
const RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "support",
    "api",
    "auth",
    "login",
    "logout",
    "signin",
    "signout",
    "signup",
    "account",
    "accounts",
    "dashboard",
    "competition",
    "competitions",
    "contest",
    "contests",
    "me",
    "null",
    "anonymous",
    "guest",
];

// ============================================================================
// Error Type
// ============================================================================

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username must be between {} and {} characters", USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH)]
    InvalidLength,

    #[error("Username may only contain letters, digits, and _ . - +")]
    InvalidCharacter,

    #[error("Username must start and end with a letter, digit, or underscore")]
    InvalidBoundary,

    #[error("Username must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("Username must not contain consecutive dots")]
    ConsecutiveDots,

    #[error("This username is reserved")]
    Reserved,
}

// ============================================================================
// Username
// ============================================================================

/// Validated username
///
/// Keeps the original casing for display; lookups use the canonical
/// (lowercase) form so usernames are case-insensitively unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username {
    original: String,
    canonical: String,
}

impl Username {
    /// Create a new username with validation
    ///
    /// Input is NFKC-normalized before validation; the canonical form
    /// is the lowercased normalized input.
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let normalized: String = raw.into().nfkc().collect();
        let normalized = normalized.trim().to_string();

        let char_count = normalized.chars().count();
        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&char_count) {
            return Err(UsernameError::InvalidLength);
        }

        for ch in normalized.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(UsernameError::InvalidCharacter);
            }
        }

        let first = normalized.chars().next().unwrap();
        let last = normalized.chars().last().unwrap();
        let boundary_ok = |c: char| c.is_ascii_alphanumeric() || c == '_';
        if !boundary_ok(first) || !boundary_ok(last) {
            return Err(UsernameError::InvalidBoundary);
        }

        if !normalized.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UsernameError::NoAlphanumeric);
        }

        if normalized.contains("..") {
            return Err(UsernameError::ConsecutiveDots);
        }

        let canonical = normalized.to_lowercase();

        if RESERVED_WORDS.contains(&canonical.as_str()) {
            return Err(UsernameError::Reserved);
        }

        Ok(Self {
            original: normalized,
            canonical,
        })
    }

    /// The username as entered (original casing)
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The canonical (lowercase) form used for uniqueness and lookup
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
