//! One-time User Notices
//!
//! 状態を変更する操作の結果をユーザーに伝えるための分類です。
//! プレゼンテーション層はこれをそのまま描画し、再送信では消えます。
//!
//! 想定外の失敗はここではなく `error::app_error` 側の分類を使うこと。

use serde::Serialize;
use std::borrow::Cow;

/// Notice severity, mirrored by the presentation layer's styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Operation succeeded
    Success,
    /// Expected user error (wrong input, duplicate action)
    Danger,
    /// Neutral information (e.g. "you were not enrolled")
    Info,
}

impl NoticeLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Danger => "danger",
            NoticeLevel::Info => "info",
        }
    }
}

/// A short-lived, user-visible outcome message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: Cow<'static, str>,
}

impl Notice {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}
