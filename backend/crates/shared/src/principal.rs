//! Authenticated Principal
//!
//! 認証済みアカウントを表す最小限の値。セッション検証ミドルウェアが
//! リクエスト拡張として挿入し、下流のハンドラが参照します。
//!
//! エンティティ型に認証能力を混ぜないこと。

use uuid::Uuid;

/// The authenticated account behind the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAccount {
    pub account_id: Uuid,
}
