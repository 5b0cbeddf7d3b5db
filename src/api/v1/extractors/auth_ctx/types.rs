/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が Bearer 認証情報を抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - ヘッダのパースや id:secret の検証は middleware/services 側の責務
 * - secret の照合 (本当に正しいか) はここでは扱わない
 */
use std::fmt;

use crate::services::auth::Credential;

/// 認証情報付きのリクエストに付与されるコンテキスト
///
/// - `client_id` は Bearer トークンから取り出した id
/// - `client_secret` は同じく secret (ログには出さない)
#[derive(Clone)]
pub struct AuthCtx {
    pub client_id: String,
    pub client_secret: String,
}

impl AuthCtx {
    pub fn new(credential: Credential) -> Self {
        Self {
            client_id: credential.id,
            client_secret: credential.secret,
        }
    }
}

impl fmt::Debug for AuthCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCtx")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
