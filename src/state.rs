/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: 認証情報を読むヘッダ名
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use axum::http::HeaderName;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    auth_field: HeaderName,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                auth_field: config.auth_field.clone(),
            }),
        }
    }

    pub fn auth_field(&self) -> &HeaderName {
        &self.inner.auth_field
    }
}
