/*
 * Responsibility
 * - GET /health (疎通用, 認証なし)
 * - どのヘッダで Bearer を受け付けているかも返す (クライアント設定の確認用)
 */
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "auth_field": state.auth_field().as_str(),
    }))
}
