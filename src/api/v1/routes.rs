/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health (公開) と /whoami (Bearer 必須) を merge
 * - Bearer が必要な範囲はここで access middleware を掛けて決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = access::apply(Router::new().route("/whoami", get(whoami)), state);

    public.merge(protected)
}
