/*
 * Responsibility
 * - GET /whoami (Bearer 認証必須)
 * - middleware が抽出した AuthCtx をそのまま返す (認証の配線確認用)
 */
use axum::Json;

use crate::api::v1::{dto::whoami::WhoamiResponse, extractors::AuthCtxExtractor};

pub async fn whoami(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        client_id: ctx.client_id,
    })
}
