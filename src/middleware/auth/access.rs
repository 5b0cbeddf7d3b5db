//! Bearer 認証情報の抽出 → AuthCtx を extensions に入れる
//!
//! - 設定されたヘッダ (`AUTH_FIELD_NAME`, 既定は `Authorization`) から
//!   `Bearer <base64(id:secret)>` を取り出す
//! - 失敗時は 401 + `WWW-Authenticate: Bearer` (エラー種別は JSON body の code)
//! - secret の照合は行わない。handler / service 側の責務

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::try_extract_params_by_id;
use crate::state::AppState;

/// `/api/v1/*` に認証を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credential = match try_extract_params_by_id(&req, state.auth_field()) {
        Ok(credential) => credential,
        Err(err) => {
            // トークン自体はログに出さない
            tracing::warn!(
                code = err.code(),
                field = %state.auth_field(),
                "bearer credential extraction failed"
            );
            return Err(AppError::Unauthorized(err));
        }
    };

    tracing::debug!(client_id = %credential.id, "bearer credential accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(credential));

    Ok(next.run(req).await)
}
