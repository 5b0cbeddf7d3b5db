/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 認証情報の抽出エラー / 設定エラーを統一的に変換
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::ExtractionError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("unauthorized: {0}")]
    Unauthorized(#[source] ExtractionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        AppError::Unauthorized(e)
    }
}

/// RFC 6750 §3: challenge sent back with every 401.
fn bearer_challenge(e: ExtractionError) -> HeaderValue {
    if e.is_malformed_request() {
        HeaderValue::from_static("Bearer error=\"invalid_request\"")
    } else {
        HeaderValue::from_static("Bearer")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{resource} not found."),
            ),
            AppError::Unauthorized(e) => (StatusCode::UNAUTHORIZED, e.code(), e.to_string()),
            // Details stay in the logs, not in the response.
            AppError::Config(_) | AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        if let AppError::Unauthorized(e) = self {
            res.headers_mut()
                .insert(header::WWW_AUTHENTICATE, bearer_challenge(e));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt as _;
    use serde_json::Value;

    async fn body_json(res: Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unauthorized_response() {
        let res = AppError::from(ExtractionError::EmptySecret).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer error=\"invalid_request\""
        );

        let json = body_json(res).await;
        assert_eq!(json["error"]["code"], "empty_secret");
        assert_eq!(json["error"]["message"], "empty secret in id:secret pair");
    }

    #[tokio::test]
    async fn test_missing_credentials_gets_plain_challenge() {
        for e in [
            ExtractionError::NoAuthHttpField,
            ExtractionError::NotBearerAuthScheme,
        ] {
            let res = AppError::Unauthorized(e).into_response();
            assert_eq!(res.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        }
    }

    #[tokio::test]
    async fn test_config_error_is_opaque() {
        let res = AppError::from(ConfigError::Invalid("PORT")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());

        let json = body_json(res).await;
        assert_eq!(json["error"]["message"], "internal server error");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Unauthorized(ExtractionError::NotBearerAuthScheme).to_string(),
            "unauthorized: authentication scheme is not Bearer"
        );
        assert_eq!(AppError::not_found("route").to_string(), "not found: route");
    }
}
