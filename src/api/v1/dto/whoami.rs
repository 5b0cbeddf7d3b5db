use serde::Serialize;

/// GET /api/v1/whoami の応答。secret は返さない。
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub client_id: String,
}
