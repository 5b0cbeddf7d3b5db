/*
 * Responsibility
 * - Bearer 認証情報の抽出結果の型 (成功: Credential / 失敗: ExtractionError)
 * - エラーは閉じた enum。原因 (パーサの詳細など) は外へ出さない
 */
use std::fmt;

/// Client credential carried by a `Bearer` token.
///
/// The token is base64 of `id:secret`. Both halves are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: String,
    pub secret: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Failures of bearer credential extraction. Exactly one per failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ExtractionError {
    /// The header field is not present.
    #[error("no authentication header field")]
    NoAuthHttpField,

    /// The field value is not a valid authentication header value.
    #[error("authentication header field value can't be parsed")]
    IllegalHttpFieldValue,

    /// A scheme other than `Bearer` was used.
    #[error("authentication scheme is not Bearer")]
    NotBearerAuthScheme,

    /// `name=value` parameters were given instead of a single token.
    #[error("Bearer credentials must be a single token68 value")]
    InvalidBearerAuthParam,

    #[error("empty Bearer token")]
    EmptyToken,

    /// The token does not decode to an `id:secret` pair.
    #[error("Bearer token is not a base64 encoded id:secret pair")]
    InvalidIdSecretPair,

    #[error("empty id in id:secret pair")]
    EmptyId,

    #[error("empty secret in id:secret pair")]
    EmptySecret,
}

impl ExtractionError {
    /// Stable machine-readable name, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoAuthHttpField => "no_auth_http_field",
            Self::IllegalHttpFieldValue => "illegal_http_field_value",
            Self::NotBearerAuthScheme => "not_bearer_auth_scheme",
            Self::InvalidBearerAuthParam => "invalid_bearer_auth_param",
            Self::EmptyToken => "empty_token",
            Self::InvalidIdSecretPair => "invalid_id_secret_pair",
            Self::EmptyId => "empty_id",
            Self::EmptySecret => "empty_secret",
        }
    }

    /// Whether the request carried something that looked like credentials
    /// but was malformed (RFC 6750 `invalid_request`), as opposed to
    /// carrying no usable Bearer credentials at all.
    pub fn is_malformed_request(&self) -> bool {
        !matches!(self, Self::NoAuthHttpField | Self::NotBearerAuthScheme)
    }
}

pub type ExtractionResult = Result<Credential, ExtractionError>;
