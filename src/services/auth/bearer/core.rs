//! Bearer credential extraction - core logic.
//!
//! Pipeline: field lookup → generic auth value parse → scheme check →
//! token68 check → `id:secret` decode. Every stage maps its failure to exactly
//! one `ExtractionError`; nothing is logged here, callers decide what to log.

use axum::http::HeaderName;
use base64::Engine as _;

use super::types::{Credential, ExtractionError, ExtractionResult};
use crate::services::auth::authorization::{AuthParam, AuthorizationValue};
use crate::services::auth::header_lookup::HeaderLookup;

const BEARER_SCHEME: &str = "Bearer";

/// Extract bearer credentials from a field given by name, e.g.
/// `"X-My-Authorization"`. The name is matched case-insensitively.
pub fn try_extract_params<H>(headers: &H, auth_field_name: &str) -> ExtractionResult
where
    H: HeaderLookup + ?Sized,
{
    perform_extraction_attempt(headers.value_by_name(auth_field_name))
}

/// Extract bearer credentials from a field given by identifier, e.g.
/// `header::AUTHORIZATION`.
pub fn try_extract_params_by_id<H>(headers: &H, auth_field_id: &HeaderName) -> ExtractionResult
where
    H: HeaderLookup + ?Sized,
{
    perform_extraction_attempt(headers.value_by_id(auth_field_id))
}

fn perform_extraction_attempt(opt_field_value: Option<&[u8]>) -> ExtractionResult {
    let raw = opt_field_value.ok_or(ExtractionError::NoAuthHttpField)?;

    let field_value = field_value_as_str(raw).ok_or(ExtractionError::IllegalHttpFieldValue)?;
    let parsed = AuthorizationValue::try_parse(field_value)
        .map_err(|_| ExtractionError::IllegalHttpFieldValue)?;

    // exact match: callers wanting case-insensitive schemes normalize upstream
    if parsed.auth_scheme != BEARER_SCHEME {
        return Err(ExtractionError::NotBearerAuthScheme);
    }

    let token = match &parsed.auth_param {
        AuthParam::Token68(t) => t.value.as_str(),
        // `Bearer` with nothing after it
        AuthParam::ParamList(list) if list.is_empty() => "",
        AuthParam::ParamList(_) => return Err(ExtractionError::InvalidBearerAuthParam),
    };

    decode_id_secret(token)
}

/// Same rule `HeaderValue::to_str` applies: visible ASCII, SP and HTAB only.
fn field_value_as_str(raw: &[u8]) -> Option<&str> {
    if raw.iter().all(|&b| b == b'\t' || (0x20..0x7f).contains(&b)) {
        std::str::from_utf8(raw).ok()
    } else {
        None
    }
}

fn decode_id_secret(token: &str) -> ExtractionResult {
    if token.is_empty() {
        return Err(ExtractionError::EmptyToken);
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(token)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or(ExtractionError::InvalidIdSecretPair)?;

    let (id, secret) = decoded
        .split_once(':')
        .ok_or(ExtractionError::InvalidIdSecretPair)?;

    if id.is_empty() {
        return Err(ExtractionError::EmptyId);
    }
    if secret.is_empty() {
        return Err(ExtractionError::EmptySecret);
    }

    Ok(Credential {
        id: id.to_owned(),
        secret: secret.to_owned(),
    })
}
