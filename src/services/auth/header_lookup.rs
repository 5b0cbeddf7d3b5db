/*
 * Responsibility
 * - 「フィールド名 / HeaderName → 生の値」を引くだけの薄い抽象
 * - 値の検証はしない (存在しない = None)
 * - HeaderMap / Request / request::Parts のどれからでも引けるようにする
 */
use axum::http::{HeaderMap, HeaderName, Request, request::Parts};

/// Read-only access to the raw value of one header field.
pub trait HeaderLookup {
    /// Lookup by field name. Matching is case-insensitive; a name that is not
    /// a valid header name finds nothing.
    fn value_by_name(&self, name: &str) -> Option<&[u8]>;

    /// Lookup by a well-known field identifier such as `header::AUTHORIZATION`.
    fn value_by_id(&self, id: &HeaderName) -> Option<&[u8]>;
}

impl HeaderLookup for HeaderMap {
    fn value_by_name(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }

    fn value_by_id(&self, id: &HeaderName) -> Option<&[u8]> {
        self.get(id).map(|v| v.as_bytes())
    }
}

impl<B> HeaderLookup for Request<B> {
    fn value_by_name(&self, name: &str) -> Option<&[u8]> {
        self.headers().value_by_name(name)
    }

    fn value_by_id(&self, id: &HeaderName) -> Option<&[u8]> {
        self.headers().value_by_id(id)
    }
}

impl HeaderLookup for Parts {
    fn value_by_name(&self, name: &str) -> Option<&[u8]> {
        self.headers.value_by_name(name)
    }

    fn value_by_id(&self, id: &HeaderName) -> Option<&[u8]> {
        self.headers.value_by_id(id)
    }
}
