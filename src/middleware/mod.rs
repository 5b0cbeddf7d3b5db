/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth: Bearer 認証情報の抽出 / http: request-id, trace, limit, timeout
 */
pub mod auth;
pub mod http;
