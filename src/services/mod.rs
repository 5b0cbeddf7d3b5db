/*
 * Responsibility
 * - HTTP / axum の配線から切り離したドメインロジック
 */
pub mod auth;
