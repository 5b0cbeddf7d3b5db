/*!
 * `Authorization` 系ヘッダの汎用パーサ
 *
 * Responsibility:
 * - `scheme token68` / `scheme name=value, ...` を型付きの値に分解する
 * - scheme ごとの意味付け (Bearer など) はここでは行わない
 */

mod core;
mod types;

pub use types::{AuthParam, AuthParamPair, AuthorizationValue, ParseError, Token68};
