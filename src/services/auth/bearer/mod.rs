/*!
 * Bearer 認証情報の抽出
 *
 * Responsibility:
 * - 指定ヘッダから `Bearer <base64(id:secret)>` を取り出し、構文だけを検証する
 * - トークンの真正性 (署名・失効・ID 照合) は扱わない
 *
 * Public API:
 * - try_extract_params / try_extract_params_by_id
 * - Credential / ExtractionError / ExtractionResult
 */

mod core;
mod types;

pub use core::{try_extract_params, try_extract_params_by_id};
pub use types::{Credential, ExtractionError, ExtractionResult};
