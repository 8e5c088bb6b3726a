/*!
 * WOPI request context extractor
 *
 * Responsibility:
 * - リクエスト毎に確立された token / permissions を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - Permission
 * - WopiContext
 * - WopiCtx
 */

mod core;
mod types;

pub use core::WopiCtx;
pub use types::{Permission, WopiContext};
