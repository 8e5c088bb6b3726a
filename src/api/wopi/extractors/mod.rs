/*
 * Responsibility
 * - extractor の公開ポイント (re-export)
 */
mod wopi_ctx;
mod wopi_user;

pub use wopi_ctx::{Permission, WopiContext, WopiCtx};
pub use wopi_user::WopiUser;
