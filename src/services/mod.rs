/*
 * Responsibility
 * - service 層の公開ポイント (re-export など)
 */
pub mod convert;
pub mod identity;
pub mod security;
pub mod url_builder;
