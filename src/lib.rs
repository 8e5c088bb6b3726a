/*
 * Responsibility
 * - クレートの公開ポイント (module 宣言のみ、ロジックは置かない)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
