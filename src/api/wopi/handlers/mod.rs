/*
 * Responsibility
 * - WOPI handler の公開ポイント
 */
pub mod containers;
pub mod files;
pub mod health;
