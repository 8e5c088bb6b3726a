/*
 * Responsibility
 * - api 層の公開ポイント
 */
pub mod wopi;
