/*
 * Responsibility
 * - WOPI response DTO の公開ポイント
 */
pub mod containers;
pub mod files;
