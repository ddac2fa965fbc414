/*
 * Responsibility
 * - HTTP から切り離した domain ロジック
 * - axum の extractor / middleware からはこの層を呼ぶ
 */
pub mod auth;
