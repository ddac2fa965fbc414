/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::api_key::apply (v1 の一部 route), http::apply (全体)
 */
pub mod auth;
pub mod http;
