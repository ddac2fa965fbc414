/*
 * Responsibility
 * - GET /api/v1/whoami
 * - 提示された API key の scheme と fingerprint を返す (key そのものは返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        scheme: ctx.scheme,
        fingerprint: ctx.fingerprint,
    })
}
