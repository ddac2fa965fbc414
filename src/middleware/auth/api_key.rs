//! `Authorization: ApiKey <key>` の抽出 → ApiKeyCtx を extensions に入れる
//!
//! ここでは key の形式だけを見る。key が有効かどうか (DB 照合など) は扱わない。

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::extract_api_key;
use crate::state::AppState;

/// API key が必要な route に middleware を適用する。
///
/// `route_layer` なので、match しなかった path は 401 ではなく 404 になる。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match extract_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                method = %req.method(),
                path = req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(&key);
    tracing::debug!(fingerprint = %ctx.fingerprint, "api key presented");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
