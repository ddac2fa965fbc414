/*
 * Responsibility
 * - Handler から見える「API key を提示したリクエスト」のコンテキスト型
 * - middleware が extract して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key が有効かどうかはここでは判断しない (形式だけ)
 */

use crate::services::auth::{ApiKey, api_key::SCHEME};

/// Context attached to requests that presented `Authorization: ApiKey <key>`.
///
/// - 生の key は持たない。handler と log は `fingerprint` だけを見る
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub scheme: &'static str,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: &ApiKey) -> Self {
        Self {
            scheme: SCHEME,
            fingerprint: key.fingerprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::auth::api_key::parse_authorization;

    use super::*;

    #[test]
    fn ctx_keeps_only_the_fingerprint() {
        let key = parse_authorization("ApiKey my-secret-api-key").unwrap();
        let ctx = ApiKeyCtx::new(&key);

        assert_eq!(ctx.scheme, "ApiKey");
        assert_eq!(ctx.fingerprint, key.fingerprint());
        assert!(!format!("{ctx:?}").contains("my-secret-api-key"));
    }
}
