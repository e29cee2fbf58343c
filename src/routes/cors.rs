use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;
use crate::config::Config;

/// CORS policy for the extension and local web origins.
///
/// Any method and header is allowed; credentials never are.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins = match config.allowed_origins() {
        None => AllowOrigin::any(),
        Some(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
