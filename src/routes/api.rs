use crate::{config::Config, docs::ApiDoc, handlers::{dashboard_summary, health_check, search}};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use super::cors::cors_layer;

/// Create the full application router
pub fn create_routes(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/dashboard/summary", get(dashboard_summary))
        .route("/search", get(search))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt; // for `collect`
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send_get(uri: &str) -> Response {
        create_routes(&Config::default())
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = send_get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_dashboard_summary() {
        let response = send_get("/dashboard/summary").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "ok": true,
                "payload": {
                    "actionRequired": 3,
                    "bills": 2,
                    "subscriptions": 5,
                    "top": [
                        { "id": "msg1", "subject": "Invoice #123 due", "kind": "bill" },
                        { "id": "msg2", "subject": "Reminder: reply to Alex", "kind": "action" },
                        { "id": "msg3", "subject": "Spotify subscription renewed", "kind": "subscription" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_search() {
        let response = send_get("/search?q=foo").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["query"], json!("foo"));
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        for r in results {
            assert!(r["subject"].as_str().unwrap().contains("foo"));
        }
    }

    #[tokio::test]
    async fn test_search_decodes_query() {
        let body = body_json(send_get("/search?q=acme%20invoice").await).await;
        assert_eq!(body["query"], json!("acme invoice"));
        assert_eq!(body["results"][0]["subject"], json!("Results for: acme invoice — invoice from ACME"));
    }

    #[tokio::test]
    async fn test_search_repeated_query() {
        let response = send_get("/search?q=a&q=b").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["query"], json!("b"));
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_ignores_other_params() {
        let body = body_json(send_get("/search?x=1&q=foo").await).await;
        assert_eq!(body["query"], json!("foo"));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        for uri in ["/search", "/search?q=", "/search?q", "/search?x=foo", "/search?q=a&q="] {
            let response = send_get(uri).await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["code"], json!(422));
            assert!(body["error"].as_str().unwrap().contains("'q'"));
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = create_routes(&Config::default())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "chrome-extension://abcdef")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = create_routes(&Config::default())
            .oneshot(
                Request::builder()
                    .uri("/search?q=foo")
                    .method(Method::OPTIONS)
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn test_cors_restricted_origins() {
        let config = Config {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Config::default()
        };
        let response = create_routes(&config)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://evil.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_openapi_served() {
        let response = send_get("/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["paths"]["/search"].is_object());
    }
}
