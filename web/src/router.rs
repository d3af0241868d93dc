use crate::{sse::handler::random_coord_handler, AppState};
use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(coordinate_routes(app_state))
        .layer(cors_layer())
}

fn coordinate_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/random-coord", get(random_coord_handler))
        .with_state(app_state)
}

// Any origin may read the stream. Methods and headers are the usual simple
// request set; credentials are never allowed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use service::config::Config;
    use tower::ServiceExt;

    fn app() -> Router {
        define_routes(AppState::new(Config::default()))
    }

    #[tokio::test]
    async fn random_coord_route_opens_event_stream() {
        let request = Request::builder()
            .uri("/random-coord")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/coords")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn random_coord_rejects_other_methods() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/random-coord")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn any_origin_is_allowed() {
        let request = Request::builder()
            .uri("/random-coord")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn preflight_lists_allowed_methods() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/random-coord")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        for method in ["GET", "POST", "HEAD"] {
            assert!(methods.contains(method), "{method} missing from {methods}");
        }
    }
}
