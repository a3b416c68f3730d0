use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::conversations::handlers;
use crate::features::conversations::services::ConversationService;

/// Create routes for the conversations feature
pub fn routes(service: Arc<ConversationService>) -> Router {
    Router::new()
        .route(
            "/api/conversations",
            post(handlers::start_conversation)
                .get(handlers::get_conversation)
                .delete(handlers::cancel_conversation),
        )
        .route("/api/conversations/courier", post(handlers::choose_courier))
        .route("/api/conversations/cod", post(handlers::choose_cod))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::features::sessions::SessionStore;
    use crate::shared::test_helpers::{sample_directory, StaticLabelGenerator};

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-user-id", "42");
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn store_with_selection() -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new(Duration::from_secs(300)));
        store.save_results("42", sample_directory().search("kode_pos:23773")).await;
        store.select_result("42", 1).await.unwrap();
        store
    }

    async fn app_at_courier_step() -> Router {
        let service = Arc::new(ConversationService::new(
            store_with_selection().await,
            Arc::new(StaticLabelGenerator),
        ));
        service.start("42").await.unwrap();
        for answer in ["Budi", "081234567890", "Jl. Merdeka No. 10"] {
            service.handle_text("42", answer).await.unwrap();
        }

        routes(service)
    }

    #[tokio::test]
    async fn test_start_without_selection_is_gone() {
        let service = Arc::new(ConversationService::new(
            Arc::new(SessionStore::new(Duration::from_secs(300))),
            Arc::new(StaticLabelGenerator),
        ));
        let app = routes(service);

        let response = app
            .clone()
            .oneshot(request("POST", "/api/conversations", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(body_json(response).await["message"], "Sesi telah berakhir");

        let response = app
            .oneshot(request("GET", "/api/conversations", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["step"], "idle");
    }

    #[tokio::test]
    async fn test_start_and_status() {
        let service = Arc::new(ConversationService::new(
            store_with_selection().await,
            Arc::new(StaticLabelGenerator),
        ));
        let app = routes(service);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/conversations", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["step"], "idle");

        let response = app
            .clone()
            .oneshot(request("POST", "/api/conversations", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["step"], "name");
        assert_eq!(body["data"]["prompt"], "Masukkan nama penerima:");

        let response = app
            .clone()
            .oneshot(request("DELETE", "/api/conversations", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("DELETE", "/api/conversations", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GONE);
    }

    #[tokio::test]
    async fn test_courier_and_cod_complete_label() {
        let app = app_at_courier_step().await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/conversations/courier",
                Some(json!({"courier": "JNE"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["step"], "cod");

        let response = app
            .oneshot(request(
                "POST",
                "/api/conversations/cod",
                Some(json!({"cod": true})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["step"], "idle");
        assert_eq!(body["data"]["shipment"]["courier"], "JNE");
        assert_eq!(body["data"]["shipment"]["postal_code"], "23773");
        assert_eq!(
            body["data"]["shipment"]["full_address"],
            "Jl. Merdeka No. 10, Keude Bakongan, Bakongan, Aceh Selatan, Aceh"
        );
        assert!(body["data"]["label"]["file_name"]
            .as_str()
            .unwrap()
            .starts_with("resi_Budi_"));
    }

    #[tokio::test]
    async fn test_unknown_courier_and_out_of_order_cod() {
        let app = app_at_courier_step().await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/conversations/courier",
                Some(json!({"courier": "Pos"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(request(
                "POST",
                "/api/conversations/cod",
                Some(json!({"cod": false})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
