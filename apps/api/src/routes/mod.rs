pub mod api;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_index).post(pages::handle_submit))
        .route("/frameworks", get(pages::handle_overview))
        // JSON API
        .route("/api/v1/frameworks", get(api::handle_frameworks))
        .route("/api/v1/validate", post(api::handle_validate))
        .route("/api/v1/recommend", post(api::handle_recommend))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::{api_error, ScriptedCompletion};

    const VALID: &str = r#"{"is_valid": true, "confidence": 0.9, "reason": "AI automation"}"#;
    const INVALID: &str = r#"{"is_valid": false, "confidence": 0.95, "reason": "Not an AI system"}"#;
    const RECOMMEND: &str = r#"Sure: {"recommended_framework": "CrewAI", "confidence_score": 0.7, "reasoning": "Roles", "alternative_options": ["AutoGen"]}"#;

    fn router_with(llm: Arc<ScriptedCompletion>) -> Router {
        build_router(AppState { llm })
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router_with(Arc::new(ScriptedCompletion::default()));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], health::SERVICE_NAME);
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_frameworks_endpoint() {
        let app = router_with(Arc::new(ScriptedCompletion::default()));
        let response = app
            .oneshot(Request::get("/api/v1/frameworks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["frameworks"].as_array().unwrap().len(), 4);
        assert_eq!(json["frameworks"][1]["name"], "LangGraph");
        assert_eq!(json["comparison"][0]["complexity"], "Low");
    }

    #[tokio::test]
    async fn test_recommend_happy_path() {
        let llm = Arc::new(ScriptedCompletion::replying(&[VALID, RECOMMEND]));
        let app = router_with(llm.clone());
        let response = app
            .oneshot(json_post(
                "/api/v1/recommend",
                r#"{"task_description": "Multi-agent system for data analysis", "coding_experience": "Yes"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["outcome"]["status"], "recommended");
        assert_eq!(json["outcome"]["recommendation"]["recommended_framework"], "CrewAI");
        assert_eq!(json["outcome"]["framework"]["name"], "CrewAI");
        assert!(json["submission_id"].is_string());
        assert_eq!(llm.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_recommend_rejected_is_ok() {
        let llm = Arc::new(ScriptedCompletion::replying(&[INVALID]));
        let app = router_with(llm.clone());
        let response = app
            .oneshot(json_post(
                "/api/v1/recommend",
                r#"{"task_description": "What's the weather today?"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["outcome"]["status"], "rejected");
        assert_eq!(json["outcome"]["validation"]["reason"], "Not an AI system");
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_recommend_blank_task_is_bad_request() {
        let llm = Arc::new(ScriptedCompletion::default());
        let app = router_with(llm.clone());
        let response = app
            .oneshot(json_post("/api/v1/recommend", r#"{"task_description": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_missing_task_field_is_json_bad_request() {
        for uri in ["/api/v1/recommend", "/api/v1/validate"] {
            let llm = Arc::new(ScriptedCompletion::default());
            let app = router_with(llm.clone());
            let response = app.oneshot(json_post(uri, "{}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let json = body_json(response).await;
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR", "{uri}");
            assert!(llm.prompts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_recommend_remote_failure_is_llm_error() {
        let llm = Arc::new(ScriptedCompletion::new(vec![
            Ok(VALID.to_string()),
            Err(api_error(500, "boom")),
        ]));
        let app = router_with(llm);
        let response = app
            .oneshot(json_post(
                "/api/v1/recommend",
                r#"{"task_description": "AI system for customer service automation"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_validate_degrades_on_remote_failure() {
        let llm = Arc::new(ScriptedCompletion::new(vec![Err(api_error(503, "down"))]));
        let app = router_with(llm);
        let response = app
            .oneshot(json_post(
                "/api/v1/validate",
                r#"{"task_description": "Personalized email generator"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["confidence"], 0.0);
    }

    #[tokio::test]
    async fn test_index_page_renders_form() {
        let app = router_with(Arc::new(ScriptedCompletion::default()));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<form method=\"post\" action=\"/\">"));
        assert!(html.contains("Framework Overview"));
    }

    #[tokio::test]
    async fn test_form_submit_renders_recommendation() {
        let llm = Arc::new(ScriptedCompletion::replying(&[VALID, RECOMMEND]));
        let app = router_with(llm.clone());
        let response = app
            .oneshot(form_post(
                "task_description=Personalized+email+generator&coding_experience=No",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Recommended Framework: <strong>CrewAI</strong>"));
        assert!(html.contains("value=\"No\" checked"));
        assert!(llm.prompts()[1].contains("User's Coding Experience: No"));
    }

    #[tokio::test]
    async fn test_form_submit_blank_shows_warning() {
        let llm = Arc::new(ScriptedCompletion::default());
        let app = router_with(llm.clone());
        let response = app
            .oneshot(form_post("task_description=&coding_experience=Yes"))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Please describe your AI automation task first!"));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_form_submit_unknown_experience_uses_yes() {
        let llm = Arc::new(ScriptedCompletion::replying(&[VALID, RECOMMEND]));
        let app = router_with(llm.clone());
        let response = app
            .oneshot(form_post(
                "task_description=Multi-agent+research+assistant&coding_experience=maybe",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("value=\"Yes\" checked"));
        assert!(llm.prompts()[1].contains("User's Coding Experience: Yes"));
    }

    #[tokio::test]
    async fn test_overview_page() {
        let app = router_with(Arc::new(ScriptedCompletion::default()));
        let response = app
            .oneshot(Request::get("/frameworks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("Quick Comparison"));
        assert!(html.contains("AutoGen"));
    }
}
