pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/tasks", get(handlers::handle_list_tasks))
        .route("/api/v1/tasks/:task_id", post(handlers::handle_run_task))
        .route(
            "/api/v1/tasks/:task_id/prompt",
            post(handlers::handle_preview_prompt),
        )
        // Scoring API
        .route("/api/v1/ats-score", post(handlers::handle_ats_score))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::generation::gateway::stub::StubGenerator;

    fn test_state(generator: Arc<StubGenerator>) -> AppState {
        AppState { generator }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn resume_fields() -> Value {
        json!({
            "fields": {
                "name": "Jane Doe",
                "title": "Engineer",
                "skills": "Go, SQL",
                "experience": "5 years backend work",
                "length": "Standard"
            }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let (status, body) = send(router, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careerkit-api");
    }

    #[tokio::test]
    async fn test_catalog_lists_all_tasks() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let (status, body) =
            send(router, Request::get("/api/v1/tasks").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let tasks = body["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 20);
        let resume = tasks.iter().find(|t| t["id"] == "resume-summary").unwrap();
        let length = resume["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == "length")
            .unwrap();
        assert_eq!(length["required"], false);
        assert_eq!(length["default"], "Concise");
        assert_eq!(length["choices"], json!(["Concise", "Standard", "Detailed"]));
    }

    #[tokio::test]
    async fn test_run_task_returns_content() {
        let generator = Arc::new(StubGenerator::text("Seasoned backend engineer."));
        let router = build_router(test_state(generator.clone()));
        let (status, body) = send(router, post_json("/api/v1/tasks/resume-summary", resume_fields())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"], "resume-summary");
        assert_eq!(body["status"], "content");
        assert_eq!(body["text"], "Seasoned backend engineer.");
        assert!(body.get("failure_kind").is_none());

        let sent = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(sent.contains("Jane Doe"));
        assert!(sent.contains("(5-8 sentences)"));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_run_task_provider_error_is_200_failure() {
        let generator = Arc::new(StubGenerator::api_error(429, "quota exceeded"));
        let router = build_router(test_state(generator));
        let (status, body) = send(router, post_json("/api/v1/tasks/resume-summary", resume_fields())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "failure");
        assert_eq!(body["failure_kind"], "provider");
        let text = body["text"].as_str().unwrap();
        assert!(text.starts_with("VMD AI encountered an error"));
        assert!(text.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_run_task_empty_reply_is_advisory() {
        let router = build_router(test_state(Arc::new(StubGenerator::text(""))));
        let (status, body) = send(router, post_json("/api/v1/tasks/resume-summary", resume_fields())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "advisory");
        assert!(body["text"].as_str().unwrap().contains("Please try refining your input"));
    }

    #[tokio::test]
    async fn test_blank_required_field_is_rejected_before_dispatch() {
        let generator = Arc::new(StubGenerator::text("unused"));
        let router = build_router(test_state(generator.clone()));
        let body = json!({"fields": {"name": "Jane", "title": " ", "skills": "Go", "experience": "5y"}});
        let (status, body) = send(router, post_json("/api/v1/tasks/resume-summary", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_task_is_404() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let (status, body) = send(router, post_json("/api/v1/tasks/horoscope", json!({"fields": {}}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_analysis_type_short_circuits() {
        let generator = Arc::new(StubGenerator::text("unused"));
        let router = build_router(test_state(generator.clone()));
        let body = json!({"fields": {"jd_content": "We need SREs", "analysis_type": "Salary Vibes"}});
        let (status, body) = send(router, post_json("/api/v1/tasks/analyze-job-description", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "failure");
        assert_eq!(body["failure_kind"], "invalid_request");
        assert_eq!(body["text"], "Invalid analysis type specified for job description.");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_preview_does_not_call_model() {
        let generator = Arc::new(StubGenerator::text("unused"));
        let router = build_router(test_state(generator.clone()));
        let body = json!({"fields": {
            "jd_content": "Kubernetes, Terraform",
            "analysis_type": "Skill Gap Analysis",
            "user_skills": "Docker"
        }});
        let (status, body) =
            send(router, post_json("/api/v1/tasks/analyze-job-description/prompt", body)).await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("Kubernetes, Terraform"));
        assert!(prompt.contains("Docker"));
        assert!(body.get("rejected").is_none());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_preview_reports_rejection() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let body = json!({"fields": {"jd_content": "JD", "analysis_type": "nope"}});
        let (status, body) =
            send(router, post_json("/api/v1/tasks/analyze-job-description/prompt", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rejected"], "Invalid analysis type specified for job description.");
        assert!(body.get("prompt").is_none());
    }

    #[tokio::test]
    async fn test_ats_score_endpoint() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let body = json!({"user_skills": "Rust, Go", "job_keywords": "rust, go, kafka, aws"});
        let (status, body) = send(router, post_json("/api/v1/ats-score", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50.0);
        assert_eq!(body["band"], "good");
        assert_eq!(body["matched_keywords"], json!(["go", "rust"]));
    }

    #[tokio::test]
    async fn test_ats_score_blank_is_400() {
        let router = build_router(test_state(Arc::new(StubGenerator::text("x"))));
        let body = json!({"user_skills": "", "job_keywords": "rust"});
        let (status, _) = send(router, post_json("/api/v1/ats-score", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
