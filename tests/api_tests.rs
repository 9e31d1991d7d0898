use serde_json::{json, Value};
use tempfile::TempDir;
use warp::http::StatusCode;
use kod_gozcusu::config::constants::SERVICE_NAME;
use kod_gozcusu::server::api_server::routes;
use kod_gozcusu::server::app_context::AppContext;
use kod_gozcusu::services::analysis_gateway::AnalysisGateway;
use kod_gozcusu::services::record_store::RecordStore;
use kod_gozcusu::structs::config::server_config::ServerConfig;
use crate::common::{gateway_returning, gateway_with, gateway_without_key, temp_store, MockProvider};

struct TestApp {
    _dir: TempDir,
    store: RecordStore,
    context: AppContext,
    config: ServerConfig,
}

fn app_with(gateway: AnalysisGateway) -> TestApp {
    let (dir, store) = temp_store();

    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&static_dir).expect("create static dir");
    std::fs::write(static_dir.join("index.html"), "<!DOCTYPE html><html><body>Kod</body></html>")
        .expect("write index.html");

    let config = ServerConfig {
        static_dir: static_dir.display().to_string(),
        max_body_bytes: 64 * 1024,
        ..ServerConfig::default()
    };

    TestApp {
        _dir: dir,
        context: AppContext::new(store.clone(), gateway),
        store,
        config,
    }
}

impl TestApp {
    async fn reply(&self, request: warp::test::RequestBuilder) -> warp::http::Response<warp::hyper::body::Bytes> {
        let filter = routes(self.context.clone(), &self.config);
        request.reply(&filter).await
    }

    async fn send(&self, request: warp::test::RequestBuilder) -> (StatusCode, Value) {
        let response = self.reply(request).await;
        let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
        (response.status(), body)
    }

    async fn analyze(&self, code: &str) -> (StatusCode, Value) {
        self.send(
            warp::test::request()
                .method("POST")
                .path("/api/analyze")
                .json(&json!({ "code": code })),
        )
        .await
    }
}

#[tokio::test]
async fn blank_code_is_rejected_with_400() {
    let app = app_with(gateway_returning("unused"));

    for code in ["", "   \n\t  "] {
        let (status, body) = app.analyze(code).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("empty"));
    }

    assert!(app.store.list_recent(20).unwrap().is_empty());
}

#[tokio::test]
async fn analysis_is_returned_and_persisted() {
    let app = app_with(gateway_returning("1. Errors and Bugs: None detected"));

    let (status, body) = app.analyze("print('Hello World')").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"], "1. Errors and Bugs: None detected");

    let records = app.store.list_recent(1).unwrap();
    assert_eq!(records[0].original_code, "print('Hello World')");
    assert_eq!(records[0].analysis_result, "1. Errors and Bugs: None detected");
}

#[tokio::test]
async fn missing_key_still_answers_200_with_a_notice() {
    let app = app_with(gateway_without_key());

    let (status, body) = app.analyze("print('test')").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis"].as_str().unwrap().to_lowercase().contains("api key"));
    assert_eq!(app.store.list_recent(1).unwrap().len(), 1);
}

#[tokio::test]
async fn upstream_failure_still_answers_200_with_the_error() {
    let mut provider = MockProvider::new();
    provider.expect_generate().returning(|_| {
        Err(kod_gozcusu::enums::ai_provider_error::AiProviderError::ApiError(
            "Simulated failure".to_string(),
        ))
    });
    let app = app_with(gateway_with(provider));

    let (status, body) = app.analyze("print('test')").await;

    assert_eq!(status, StatusCode::OK);
    let analysis = body["analysis"].as_str().unwrap();
    assert!(analysis.contains("error"));
    assert!(analysis.contains("Simulated failure"));
}

#[tokio::test]
async fn large_code_is_accepted() {
    let app = app_with(gateway_returning("Large code analysis complete"));

    let (status, _) = app.analyze(&"print('Hello')\n".repeat(1000)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    let app = app_with(gateway_returning("unused"));

    let (status, body) = app.analyze(&"x".repeat(128 * 1024)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn malformed_json_is_rejected_with_422() {
    let app = app_with(gateway_returning("unused"));

    let (status, body) = app
        .send(
            warp::test::request()
                .method("POST")
                .path("/api/analyze")
                .header("content-type", "application/json")
                .body("invalid json"),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = app
        .send(
            warp::test::request()
                .method("POST")
                .path("/api/analyze")
                .json(&json!({ "source": "print(1)" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn history_lists_newest_first_and_caps_at_twenty() {
    let app = app_with(gateway_returning("unused"));
    for i in 0..22 {
        app.store.create(&format!("print({i})"), &format!("result {i}")).unwrap();
    }

    let (status, body) = app
        .send(warp::test::request().method("GET").path("/api/history"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["original_code"], "print(21)");
    assert_eq!(items[0]["analysis_result"], "result 21");
    for item in items {
        for field in ["id", "timestamp", "original_code", "analysis_result"] {
            assert!(item.get(field).is_some(), "missing {field}");
        }
    }
    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[tokio::test]
async fn deleting_one_record_then_again_gives_404() {
    let app = app_with(gateway_returning("unused"));
    let id = app.store.create("print(1)", "ok").unwrap();
    let path = format!("/api/history/{id}");

    let (status, body) = app
        .send(warp::test::request().method("DELETE").path(&path))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Analysis deleted successfully");

    let (status, body) = app
        .send(warp::test::request().method("DELETE").path(&path))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Analysis not found");
}

#[tokio::test]
async fn deleting_all_reports_the_count() {
    let app = app_with(gateway_returning("unused"));
    for _ in 0..3 {
        app.store.create("x", "y").unwrap();
    }

    let (status, body) = app
        .send(warp::test::request().method("DELETE").path("/api/history"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "3 analyses deleted successfully");
    assert!(app.store.list_recent(20).unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_service_name() {
    let app = app_with(gateway_without_key());

    let (status, body) = app
        .send(warp::test::request().method("GET").path("/health"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], SERVICE_NAME);
}

#[tokio::test]
async fn root_serves_the_landing_page() {
    let app = app_with(gateway_without_key());

    let response = app
        .reply(warp::test::request().method("GET").path("/"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.contains("html"));
}

#[tokio::test]
async fn unknown_routes_and_methods_are_rejected() {
    let app = app_with(gateway_without_key());

    let (status, body) = app
        .send(warp::test::request().method("GET").path("/api/unknown"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");

    let (status, _) = app
        .send(warp::test::request().method("PUT").path("/api/history"))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn store_failure_surfaces_as_500_with_detail() {
    let dir = tempfile::tempdir().unwrap();
    // never initialized, so the table does not exist
    let store = RecordStore::new(dir.path().join("missing-table.sqlite3"));
    let filter = routes(
        AppContext::new(store, gateway_returning("ok")),
        &ServerConfig::default(),
    );

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({ "code": "print(1)" }))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("An error occurred during analysis"));
    assert!(detail.contains("no such table"));

    let response = warp::test::request()
        .method("GET")
        .path("/api/history")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
