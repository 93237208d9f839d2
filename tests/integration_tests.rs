// tests/integration_tests.rs
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use colab_relay::api::{configure_routes, static_files, AppState};
use colab_relay::config::AppConfig;

/// Backend address nothing listens on, so connections are refused fast.
const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

fn test_state() -> AppState {
    state_for(UNREACHABLE_BACKEND.to_string())
}

fn state_for(backend_url: String) -> AppState {
    AppState::new(AppConfig {
        backend_url,
        port: 5000,
    })
}

/// Minimal mock backend: answers the first connection with a canned
/// HTTP response and closes. Returns the base URL to point the relay at.
fn spawn_one_shot_backend(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[actix_web::test]
async fn test_health_reports_disconnected_backend() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend_connected"], false);
    assert_eq!(body["backend_url"], UNREACHABLE_BACKEND);
}

#[actix_web::test]
async fn test_generate_success_echoes_seed() {
    let backend_url = spawn_one_shot_backend("200 OK", r#"{"image":"abc123"}"#);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(backend_url)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "prompt": "a red fox", "seed": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": true, "image": "abc123", "seed": 42 })
    );
}

#[actix_web::test]
async fn test_generate_backend_non_200_maps_to_500() {
    let backend_url = spawn_one_shot_backend("503 Service Unavailable", "{}");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(backend_url)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "prompt": "a red fox" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Backend error: 503");
}

#[actix_web::test]
async fn test_generate_malformed_body_returns_json_failure() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_generate_unreachable_backend_returns_503() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "prompt": "a red fox", "seed": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Cannot connect to Colab backend. Make sure it is running."
    );
    assert!(body.get("image").is_none());
}

#[actix_web::test]
async fn test_generate_accepts_empty_body() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    // No fields at all is a valid request; it fails on the backend call,
    // not on validation.
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}

#[actix_web::test]
async fn test_index_serves_embedded_client() {
    let app = test::init_service(
        App::new().route(
            "/{_:.*}",
            web::get().to(static_files::static_file_handler),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html"
    );

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("AI Image Generator"));
}

#[actix_web::test]
async fn test_unknown_asset_returns_404() {
    let app = test::init_service(
        App::new().route(
            "/{_:.*}",
            web::get().to(static_files::static_file_handler),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/no-such-file.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
