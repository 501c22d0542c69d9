use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use wknd_headless::admin::purge_cache_with_token;
use wknd_headless::conf::AdminConfig;
use wknd_headless::core::HeadlessError;

#[derive(Clone)]
struct Stub {
    tokens: Arc<Mutex<Vec<String>>>,
    status: StatusCode,
}

async fn purge(State(stub): State<Stub>, headers: HeaderMap) -> impl IntoResponse {
    let token = headers
        .get("x-hlx-auth")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    stub.tokens.lock().unwrap().push(token);
    (stub.status, "job accepted")
}

async fn serve(status: StatusCode) -> (String, Arc<Mutex<Vec<String>>>) {
    let tokens = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        tokens: tokens.clone(),
        status,
    };
    let app = Router::new()
        .route("/cache/acme/site/main/{*rest}", post(purge))
        .with_state(stub);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), tokens)
}

fn conf(base: &str) -> AdminConfig {
    AdminConfig {
        purge_url: Some(format!("{base}/cache/acme/site/main/*")),
        ..AdminConfig::default()
    }
}

#[tokio::test]
async fn test_purge_sends_auth_header() {
    let (base, tokens) = serve(StatusCode::OK).await;

    purge_cache_with_token(&conf(&base), "secret-token")
        .await
        .unwrap();
    assert_eq!(tokens.lock().unwrap().as_slice(), ["secret-token"]);
}

#[tokio::test]
async fn test_purge_failure_surfaces_status_and_body() {
    let (base, _) = serve(StatusCode::FORBIDDEN).await;

    let err = purge_cache_with_token(&conf(&base), "bad-token")
        .await
        .unwrap_err();
    match err {
        HeadlessError::PurgeError(message) => {
            assert!(message.contains("403"), "missing status: {message}");
            assert!(message.contains("job accepted"), "missing body: {message}");
        }
        other => panic!("expected PurgeError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_purge_without_url_is_an_error() {
    let err = purge_cache_with_token(&AdminConfig::default(), "secret-token")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        HeadlessError::PurgeError(String::from("no admin.purge_url configured"))
    );
}
