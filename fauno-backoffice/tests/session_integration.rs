// fauno-backoffice/tests/session_integration.rs
// Session bootstrapping: probe, login, logout and token persistence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tempfile::TempDir;

use fauno_backoffice::{Session, SessionState};
use fauno_client::{ClientConfig, HttpClient, SharedToken, TokenStore};

#[derive(Default)]
struct MockState {
    probes: Mutex<Vec<Option<String>>>,
    logins: AtomicUsize,
}

fn bearer_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn probe(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    let bearer = bearer_of(&headers);
    state.probes.lock().unwrap().push(bearer.clone());
    match bearer.as_deref() {
        Some("stored-token") | Some("fresh-token") | Some("refreshed-token") => {
            Json(json!({"token": "refreshed-token"})).into_response()
        }
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.logins.fetch_add(1, Ordering::SeqCst);
    if body["mail"] == "admin@fauno.ru" && body["password"] == "secret" {
        Json(json!({"token": "fresh-token"})).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn spawn_mock() -> (HttpClient, SharedToken, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    let app = Router::new()
        .route("/user/auth", get(probe))
        .route("/user/login", post(login))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let token = SharedToken::new(None);
    let api = ClientConfig::new(format!("http://{addr}")).build_http_client(token.clone());
    (api, token, state)
}

#[tokio::test]
async fn test_probe_with_persisted_token_authenticates_and_refreshes() {
    let (api, token, _state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    store.save("stored-token").unwrap();

    let mut session = Session::new(api, store.clone());
    assert_eq!(session.state(), SessionState::Unknown);

    assert_eq!(session.probe().await, SessionState::Authenticated);
    assert!(session.is_authenticated());

    // the refreshed token replaced the stored one, in memory and on disk
    assert_eq!(token.get().as_deref(), Some("refreshed-token"));
    assert_eq!(store.load().as_deref(), Some("refreshed-token"));
}

#[tokio::test]
async fn test_probe_without_token_redirects_to_login() {
    let (api, _token, _state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();

    let mut session = Session::new(api, TokenStore::new(dir.path()));
    assert_eq!(session.probe().await, SessionState::Unauthenticated);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_login_blank_fields_is_a_no_op() {
    let (api, _token, state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();

    let mut session = Session::new(api, TokenStore::new(dir.path()));
    assert!(!session.login("", "secret").await);
    assert!(!session.login("admin@fauno.ru", "").await);
    assert_eq!(state.logins.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_login_persists_token_and_reprobes() {
    let (api, token, state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());

    let mut session = Session::new(api, store.clone());
    assert!(session.login("admin@fauno.ru", "secret").await);
    assert!(session.is_authenticated());
    assert_eq!(state.logins.load(Ordering::SeqCst), 1);

    // login stores the fresh token, then the probe swaps in the refreshed one
    let probes = state.probes.lock().unwrap().clone();
    assert_eq!(probes, [Some("fresh-token".to_string())]);
    assert_eq!(token.get().as_deref(), Some("refreshed-token"));
    assert_eq!(store.load().as_deref(), Some("refreshed-token"));
}

#[tokio::test]
async fn test_failed_login_leaves_session_unauthenticated() {
    let (api, token, _state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();

    let mut session = Session::new(api, TokenStore::new(dir.path()));
    assert!(!session.login("admin@fauno.ru", "wrong").await);
    assert!(!session.is_authenticated());
    assert!(token.get().is_none());
}

#[tokio::test]
async fn test_logout_clears_memory_and_storage() {
    let (api, token, _state) = spawn_mock().await;
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    store.save("stored-token").unwrap();

    let mut session = Session::new(api, store.clone());
    session.probe().await;
    assert!(session.is_authenticated());

    session.logout();
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(token.get().is_none());
    assert!(!store.exists());
}
