#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use checklist_api::config::{default_static_dir, LogFormat, ServerConfig};
use checklist_api::router::build_app_router;
use checklist_api::session::SessionConfig;
use checklist_api::state::AppState;
use checklist_api::templates::Templates;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: default_static_dir(),
        session: SessionConfig {
            inactivity_minutes: 60,
            secure_cookie: false,
        },
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers and a fresh
/// session store.
///
/// This is the same router construction `main.rs` uses, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        templates: Arc::new(Templates::load().unwrap()),
    };
    build_app_router(state, &config)
}

/// A browser stand-in: sends requests to the router and replays the session
/// cookie it was given.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A client with its own app (and therefore its own session store).
    pub fn new() -> Self {
        Self::with_app(build_test_app())
    }

    /// A client sharing `app` with other clients, but holding its own cookie.
    pub fn with_app(app: Router) -> Self {
        Self { app, cookie: None }
    }

    pub fn has_session_cookie(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn send(&mut self, mut request: Request<Body>) -> Response {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }

        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .trim()
                .to_string();
            let has_value = pair.split_once('=').is_some_and(|(_, v)| !v.is_empty());
            self.cookie = has_value.then_some(pair);
        }

        response
    }

    pub async fn get(&mut self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&mut self, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// GET a page and return its body, asserting it rendered.
    pub async fn page(&mut self, uri: &str) -> String {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_text(response).await
    }

    /// Create a list and assert it was accepted.
    pub async fn create_list(&mut self, name: &str) {
        let response = self
            .post_form("/all-lists/new", &format!("new_list_name={name}"))
            .await;
        assert_redirect(&response, "/all-lists");
    }

    /// Add a todo to a list and assert it was accepted.
    pub async fn add_todo(&mut self, list_id: &str, name: &str) {
        let uri = format!("/all-lists/{list_id}");
        let response = self
            .post_form(&uri, &format!("new_todo_name={name}"))
            .await;
        assert_redirect(&response, &uri);
    }
}

/// Read the full response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 303 redirect to `to`.
pub fn assert_redirect(response: &Response, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap();
    assert_eq!(location, to);
}
