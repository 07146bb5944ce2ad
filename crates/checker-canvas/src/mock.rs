//! Local stand-in for a Canvas instance, for tests.
//!
//! Serves canned JSON on `127.0.0.1:0` from a background thread. Routes are
//! keyed by API path (relative to `/api/v1/`) and the `page` query parameter
//! (absent means page 1). Pages registered with [`MockCanvasBuilder::pages`]
//! advertise the following page through a Canvas-style `Link` header.
//! Every request is recorded so tests can assert on URLs and auth headers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use checker_config::CanvasConfig;

/// Token the mock expects; [`MockCanvas::config`] uses it.
pub const MOCK_TOKEN: &str = "mock-token";

#[derive(Debug, Clone)]
struct MockResponse {
    status: u16,
    body: String,
    next_page: Option<u32>,
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Path and query as sent, e.g. `/api/v1/courses/1/tabs?per_page=100`.
    pub url: String,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Path without the query string.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct MockCanvasBuilder {
    routes: HashMap<(String, u32), MockResponse>,
}

impl MockCanvasBuilder {
    /// Serve `body` with status 200 at `path`.
    #[must_use]
    pub fn json(self, path: &str, body: serde_json::Value) -> Self {
        self.raw(path, 200, &body.to_string())
    }

    /// Serve an arbitrary status and body at `path`.
    #[must_use]
    pub fn raw(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            (normalize(path), 1),
            MockResponse {
                status,
                body: body.to_string(),
                next_page: None,
            },
        );
        self
    }

    /// Serve `pages` as pages 1..=n of `path`, each linking to the next.
    #[must_use]
    pub fn pages(mut self, path: &str, pages: Vec<serde_json::Value>) -> Self {
        let total = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        for (page, body) in (1..).zip(pages) {
            self.routes.insert(
                (normalize(path), page),
                MockResponse {
                    status: 200,
                    body: body.to_string(),
                    next_page: (page < total).then_some(page + 1),
                },
            );
        }
        self
    }

    /// Serve `status` for page `page` of `path` (for mid-pagination failures).
    #[must_use]
    pub fn page_status(mut self, path: &str, page: u32, status: u16, body: &str) -> Self {
        self.routes.insert(
            (normalize(path), page),
            MockResponse {
                status,
                body: body.to_string(),
                next_page: None,
            },
        );
        self
    }

    /// Bind and start serving.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    #[must_use]
    pub fn start(self) -> MockCanvas {
        let server = Arc::new(
            tiny_http::Server::http("127.0.0.1:0").expect("mock canvas should bind a local port"),
        );
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("mock canvas listens on an IP address");
        let base_url = format!("http://127.0.0.1:{port}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let base_url = base_url.clone();
            let routes = self.routes;
            std::thread::spawn(move || serve(&server, &routes, &requests, &base_url))
        };

        MockCanvas {
            server,
            handle: Some(handle),
            base_url,
            requests,
        }
    }
}

/// A running mock; stops serving when dropped.
pub struct MockCanvas {
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockCanvas {
    #[must_use]
    pub fn builder() -> MockCanvasBuilder {
        MockCanvasBuilder::default()
    }

    /// `http://127.0.0.1:{port}`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A `canvas` section pointing at this mock.
    #[must_use]
    pub fn config(&self) -> CanvasConfig {
        CanvasConfig {
            base_url: self.base_url.clone(),
            token: MOCK_TOKEN.to_string(),
            timeout_secs: 5,
            ..CanvasConfig::default()
        }
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Requests whose path ends with `suffix`.
    #[must_use]
    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path().ends_with(suffix))
            .collect()
    }
}

impl Drop for MockCanvas {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn normalize(path: &str) -> String {
    format!("/api/v1/{}", path.trim_start_matches('/'))
}

fn page_of(query: &str) -> u32 {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(1)
}

fn serve(
    server: &tiny_http::Server,
    routes: &HashMap<(String, u32), MockResponse>,
    requests: &Mutex<Vec<RecordedRequest>>,
    base_url: &str,
) {
    for request in server.incoming_requests() {
        let url = request.url().to_string();
        let authorization = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Authorization"))
            .map(|header| header.value.as_str().to_string());
        requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.clone(),
                authorization,
            });

        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        let page = page_of(query);

        let response = match routes.get(&(path.to_string(), page)) {
            Some(route) => {
                let mut response = tiny_http::Response::from_string(route.body.clone())
                    .with_status_code(route.status)
                    .with_header(header("Content-Type", "application/json"));
                if let Some(next) = route.next_page {
                    let link = format!(
                        "<{base_url}{path}?page={page}&per_page=100>; rel=\"current\",\
                         <{base_url}{path}?page={next}&per_page=100>; rel=\"next\",\
                         <{base_url}{path}?page=1&per_page=100>; rel=\"first\""
                    );
                    response = response.with_header(header("Link", &link));
                }
                response
            }
            None => tiny_http::Response::from_string(
                r#"{"errors":[{"message":"The specified resource does not exist."}]}"#,
            )
            .with_status_code(404)
            .with_header(header("Content-Type", "application/json")),
        };
        let _ = request.respond(response);
    }
}

fn header(field: &str, value: &str) -> tiny_http::Header {
    tiny_http::Header::from_bytes(field.as_bytes(), value.as_bytes())
        .expect("static mock header is valid")
}
