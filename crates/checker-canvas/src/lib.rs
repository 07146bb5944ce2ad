//! # checker-canvas
//!
//! Canvas LMS REST gateway for Course Checker.
//!
//! [`CanvasClient`] issues authenticated GET requests against
//! `{base_url}/api/v1/`, follows `rel="next"` pagination links, and
//! classifies failures into [`CanvasError`]. Endpoint wrappers live in
//! [`content`] (per-course content) and [`courses`] (course discovery).
//!
//! There is no retry policy: every failure is returned to the caller.

pub mod content;
pub mod courses;

mod error;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;


pub use error::CanvasError;

use std::time::Duration;

use checker_config::CanvasConfig;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::{check_response, next_link, parse_json};

/// Authenticated client for one Canvas instance.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    http: reqwest::Client,
    api_root: Url,
    page_size: u32,
}

impl CanvasClient {
    /// Build a client from the `canvas` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] for an unusable base URL,
    /// [`CanvasError::InvalidToken`] when the token cannot be sent as a
    /// header, or [`CanvasError::Http`] if the HTTP client fails to build.
    pub fn new(config: &CanvasConfig) -> Result<Self, CanvasError> {
        let api_root = Url::parse(&format!("{}/api/v1/", config.web_root()))
            .map_err(|e| CanvasError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.trim()))
            .map_err(|e| CanvasError::InvalidToken(e.to_string()))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(concat!("course-checker/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_root,
            page_size: config.page_size,
        })
    }

    /// `per_page` sent to paginated endpoints.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Absolute URL of an API path (relative to `/api/v1/`) with query pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] if `path` cannot be joined.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, CanvasError> {
        let mut url = self
            .api_root
            .join(path.trim_start_matches('/'))
            .map_err(|e| CanvasError::InvalidUrl(format!("{path}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// GET a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Remote`] on a non-success status,
    /// [`CanvasError::Malformed`] if the body is not the expected JSON, or
    /// [`CanvasError::Http`] on transport failure.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CanvasError> {
        let url = self.endpoint(path, query)?;
        let (value, _) = self.fetch(url).await?;
        Ok(value)
    }

    /// GET a paginated JSON array, following `rel="next"` until it is absent.
    ///
    /// `query` is sent with the first request only; later requests use the
    /// server-provided next URL verbatim. Items are returned in page order.
    /// Any failing page fails the whole call.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_json`], for any page.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, CanvasError> {
        let mut next = Some(self.endpoint(path, query)?);
        let mut items = Vec::new();
        let mut pages = 0_u32;

        while let Some(url) = next.take() {
            let (page, following): (Vec<T>, _) = self.fetch(url).await?;
            pages += 1;
            items.extend(page);
            next = following;
        }

        tracing::debug!(path, pages, items = items.len(), "paginated fetch complete");
        Ok(items)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<(T, Option<Url>), CanvasError> {
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(url.clone()).send().await?).await?;
        let following = next_link(&url, resp.headers())?;
        let body = resp.text().await?;
        Ok((parse_json(&url, &body)?, following))
    }

    fn per_page(&self) -> String {
        self.page_size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CanvasConfig {
        CanvasConfig {
            base_url: base_url.into(),
            token: "tok".into(),
            ..Default::default()
        }
    }

    #[test]
    fn endpoint_joins_under_api_root() {
        let client = CanvasClient::new(&config("https://canvas.test/")).unwrap();
        let url = client
            .endpoint("courses/12/tabs", &[("per_page", "100")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://canvas.test/api/v1/courses/12/tabs?per_page=100"
        );
    }

    #[test]
    fn endpoint_encodes_array_parameters() {
        let client = CanvasClient::new(&config("https://canvas.test")).unwrap();
        let url = client
            .endpoint("/accounts/746/courses", &[("include[]", "sis_course_id")])
            .unwrap();
        assert_eq!(url.path(), "/api/v1/accounts/746/courses");
        assert_eq!(
            url.query_pairs().next().map(|(k, v)| (k.into_owned(), v.into_owned())),
            Some(("include[]".to_string(), "sis_course_id".to_string()))
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = CanvasClient::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_token_with_newline() {
        let mut cfg = config("https://canvas.test");
        cfg.token = "abc\ndef".into();
        let err = CanvasClient::new(&cfg).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidToken(_)));
    }
}
