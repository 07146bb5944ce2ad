//! Shared HTTP response helpers.
//!
//! Centralizes the status check (non-success → [`CanvasError::Remote`]),
//! JSON decoding (→ [`CanvasError::Malformed`]) and `Link` header parsing so
//! the endpoint modules stay focused on paths and query parameters.

use reqwest::Url;
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::error::CanvasError;

/// Return the response unchanged on success, otherwise [`CanvasError::Remote`]
/// with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CanvasError> {
    if !resp.status().is_success() {
        return Err(CanvasError::Remote {
            status: resp.status().as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body fetched from `url`.
pub fn parse_json<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, CanvasError> {
    serde_json::from_str(body).map_err(|e| CanvasError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve the `rel="next"` target of the response's `Link` headers against
/// the URL that produced them.
pub fn next_link(url: &Url, headers: &HeaderMap) -> Result<Option<Url>, CanvasError> {
    let raw = headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(find_rel_next);

    raw.map(|target| {
        url.join(target).map_err(|e| CanvasError::Malformed {
            url: url.to_string(),
            reason: format!("invalid next link '{target}': {e}"),
        })
    })
    .transpose()
}

/// Find the target of the `next` relation in a `Link` header value.
///
/// Canvas emits `<url>; rel="current",<url>; rel="next",<url>; rel="first"`.
/// Relation types are space separated and may be unquoted.
pub fn find_rel_next(header: &str) -> Option<&str> {
    let mut rest = header;
    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let close = after_open.find('>')?;
        let target = &after_open[..close];
        let params_and_rest = &after_open[close + 1..];
        let params_end = params_and_rest.find('<').unwrap_or(params_and_rest.len());
        let params = &params_and_rest[..params_end];

        let is_next = params.split(';').any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_end_matches(',')
                    .trim()
                    .trim_matches('"')
                    .split_ascii_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        });
        if is_next {
            return Some(target);
        }
        rest = &params_and_rest[params_end..];
    }
    None
}
