//! HTTP → HTTPS redirection.
//!
//! TLS is terminated in front of the service, so the original scheme comes
//! from `x-forwarded-proto` (or an absolute request URI). Requests that carry
//! no scheme information pass through untouched.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpsRedirect {
    pub port: u16,
}

pub async fn redirect_to_https(
    State(redirect): State<HttpsRedirect>,
    req: Request,
    next: Next,
) -> Response {
    if !is_plain_http(req.headers(), req.uri()) {
        return next.run(req).await;
    }

    match location(req.headers(), req.uri(), redirect.port) {
        Some(location) => (
            StatusCode::TEMPORARY_REDIRECT,
            [(header::LOCATION, location)],
        )
            .into_response(),
        None => {
            tracing::warn!("cannot redirect to https: request has no host");
            next.run(req).await
        }
    }
}

fn is_plain_http(headers: &HeaderMap, uri: &Uri) -> bool {
    let forwarded = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);

    match forwarded {
        Some(proto) => proto.eq_ignore_ascii_case("http"),
        None => uri.scheme_str() == Some("http"),
    }
}

fn location(headers: &HeaderMap, uri: &Uri, port: u16) -> Option<HeaderValue> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.host())?;
    let host = strip_port(host);
    if host.is_empty() {
        return None;
    }

    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let target = if port == 443 {
        format!("https://{host}{path}")
    } else {
        format!("https://{host}:{port}{path}")
    };
    HeaderValue::from_str(&target).ok()
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literals keep their brackets.
    if let Some(end) = host.find(']') {
        return &host[..=end];
    }
    host.split(':').next().unwrap_or(host)
}
