//! Request handler module
//!
//! Dispatches requests: the root greeting route plus the default
//! 404/405/OPTIONS responses for everything else.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Body served for `GET /`
pub const GREETING: &str = "<html><body>\n<h2>Hello Demo Gods!</h2>\n</body></html>";

/// Main entry point for HTTP request handling.
///
/// The handler never consults the request body, so it is generic over the
/// body type: connections pass `hyper::body::Incoming`, tests pass whatever
/// is convenient.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = route_request(req.method(), req.uri().path());

    if state.cached_access_log.load(Ordering::Relaxed) {
        let entry = access_entry(&req, peer_addr, &response);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route dispatch: exact-path match first, then method.
/// Unknown paths get 404 regardless of method; known paths with an
/// unsupported method get 405.
fn route_request(method: &Method, path: &str) -> Response<Full<Bytes>> {
    if path != "/" {
        return http::build_404_response();
    }

    match *method {
        Method::GET => http::build_html_response(GREETING, false),
        Method::HEAD => http::build_html_response(GREETING, true),
        Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    }
}

/// Assemble the access log entry for a finished request
fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
) -> logger::AccessLogEntry {
    let mut entry = logger::AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
