//! Middleware limiting how often one client may submit a form.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::Method;
use log::warn;

use super::{error::ApiError, AppState};

/// Counts POST requests per client and path, rejecting them once the
/// configured window is full. Reads pass through untouched.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let key = format!(
        "{}:{}",
        client_ip(&request, state.config.trust_proxy),
        request.uri().path()
    );
    let allowed = state
        .rate_limiter
        .check_limit(&key, state.config.rate_limit_max, state.config.rate_limit_window)
        .await;

    if allowed {
        next.run(request).await
    } else {
        warn!("Rate limit reached for {key}");
        ApiError::RateLimited.into_response()
    }
}

/// Peer address of the request. Behind a trusted proxy, the first
/// `X-Forwarded-For` hop wins when it parses as an IP address.
fn client_ip(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(ip) = forwarded_ip(request) {
            return ip.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn forwarded_ip(request: &Request) -> Option<IpAddr> {
    request
        .headers()
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}
