use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Logs every request line and the status it produced.
///
/// Bodies are never logged; registration and login carry passwords.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(%method, %path, %client, "request");

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), "response");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), "response");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), "response");
    }

    response
}
