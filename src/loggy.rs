use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Logs every request once the response is ready
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let res = next.run(req).await;

    info!(
        "{} {} {} {} ({}ms, {})",
        res.status().as_u16(),
        res.status().canonical_reason().unwrap_or(""),
        method,
        path,
        start.elapsed().as_millis(),
        user_agent
    );

    res
}
