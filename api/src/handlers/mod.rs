//! Cross-cutting handler helpers.

pub mod error;

use actix_web::HttpRequest;

/// Extract the client IP address from a request, best effort
///
/// Behind a reverse proxy the first entry of `X-Forwarded-For` is the
/// client; otherwise fall back to `X-Real-IP`, then the peer address.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
