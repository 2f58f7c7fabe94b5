use axum::http::{HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer restricted to a list of allowed origins.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The specified allowed origins
/// - Common HTTP methods (GET, POST, PUT, DELETE, PATCH, OPTIONS)
/// - Common headers (Content-Type, Authorization, Accept)
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer.
///
/// Allows any origin. Suitable for public APIs without browser credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// `CORS_ALLOWED_ORIGIN` holds comma-separated origins, e.g.
/// `http://localhost:3000,https://example.com`. When the variable is unset
/// (or contains no parseable origin) the layer falls back to allowing any
/// origin.
pub fn cors_layer_from_env() -> CorsLayer {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origins_str) => {
            let origins = parse_allowed_origins(&origins_str);
            if origins.is_empty() {
                tracing::warn!(
                    "CORS_ALLOWED_ORIGIN contained no usable origins, allowing any origin"
                );
                create_permissive_cors_layer()
            } else {
                tracing::info!("CORS configured with allowed origins: {}", origins_str);
                create_cors_layer(origins)
            }
        }
        Err(_) => create_permissive_cors_layer(),
    }
}

/// Parse a comma-separated origin list, skipping empty and invalid entries.
fn parse_allowed_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_origins_comma_separated() {
        let origins = parse_allowed_origins("http://localhost:3000,https://example.com");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_allowed_origins_trims_whitespace() {
        let origins = parse_allowed_origins(" http://localhost:3000 , https://example.com ");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_parse_allowed_origins_skips_empty_entries() {
        let origins = parse_allowed_origins("http://localhost:3000,,");
        assert_eq!(origins.len(), 1);
    }

    #[test]
    fn test_parse_allowed_origins_empty_input() {
        assert!(parse_allowed_origins("").is_empty());
    }
}
