//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port (3000 by default).
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build an API URL for a single entity, encoding the id as a path segment
///
/// # Example
/// ```rust,ignore
/// let url = entity_url("/api/products", "p-1");
/// ```
pub fn entity_url(collection_path: &str, id: &str) -> String {
    api_url(&entity_path(collection_path, id))
}

/// Build an API URL for a collection scoped to the active store
///
/// Without an active store the unscoped collection URL is returned.
pub fn store_scoped_url(collection_path: &str, store_id: Option<&str>) -> String {
    api_url(&scoped_path(collection_path, store_id))
}

fn scoped_path(collection_path: &str, store_id: Option<&str>) -> String {
    match store_id {
        Some(id) => format!("{}?storeId={}", collection_path, urlencoding::encode(id)),
        None => collection_path.to_string(),
    }
}

fn entity_path(collection_path: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection_path.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_path_encodes_id() {
        assert_eq!(entity_path("/api/products", "p-1"), "/api/products/p-1");
        assert_eq!(entity_path("/api/products/", "a b/c"), "/api/products/a%20b%2Fc");
    }

    #[test]
    fn test_scoped_path() {
        assert_eq!(scoped_path("/api/products", Some("s 1")), "/api/products?storeId=s%201");
        assert_eq!(scoped_path("/api/products", None), "/api/products");
    }
}
