//! Build-time configuration.
//!
//! The API base URL is baked in at compile time from the `API_URL`
//! environment variable, the same way the bundler would inline it for a
//! static build.

/// Used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Local-storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Local-storage key holding the serialized [`UserProfile`](crate::models::UserProfile).
pub const USER_KEY: &str = "user";

pub fn api_base_url() -> &'static str {
    match option_env!("API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

/// Joins `path` onto `base`, tolerating a missing or doubled slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Spreadsheet export for a resource collection, opened by plain browser
/// navigation.
pub fn download_url(resource: &str) -> String {
    join_url(api_base_url(), &format!("{}/download", resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("http://a/api", "income/get"), "http://a/api/income/get");
        assert_eq!(join_url("http://a/api/", "/income/get"), "http://a/api/income/get");
    }

    #[test]
    fn download_url_uses_resource_name() {
        let url = download_url("expense");
        assert!(url.ends_with("/expense/download"));
        assert!(url.starts_with(api_base_url()));
    }
}
