pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base address of the backend, baked in at build time from `BACKEND_URL`.
pub fn get_backend_url() -> String {
    resolve_backend_url(option_env!("BACKEND_URL"))
}

pub fn resolve_backend_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_local_default() {
        assert_eq!(resolve_backend_url(None), "http://localhost:8000");
    }

    #[test]
    fn blank_counts_as_unset() {
        assert_eq!(resolve_backend_url(Some("  ")), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn configured_value_is_used_without_trailing_slash() {
        assert_eq!(
            resolve_backend_url(Some("https://api.codeboss.dev/")),
            "https://api.codeboss.dev"
        );
    }
}
