const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Backend base URL. Overridable at compile time so deployed builds can
/// point at a real API host without code changes.
pub fn api_base_url() -> &'static str {
    option_env!("FINTRACK_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
