use std::time::Duration;

/// Where the analytics service lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const CROP_ANALYSIS_PATH: &str = "/api/crop-analysis";
pub const SATELLITE_IMAGES_PATH: &str = "/api/satellite-images";

/// The crop analysis view re-polls on this period.
pub const CROP_REFRESH_PERIOD: Duration = Duration::from_secs(300);

/// Native client request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the analytics service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use `base_url` when given and non-empty, the default otherwise.
    ///
    /// The browser apps pass `option_env!("AGRI_API_BASE_URL")` here.
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn crop_analysis_url(&self) -> String {
        format!("{}{}", self.base_url, CROP_ANALYSIS_PATH)
    }

    pub fn satellite_images_url(&self) -> String {
        format!("{}{}", self.base_url, SATELLITE_IMAGES_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.crop_analysis_url(), "http://localhost:5000/api/crop-analysis");
        assert_eq!(config.satellite_images_url(), "http://localhost:5000/api/satellite-images");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://analytics.example.org/");
        assert_eq!(config.base_url(), "https://analytics.example.org");
        assert_eq!(
            config.crop_analysis_url(),
            "https://analytics.example.org/api/crop-analysis"
        );
    }

    #[test]
    fn test_override() {
        assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_override(Some("http://10.0.0.5:8080")).base_url(),
            "http://10.0.0.5:8080"
        );
    }

    #[test]
    fn test_refresh_period_is_five_minutes() {
        assert_eq!(CROP_REFRESH_PERIOD.as_secs(), 5 * 60);
    }
}
