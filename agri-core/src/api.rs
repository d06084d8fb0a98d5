//! Native HTTP client for the analytics service.

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::imagery::SatelliteImageRecord;
use crate::wire::{decode_crop_analysis, decode_satellite_images, CropAnalysisResponse};
use log::debug;
use reqwest::Client;

/// Client for the two analytics endpoints.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    config: ApiConfig,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

impl AnalyticsClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/crop-analysis`
    pub async fn crop_analysis(&self) -> Result<CropAnalysisResponse, FetchError> {
        let body = self.get_text(&self.config.crop_analysis_url()).await?;
        decode_crop_analysis(&body)
    }

    /// `GET /api/satellite-images`
    pub async fn satellite_images(&self) -> Result<Vec<SatelliteImageRecord>, FetchError> {
        let body = self.get_text(&self.config.satellite_images_url()).await?;
        decode_satellite_images(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
