use crate::core::transform;
use crate::domain::model::{ChartBundle, RawPayload};
use crate::domain::ports::EndpointProvider;
use crate::utils::error::{ChartError, Result};
use reqwest::Client;

pub struct ChartFetcher<C: EndpointProvider> {
    config: C,
    client: Client,
}

impl<C: EndpointProvider> ChartFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetches the analytics payload and returns the display-ready bundle.
    ///
    /// Every failure, whether transport, HTTP status, body parsing, or
    /// validation, is logged with its cause and surfaced uniformly as
    /// [`ChartError::FetchFailed`]. Either both series are produced or
    /// nothing is.
    pub async fn fetch_chart_data(&self) -> Result<ChartBundle> {
        match self.fetch_and_transform().await {
            Ok(bundle) => Ok(bundle),
            Err(e) => {
                tracing::error!("Error fetching chart data: {}", e);
                Err(ChartError::FetchFailed)
            }
        }
    }

    async fn fetch_and_transform(&self) -> Result<ChartBundle> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ChartError::HttpStatusError { status });
        }

        let payload: RawPayload = response.json().await?;
        transform::transform_api_response(&payload)
    }
}
