use crate::domain::ports::EndpointProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/data";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chart-feed")]
#[command(about = "Fetches dashboard chart data and prints the render-ready bundle")]
pub struct ChartConfig {
    /// Analytics endpoint serving the chart payload.
    #[arg(long, env = "CHART_API_URL", default_value = DEFAULT_API_URL)]
    pub api_endpoint: String,

    #[arg(long, help = "Pretty-print the fetched bundle")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl EndpointProvider for ChartConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for ChartConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}
