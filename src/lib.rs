#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::ChartConfig;

pub use crate::core::fetch::ChartFetcher;
pub use crate::core::transform::{transform_api_response, transform_bar_data, transform_pie_data};
pub use utils::error::{ChartError, Result};
