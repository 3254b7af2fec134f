pub mod fetch;
pub mod transform;

pub use crate::domain::model::{
    BarChartSeries, BarSourceData, ChartBundle, PieChartPoint, PieSourceData, RawPayload,
};
pub use crate::domain::ports::EndpointProvider;
pub use crate::utils::error::Result;
