use serde::{Deserialize, Serialize};

/// Pie series exactly as it appears on the wire: parallel label/value arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSourceData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Bar series exactly as it appears on the wire: parallel category/value arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSourceData {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

/// The full response body of the analytics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    pub piechart: PieSourceData,
    pub barplot: BarSourceData,
}

/// One pie slice, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartPoint {
    pub name: String,
    pub value: f64,
}

/// Validated, display-ready bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

/// Combined output handed to the rendering layer. Serializes with the
/// camelCase field names the chart components consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub pie_chart_data: Vec<PieChartPoint>,
    pub bar_chart_data: BarChartSeries,
}
