use crate::domain::model::{
    BarChartSeries, BarSourceData, ChartBundle, PieChartPoint, PieSourceData, RawPayload,
};
use crate::utils::error::{ChartError, Result};

/// Zips the parallel label/value arrays into named points, preserving order.
///
/// Precondition: `labels` and `values` have the same length.
pub fn transform_pie_data(data: &PieSourceData) -> Result<Vec<PieChartPoint>> {
    if data.labels.len() != data.values.len() {
        return Err(ChartError::ValidationError {
            message: "Labels and values length mismatch in pie chart data".to_string(),
        });
    }

    Ok(data
        .labels
        .iter()
        .zip(&data.values)
        .map(|(label, value)| PieChartPoint {
            name: label.clone(),
            value: *value,
        })
        .collect())
}

/// Validated pass-through: returns an independent series equal to the input.
///
/// Precondition: `categories` and `values` have the same length.
pub fn transform_bar_data(data: &BarSourceData) -> Result<BarChartSeries> {
    if data.categories.len() != data.values.len() {
        return Err(ChartError::ValidationError {
            message: "Categories and values length mismatch in bar chart data".to_string(),
        });
    }

    Ok(BarChartSeries {
        categories: data.categories.clone(),
        values: data.values.clone(),
    })
}

/// Converts a full API payload into the bundle the rendering layer consumes.
/// The pie series is transformed first, so its error wins when both series
/// are invalid.
pub fn transform_api_response(payload: &RawPayload) -> Result<ChartBundle> {
    Ok(ChartBundle {
        pie_chart_data: transform_pie_data(&payload.piechart)?,
        bar_chart_data: transform_bar_data(&payload.barplot)?,
    })
}
