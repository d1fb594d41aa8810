//! Dashboard: one bulk read, three summary views, three chart fragments.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stocktrack_charts::{bar_chart, line_chart, pie_chart, ChartError, ChartOptions};
use stocktrack_inventory::{
    best_performing_products, sales_by_date, stock_distribution, InventoryRecord,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = services.store().list();

    match render_fragments(&records) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!("dashboard chart rendering failed: {e}");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "chart_error", e.to_string())
        }
    }
}

fn render_fragments(records: &[InventoryRecord]) -> Result<serde_json::Value, ChartError> {
    let trend: Vec<_> = sales_by_date(records)
        .iter()
        .map(|s| (s.date, to_major_units(s.sales)))
        .collect();
    let sold: Vec<_> = best_performing_products(records)
        .into_iter()
        .map(|t| (t.name, t.quantity_sold as f64))
        .collect();
    let stocked: Vec<_> = stock_distribution(records)
        .into_iter()
        .map(|t| (t.name, t.quantity_in_stock as f64))
        .collect();

    let sales_trend = line_chart(
        &ChartOptions {
            x_label: "last sale date".to_string(),
            y_label: "sales".to_string(),
            ..ChartOptions::titled("Sales Trend")
        },
        &trend,
    )?;
    let best_performing = bar_chart(
        &ChartOptions {
            x_label: "product".to_string(),
            y_label: "quantity sold".to_string(),
            ..ChartOptions::titled("Best Performing Product")
        },
        &sold,
    )?;
    let most_in_stock = pie_chart(&ChartOptions::titled("Most Product In Stock"), &stocked)?;

    Ok(serde_json::json!({
        "sales_trend": sales_trend,
        "best_performing_product": best_performing,
        "most_product_in_stock": most_in_stock,
    }))
}

// Money is stored in the smallest currency unit; chart axes show major units.
fn to_major_units(cents: u64) -> f64 {
    cents as f64 / 100.0
}
