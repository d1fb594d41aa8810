//! Request DTOs and JSON mapping.

use serde::Deserialize;

use stocktrack_inventory::{InventoryRecord, RecordDraft};

/// Create/update payload: all writable fields of a record.
///
/// `sales` is never accepted from the caller; it is derived on every write.
#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub name: String,
    pub quantity_in_stock: u64,
    pub quantity_sold: u64,
    /// Smallest currency unit (e.g. cents).
    pub cost_per_item: u64,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub last_sale_date: chrono::NaiveDate,
}

impl From<RecordRequest> for RecordDraft {
    fn from(req: RecordRequest) -> Self {
        RecordDraft {
            name: req.name,
            quantity_in_stock: req.quantity_in_stock,
            quantity_sold: req.quantity_sold,
            cost_per_item: req.cost_per_item,
            last_sale_date: req.last_sale_date,
        }
    }
}

pub fn record_to_json(record: &InventoryRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id.to_string(),
        "name": record.name,
        "quantity_in_stock": record.quantity_in_stock,
        "quantity_sold": record.quantity_sold,
        "cost_per_item": record.cost_per_item,
        "sales": record.sales,
        "last_sale_date": record.last_sale_date,
    })
}
