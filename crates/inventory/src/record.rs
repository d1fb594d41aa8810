use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocktrack_core::{DomainError, RecordId};

/// One inventory line item with stock, sales, and pricing fields.
///
/// Monetary fields (`cost_per_item`, `sales`) are in the smallest currency
/// unit (e.g. cents), so `sales == cost_per_item * quantity_sold` holds
/// exactly with integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub name: String,
    pub quantity_in_stock: u64,
    pub quantity_sold: u64,
    pub cost_per_item: u64,
    /// Derived: recomputed on every create/update, never written directly.
    pub sales: u64,
    /// Date of the most recent sale.
    pub last_sale_date: NaiveDate,
}

/// Validated write model for create and update.
///
/// Every writable field is named and typed; a draft is checked before any
/// mutation is applied, and `sales` is always derived here rather than
/// accepted from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub quantity_in_stock: u64,
    pub quantity_sold: u64,
    pub cost_per_item: u64,
    pub last_sale_date: NaiveDate,
}

impl RecordDraft {
    /// Check field-level constraints.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        // The derived sales figure must stay representable.
        self.sales()?;
        Ok(())
    }

    /// Derived sales figure: `cost_per_item * quantity_sold`.
    pub fn sales(&self) -> Result<u64, DomainError> {
        self.cost_per_item
            .checked_mul(self.quantity_sold)
            .ok_or_else(|| DomainError::validation("sales figure overflows"))
    }

    /// Materialize the draft as a full record under `id`.
    ///
    /// Used for both creation (fresh id) and update (existing id, full
    /// replacement). The record never exists in an unvalidated state.
    pub fn into_record(self, id: RecordId) -> Result<InventoryRecord, DomainError> {
        self.validate()?;
        let sales = self.sales()?;

        Ok(InventoryRecord {
            id,
            name: self.name.trim().to_string(),
            quantity_in_stock: self.quantity_in_stock,
            quantity_sold: self.quantity_sold,
            cost_per_item: self.cost_per_item,
            sales,
            last_sale_date: self.last_sale_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, sold: u64, cost: u64) -> RecordDraft {
        RecordDraft {
            name: name.to_string(),
            quantity_in_stock: 10,
            quantity_sold: sold,
            cost_per_item: cost,
            last_sale_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn sales_is_derived_exactly() {
        let record = draft("Widget", 7, 250).into_record(RecordId::new()).unwrap();
        assert_eq!(record.sales, record.cost_per_item * record.quantity_sold);
        assert_eq!(record.sales, 1750);
    }

    #[test]
    fn name_is_trimmed_on_write() {
        let record = draft("  Widget  ", 1, 1).into_record(RecordId::new()).unwrap();
        assert_eq!(record.name, "Widget");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = draft("   ", 1, 1).into_record(RecordId::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn overflowing_sales_is_rejected() {
        let err = draft("Widget", u64::MAX, 2).into_record(RecordId::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_quantities_are_allowed() {
        let record = draft("Widget", 0, 100).into_record(RecordId::new()).unwrap();
        assert_eq!(record.sales, 0);
    }
}
