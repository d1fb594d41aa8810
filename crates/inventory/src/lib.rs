//! Inventory domain: records, validated write drafts, and reporting views.
//!
//! This crate contains business rules only, implemented as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod record;
pub mod reporting;

pub use record::{InventoryRecord, RecordDraft};
pub use reporting::{
    best_performing_products, sales_by_date, stock_distribution, DateSales, ProductTotals,
};
