//! Derived reporting views over the full record set.
//!
//! Pure functions of their input: no IO, no persisted state, identical
//! output for identical input. Grouping is an explicit fold into an ordered
//! map so output order never depends on hash iteration.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::InventoryRecord;

/// Total sales for one `last_sale_date` group, in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSales {
    pub date: NaiveDate,
    pub sales: u64,
}

/// All numeric fields summed across records sharing one product name.
///
/// Records with the same name are deliberately merged: the totals are a
/// product's numbers across all of its stock entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTotals {
    pub name: String,
    pub quantity_in_stock: u64,
    pub quantity_sold: u64,
    pub sales: u64,
}

/// Sales summed per `last_sale_date`, chronologically ascending.
pub fn sales_by_date(records: &[InventoryRecord]) -> Vec<DateSales> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.last_sale_date).or_insert(0) += record.sales;
    }

    by_date
        .into_iter()
        .map(|(date, sales)| DateSales { date, sales })
        .collect()
}

/// Product totals sorted ascending by summed `quantity_sold`.
///
/// The sort is stable, so products with equal totals keep grouping order.
pub fn best_performing_products(records: &[InventoryRecord]) -> Vec<ProductTotals> {
    let mut totals = totals_by_product(records);
    totals.sort_by_key(|t| t.quantity_sold);
    totals
}

/// Product totals in grouping order (by name), for proportional display.
pub fn stock_distribution(records: &[InventoryRecord]) -> Vec<ProductTotals> {
    totals_by_product(records)
}

fn totals_by_product(records: &[InventoryRecord]) -> Vec<ProductTotals> {
    let mut by_name: BTreeMap<&str, ProductTotals> = BTreeMap::new();
    for record in records {
        let entry = by_name
            .entry(record.name.as_str())
            .or_insert_with(|| ProductTotals {
                name: record.name.clone(),
                quantity_in_stock: 0,
                quantity_sold: 0,
                sales: 0,
            });
        entry.quantity_in_stock += record.quantity_in_stock;
        entry.quantity_sold += record.quantity_sold;
        entry.sales += record.sales;
    }

    by_name.into_values().collect()
}
