//! `stocktrack-charts` — chart fragment rendering.
//!
//! Renders summary series into self-contained `<svg>` fragments for
//! embedding. Rendering never fails on empty input: an empty series
//! produces a titled, empty frame so dashboards degrade gracefully.

pub mod fragments;

pub use fragments::{bar_chart, line_chart, pie_chart, ChartError, ChartOptions};
