//! Pricing engine for e-commerce sellers.
//!
//! The core is a pure derived-metrics computation: a flat set of numeric
//! business inputs ([`ProductData`]) maps to the financial outputs a seller
//! cares about ([`CalculationResults`]), with kit/bundle simulation, ad-spend
//! scale projection, and reverse-solving for a target margin layered on top.
//! Everything is synchronous O(1) arithmetic; rendering, clipboard access and
//! file downloads belong to the embedding application.
//!
//! [`Session`] holds one editing session's state (inputs, currency, theme,
//! saved history) and [`Store`] persists the theme and history entries as two
//! independently keyed JSON files.

pub mod domain;
pub mod util;

pub use domain::{
    compute, kit_profit, monthly_projection, project_scale, solve_sale_price, CalculationResults,
    Currency, History, HistoryItem, KitQuote, ProductData, ScaleMetrics, Session, Theme,
};
pub use util::persistence::Store;
