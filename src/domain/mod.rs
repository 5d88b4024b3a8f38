//! Domain logic for product pricing lives here.

pub mod app_state;
pub mod entities;
pub mod history;
pub mod kit;
pub mod pricing;
pub mod scale;

pub use app_state::{Notice, Session, NOTICE_TTL, SUPPORT_PIX_KEY};
pub use entities::{Currency, HistoryItem, ProductData, Theme};
pub use history::{capture_snapshot, History, HISTORY_CAP, UNNAMED_PRODUCT};
pub use kit::{
    kit_profit, suggested_bundle_price, KitQuote, THREE_UNIT_DISCOUNT, TWO_UNIT_DISCOUNT,
};
pub use pricing::{
    compute, margin_target_feasible, solve_sale_price, CalculationResults, MARGIN_PRESETS,
};
pub use scale::{
    monthly_projection, offer_health_score, project_scale, HealthBand, ProjectionRow,
    ScaleMetrics, PROJECTION_STEPS,
};
