//! Ad-spend scale projection and the offer-health heuristic.

use super::pricing::CalculationResults;

/// Monthly sales volumes the projection table is rendered for.
pub const PROJECTION_STEPS: [u32; 6] = [30, 150, 300, 1500, 3000, 10000];

/// Daily outcome implied by an ad budget and the current unit economics.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleMetrics {
    /// Sales the budget buys per day at the ideal CPA; `0` when that CPA is zero.
    pub projected_sales_per_day: f64,
    pub projected_daily_profit: f64,
    pub projected_daily_revenue: f64,
    /// Projected daily profit over the budget; `0` when the budget is zero.
    pub estimated_roi_pct: f64,
    /// Additive 0-100 heuristic, see [`offer_health_score`].
    pub health_score: u8,
}

impl ScaleMetrics {
    pub fn band(&self) -> HealthBand {
        HealthBand::for_score(self.health_score)
    }
}

/// Traffic-light reading of the health score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthBand {
    Green,
    Yellow,
    Red,
}

impl HealthBand {
    pub fn for_score(score: u8) -> Self {
        if score > 70 {
            HealthBand::Green
        } else if score > 40 {
            HealthBand::Yellow
        } else {
            HealthBand::Red
        }
    }
}

/// Score how well the offer tolerates paid traffic, 0-100.
///
/// Three independent signals, no normalization: margin depth (+40 above 30%,
/// +20 above 15%), markup multiple (+40 above 3x, +20 above 2x), and
/// break-even headroom over the planned CPA (+20). A coarse traffic-light
/// heuristic, not a calibrated probability.
pub fn offer_health_score(results: &CalculationResults) -> u8 {
    let mut score = 0;
    if results.margin > 30.0 {
        score += 40;
    } else if results.margin > 15.0 {
        score += 20;
    }
    if results.markup > 3.0 {
        score += 40;
    } else if results.markup > 2.0 {
        score += 20;
    }
    if results.break_even_cpa > results.marketing_cost {
        score += 20;
    }
    score
}

/// Project daily sales, profit, revenue and ROI for a daily ad budget.
///
/// The ideal CPA is the marketing share of one sale; the budget divided by it
/// gives the implied sales volume. Zero denominators project to zero.
pub fn project_scale(
    results: &CalculationResults,
    marketing_pct: f64,
    sale_price: f64,
    daily_budget: f64,
) -> ScaleMetrics {
    let ideal_cpa = sale_price * marketing_pct / 100.0;
    let projected_sales_per_day = if ideal_cpa > 0.0 {
        daily_budget / ideal_cpa
    } else {
        0.0
    };
    let projected_daily_profit = results.profit * projected_sales_per_day;
    let projected_daily_revenue = sale_price * projected_sales_per_day;
    let estimated_roi_pct = if daily_budget > 0.0 {
        projected_daily_profit / daily_budget * 100.0
    } else {
        0.0
    };

    ScaleMetrics {
        projected_sales_per_day,
        projected_daily_profit,
        projected_daily_revenue,
        estimated_roi_pct,
        health_score: offer_health_score(results),
    }
}

/// One row of the monthly projection table.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionRow {
    pub sales_per_month: u32,
    pub profit: f64,
    /// Profit converted to the home currency via the session multiplier.
    pub profit_home: f64,
    pub avg_daily_sales: f64,
}

/// Total profit at each volume step of [`PROJECTION_STEPS`].
pub fn monthly_projection(profit_per_sale: f64, exchange_rate: f64) -> Vec<ProjectionRow> {
    PROJECTION_STEPS
        .iter()
        .map(|&qty| {
            let profit = profit_per_sale * qty as f64;
            ProjectionRow {
                sales_per_month: qty,
                profit,
                profit_home: profit * exchange_rate,
                avg_daily_sales: qty as f64 / 30.0,
            }
        })
        .collect()
}
