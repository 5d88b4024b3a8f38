//! Derived-metrics computation: the pure core every other view re-derives from.

use super::entities::ProductData;

/// Financial outputs fully derived from [`ProductData`].
///
/// Recomputed on every input change and never persisted on its own. Ratios
/// with a zero denominator are defined as `0` rather than an error; the
/// whole computation is a total function.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResults {
    /// Landed cost of one unit: product + shipping, uplifted by import/VAT.
    pub logistics_cost: f64,
    /// Per-sale customer-acquisition budget implied by `marketing_pct`.
    pub marketing_cost: f64,
    /// Variable fees on the sale price plus the flat per-order fee.
    pub fees_and_taxes: f64,
    pub profit: f64,
    /// Profit as a percentage of the sale price; `0` when the price is zero.
    pub margin: f64,
    /// Sale price as a multiple of logistics cost; `0` when that cost is zero.
    pub markup: f64,
    /// Maximum acquisition cost that still breaks even, ignoring marketing's
    /// own share.
    pub break_even_cpa: f64,
}

/// Target margins offered as one-click suggestions, as fractions.
pub const MARGIN_PRESETS: [f64; 3] = [0.20, 0.30, 0.40];

/// Import-tax and VAT uplift applied to anything that crosses the border.
pub(crate) fn landed_cost_factor(data: &ProductData) -> f64 {
    1.0 + (data.import_tax_pct + data.vat_pct) / 100.0
}

/// Combined sale-price-proportional fee fraction, marketing excluded.
pub(crate) fn variable_fee_fraction(data: &ProductData) -> f64 {
    (data.checkout_fee_pct
        + data.gateway_fee_pct
        + data.sales_tax_pct
        + data.contingency_pct
        + data.currency_conversion_pct)
        / 100.0
}

/// Compute every derived metric for the given inputs.
///
/// Total and side-effect-free: identical input yields bit-identical output,
/// and no input combination fails. Cheap enough to call on every keystroke.
pub fn compute(data: &ProductData) -> CalculationResults {
    let logistics_cost = (data.unit_cost + data.shipping_cost) * landed_cost_factor(data);
    let marketing_cost = data.sale_price * data.marketing_pct / 100.0;
    let fees_and_taxes =
        data.sale_price * variable_fee_fraction(data) + data.fixed_fee_per_order;
    let profit = data.sale_price - logistics_cost - marketing_cost - fees_and_taxes;
    let margin = if data.sale_price > 0.0 {
        profit / data.sale_price * 100.0
    } else {
        0.0
    };
    let markup = if logistics_cost > 0.0 {
        data.sale_price / logistics_cost
    } else {
        0.0
    };
    let break_even_cpa = data.sale_price - logistics_cost - fees_and_taxes;

    CalculationResults {
        logistics_cost,
        marketing_cost,
        fees_and_taxes,
        profit,
        markup,
        margin,
        break_even_cpa,
    }
}

fn margin_divisor(data: &ProductData, target_margin: f64) -> f64 {
    1.0 - variable_fee_fraction(data) - data.marketing_pct / 100.0 - target_margin
}

/// Whether a target margin (as a fraction, e.g. `0.20`) is reachable at all
/// given the current fee percentages. When the variable fractions plus the
/// target sum to 1 or more, no finite sale price can hit the target.
pub fn margin_target_feasible(data: &ProductData, target_margin: f64) -> bool {
    margin_divisor(data, target_margin) > 0.0
}

/// Solve for the sale price that yields `target_margin` (a fraction).
///
/// Returns `None` when the target is infeasible; callers keep the prior sale
/// price in that case (the historical no-op contract; use
/// [`margin_target_feasible`] to surface infeasibility instead).
/// The solved price is rounded to 2 decimal places.
pub fn solve_sale_price(data: &ProductData, target_margin: f64) -> Option<f64> {
    let divisor = margin_divisor(data, target_margin);
    if divisor <= 0.0 {
        return None;
    }
    let base_cost = (data.unit_cost + data.shipping_cost) * landed_cost_factor(data);
    Some(round2((base_cost + data.fixed_fee_per_order) / divisor))
}

/// Round to 2 decimal places, the precision every displayed price uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
