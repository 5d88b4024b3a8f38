//! Multi-unit bundle ("kit") offer simulation.

use super::entities::ProductData;
use super::pricing::{landed_cost_factor, round2, variable_fee_fraction};

/// Suggested launch discount for a 2-unit kit, as a fraction of list price.
pub const TWO_UNIT_DISCOUNT: f64 = 0.10;
/// Suggested launch discount for a 3-unit kit.
pub const THREE_UNIT_DISCOUNT: f64 = 0.15;

/// Outcome of selling `units` at one combined bundle price.
#[derive(Clone, Debug, PartialEq)]
pub struct KitQuote {
    pub profit: f64,
    /// Profit as a percentage of the bundle price; `0` when that price is zero.
    pub margin_pct: f64,
    /// Discount versus buying the units individually at list price. Zero or
    /// negative when the bundle is not actually discounted.
    pub discount_pct: f64,
}

/// Profit of a kit sold as one order of `units` at `bundle_price`.
///
/// Goods cost scales with the unit count, but a kit is still one shipment,
/// one acquisition, and one order: shipping, the single-unit marketing CPA
/// (`sale_price * marketing_pct`), and the fixed per-order fee are all
/// charged once. Variable fees apply to the bundle price.
pub fn kit_profit(data: &ProductData, units: u32, bundle_price: f64) -> KitQuote {
    let landed = landed_cost_factor(data);
    let goods_cost = data.unit_cost * units as f64 * landed;
    let shipping_cost = data.shipping_cost * landed;
    let marketing_cpa = data.sale_price * data.marketing_pct / 100.0;
    let variable_fees = bundle_price * variable_fee_fraction(data);

    let profit = bundle_price
        - goods_cost
        - shipping_cost
        - marketing_cpa
        - variable_fees
        - data.fixed_fee_per_order;
    let margin_pct = if bundle_price > 0.0 {
        profit / bundle_price * 100.0
    } else {
        0.0
    };
    let discount_pct = if data.sale_price > 0.0 {
        (1.0 - bundle_price / (data.sale_price * units as f64)) * 100.0
    } else {
        0.0
    };

    KitQuote {
        profit,
        margin_pct,
        discount_pct,
    }
}

/// Bundle price for `units` at `discount` (a fraction) off the per-unit list
/// price, rounded to 2 decimals. Used to pre-fill the kit simulator whenever
/// the unit price changes.
pub fn suggested_bundle_price(unit_price: f64, units: u32, discount: f64) -> f64 {
    round2(unit_price * units as f64 * (1.0 - discount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> ProductData {
        ProductData {
            unit_cost: 10.0,
            shipping_cost: 5.0,
            marketing_pct: 25.0,
            sale_price: 30.0,
            ..ProductData::default()
        }
    }

    #[test]
    fn two_unit_kit_at_ten_percent_off() {
        let quote = kit_profit(&sample_product(), 2, 54.0);
        // 54 - goods 20 - shipping 5 - single-unit CPA 7.5
        assert_eq!(quote.profit, 21.5);
        assert!((quote.discount_pct - 10.0).abs() < 1e-9);
        assert!((quote.margin_pct - 21.5 / 54.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn marketing_is_charged_from_the_single_unit_price() {
        let mut data = sample_product();
        let base = kit_profit(&data, 2, 54.0);
        // doubling the bundle price must not change the marketing share
        let wide = kit_profit(&data, 2, 108.0);
        assert_eq!(wide.profit - base.profit, 54.0);
        // but doubling the unit price does
        data.sale_price = 60.0;
        let repriced = kit_profit(&data, 2, 54.0);
        assert_eq!(base.profit - repriced.profit, 7.5);
    }

    #[test]
    fn shipping_and_fixed_fee_are_charged_once() {
        let mut data = sample_product();
        data.fixed_fee_per_order = 2.0;
        let two = kit_profit(&data, 2, 60.0);
        let three = kit_profit(&data, 3, 90.0);
        // going from 2 to 3 units at list price adds exactly one taxed unit
        assert!((three.profit - two.profit - (30.0 - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn import_taxes_uplift_goods_and_shipping() {
        let mut data = sample_product();
        data.import_tax_pct = 50.0;
        data.vat_pct = 50.0;
        let quote = kit_profit(&data, 2, 54.0);
        // goods 10*2*2 = 40, shipping 5*2 = 10, CPA 7.5
        assert_eq!(quote.profit, 54.0 - 40.0 - 10.0 - 7.5);
    }

    #[test]
    fn zero_bundle_price_guards_margin() {
        let quote = kit_profit(&sample_product(), 2, 0.0);
        assert_eq!(quote.margin_pct, 0.0);
        assert_eq!(quote.discount_pct, 100.0);
    }

    #[test]
    fn zero_unit_price_guards_discount() {
        let mut data = sample_product();
        data.sale_price = 0.0;
        let quote = kit_profit(&data, 2, 54.0);
        assert_eq!(quote.discount_pct, 0.0);
    }

    #[test]
    fn undiscounted_bundles_report_nonpositive_discount() {
        let quote = kit_profit(&sample_product(), 2, 66.0);
        assert!(quote.discount_pct < 0.0);
    }

    #[test]
    fn suggested_prices_round_to_cents() {
        assert_eq!(suggested_bundle_price(30.0, 2, TWO_UNIT_DISCOUNT), 54.0);
        assert_eq!(suggested_bundle_price(30.0, 3, THREE_UNIT_DISCOUNT), 76.5);
        assert_eq!(suggested_bundle_price(19.99, 2, TWO_UNIT_DISCOUNT), 35.98);
    }
}
