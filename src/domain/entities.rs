use serde::{Deserialize, Serialize};

/// Raw pricing inputs for a single product, owned by the editing session.
///
/// Percentage fields are interpreted as `value / 100` at the point of use and
/// are deliberately not clamped to `[0, 100]`; negative or oversized values
/// flow through the arithmetic unchanged. Non-numeric user input never
/// reaches this struct (see [`crate::util::input::parse_number_or_zero`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    /// Free-text product label; no computation depends on it.
    pub name: String,
    pub unit_cost: f64,
    pub shipping_cost: f64,
    pub import_tax_pct: f64,
    pub vat_pct: f64,
    pub checkout_fee_pct: f64,
    pub gateway_fee_pct: f64,
    pub sales_tax_pct: f64,
    /// Reserve for returns and chargebacks, as a share of the sale price.
    pub contingency_pct: f64,
    /// Target share of the sale price reserved for customer acquisition.
    pub marketing_pct: f64,
    pub currency_conversion_pct: f64,
    /// Flat per-order fee in currency, not a percentage.
    pub fixed_fee_per_order: f64,
    /// The free variable: set by the user or by the price solver.
    pub sale_price: f64,
}

impl Default for ProductData {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit_cost: 0.0,
            shipping_cost: 0.0,
            import_tax_pct: 0.0,
            vat_pct: 0.0,
            checkout_fee_pct: 0.0,
            gateway_fee_pct: 0.0,
            sales_tax_pct: 0.0,
            contingency_pct: 0.0,
            marketing_pct: 25.0,
            currency_conversion_pct: 0.0,
            fixed_fee_per_order: 0.0,
            sale_price: 0.0,
        }
    }
}

/// Display currency for the current session.
///
/// BRL is the home currency; the other options carry a default
/// conversion-to-home multiplier the user can edit afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Brl,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL (R$)",
            Currency::Usd => "USD ($)",
            Currency::Eur => "EUR (€)",
            Currency::Gbp => "GBP (£)",
        }
    }

    /// Default exchange-rate-to-home multiplier applied when the currency is
    /// selected. Stays user-editable afterwards; no live rates are fetched.
    pub fn default_exchange_rate(&self) -> f64 {
        match self {
            Currency::Brl => 1.0,
            Currency::Usd => 5.0,
            Currency::Eur => 5.5,
            Currency::Gbp => 6.5,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Currency::Brl)
    }
}

/// UI color scheme, persisted under the `theme` key as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A saved pricing scenario, immutable once captured.
///
/// Profit and margin are frozen as formatted strings at save time; they are
/// not re-derived when the inputs change later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Timestamp-derived id (epoch milliseconds at capture), unique per save.
    pub id: i64,
    pub name: String,
    pub sale_amount: f64,
    /// Profit formatted to 2 decimals, e.g. `"7.50"`.
    pub profit: String,
    /// Margin formatted to 1 decimal with a `%` suffix, e.g. `"25.0%"`.
    pub margin: String,
    pub currency_symbol: String,
    /// Capture date as `DD/MM/YYYY`.
    pub date_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reserve_a_quarter_for_marketing() {
        let data = ProductData::default();
        assert_eq!(data.marketing_pct, 25.0);
        assert_eq!(data.sale_price, 0.0);
        assert_eq!(data.unit_cost, 0.0);
    }

    #[test]
    fn currency_defaults() {
        assert_eq!(Currency::default(), Currency::Brl);
        assert_eq!(Currency::Brl.default_exchange_rate(), 1.0);
        assert_eq!(Currency::Gbp.default_exchange_rate(), 6.5);
        assert_eq!(Currency::Eur.symbol(), "€");
        assert!(Currency::Brl.is_home());
        assert!(!Currency::Usd.is_home());
    }

    #[test]
    fn theme_round_trips_through_its_literals() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
