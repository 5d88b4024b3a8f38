//! Session state for one pricing workspace.
//!
//! The embedding UI owns input events, confirmation dialogs, the clipboard
//! and file downloads; this struct owns everything those collaborators need
//! injected: the product inputs, currency and exchange multiplier, ad budget,
//! kit simulator prices, theme, saved history, and the transient support
//! notice. All derived views are pure re-computations.

use time::{Duration, OffsetDateTime};

use super::entities::{Currency, ProductData, Theme};
use super::history::{capture_snapshot, History};
use super::kit::{
    kit_profit, suggested_bundle_price, KitQuote, THREE_UNIT_DISCOUNT, TWO_UNIT_DISCOUNT,
};
use super::pricing::{self, CalculationResults};
use super::scale::{monthly_projection, project_scale, ProjectionRow, ScaleMetrics};

/// Fixed payment-reference key offered for clipboard copy on the support
/// prompt. Opaque to this crate.
pub const SUPPORT_PIX_KEY: &str = "b8e85c5f-973c-4a64-8d9b-7b26e5f620fe";

const SUPPORT_COPIED_NOTICE: &str =
    "CHAVE PIX COPIADA! Cole no seu banco em 'Pix Copia e Cola'.";

/// How long a transient notice stays visible.
pub const NOTICE_TTL: Duration = Duration::seconds(5);

/// A self-clearing status message (clipboard confirmations and the like).
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    text: String,
    shown_at: OffsetDateTime,
}

impl Notice {
    fn new(text: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            text: text.into(),
            shown_at: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now - self.shown_at >= NOTICE_TTL
    }
}

/// One editing session's state. See the module docs for the split of
/// responsibilities between this struct and the embedding UI.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub product: ProductData,
    pub currency: Currency,
    /// Conversion-to-home multiplier; reset to the currency default on
    /// currency change, user-editable afterwards.
    pub exchange_rate: f64,
    pub theme: Theme,
    /// Daily ad budget driving the scale projection.
    pub daily_budget: f64,
    /// Editable bundle prices for the 2- and 3-unit kit simulators,
    /// pre-filled from the unit price.
    pub kit2_price: f64,
    pub kit3_price: f64,
    pub history: History,
    notice: Option<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            product: ProductData::default(),
            currency: Currency::default(),
            exchange_rate: Currency::default().default_exchange_rate(),
            theme: Theme::default(),
            daily_budget: 100.0,
            kit2_price: 0.0,
            kit3_price: 0.0,
            history: History::default(),
            notice: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived metrics for the current inputs. Pure; call freely.
    pub fn results(&self) -> CalculationResults {
        pricing::compute(&self.product)
    }

    /// Scale projection for the current inputs and daily budget.
    pub fn scale(&self) -> ScaleMetrics {
        project_scale(
            &self.results(),
            self.product.marketing_pct,
            self.product.sale_price,
            self.daily_budget,
        )
    }

    /// Monthly projection table rows for the current unit profit.
    pub fn projection(&self) -> Vec<ProjectionRow> {
        monthly_projection(self.results().profit, self.exchange_rate)
    }

    pub fn kit_quote(&self, units: u32, bundle_price: f64) -> KitQuote {
        kit_profit(&self.product, units, bundle_price)
    }

    /// Set the sale price and, when it is positive, refresh the suggested
    /// kit bundle prices from it.
    pub fn set_sale_price(&mut self, price: f64) {
        self.product.sale_price = price;
        if price > 0.0 {
            self.kit2_price = suggested_bundle_price(price, 2, TWO_UNIT_DISCOUNT);
            self.kit3_price = suggested_bundle_price(price, 3, THREE_UNIT_DISCOUNT);
        }
    }

    /// Switch the display currency, resetting the exchange multiplier to the
    /// currency's default.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        self.exchange_rate = currency.default_exchange_rate();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Solve for the sale price that hits `target_margin` and apply it.
    ///
    /// Returns `false` without touching anything when the target is
    /// infeasible (the historical silent no-op; check
    /// [`Session::margin_target_feasible`] first to surface it instead).
    pub fn apply_margin_target(&mut self, target_margin: f64) -> bool {
        match pricing::solve_sale_price(&self.product, target_margin) {
            Some(price) => {
                self.set_sale_price(price);
                true
            }
            None => false,
        }
    }

    pub fn margin_target_feasible(&self, target_margin: f64) -> bool {
        pricing::margin_target_feasible(&self.product, target_margin)
    }

    /// Freeze the current inputs and results into the history.
    pub fn save_snapshot(&mut self, now: OffsetDateTime) {
        let item = capture_snapshot(&self.product, &self.results(), self.currency, now);
        self.history.save(item);
    }

    pub fn delete_snapshot(&mut self, id: i64) -> bool {
        self.history.delete(id)
    }

    /// Clear the inputs and kit prices for a fresh pricing run. Destructive
    /// and without undo; the caller gates this behind an explicit user
    /// confirmation. History, currency, budget and theme are kept.
    pub fn reset(&mut self) {
        self.product = ProductData::default();
        self.kit2_price = 0.0;
        self.kit3_price = 0.0;
    }

    /// Payload for the support clipboard copy. Also raises the transient
    /// confirmation notice; the caller performs the actual clipboard write.
    pub fn copy_support_key(&mut self, now: OffsetDateTime) -> &'static str {
        self.notice = Some(Notice::new(SUPPORT_COPIED_NOTICE, now));
        SUPPORT_PIX_KEY
    }

    /// The current notice text, or `None` once it has expired.
    pub fn active_notice(&self, now: OffsetDateTime) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| !notice.is_expired(now))
            .map(Notice::text)
    }
}
