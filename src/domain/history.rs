//! Saved pricing scenarios: capture, cap, and delete-by-id.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use super::entities::{Currency, HistoryItem, ProductData};
use super::pricing::CalculationResults;

/// The history keeps only the most recent saves; older entries are silently
/// dropped.
pub const HISTORY_CAP: usize = 15;

/// Placeholder saved when the product field was left blank.
pub const UNNAMED_PRODUCT: &str = "Produto Sem Nome";

/// Newest-first list of saved scenarios, serialized as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a snapshot at the front and drop anything beyond the cap.
    pub fn save(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_CAP);
    }

    /// Remove exactly the item with the given id, preserving the order of the
    /// rest. Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

/// Freeze the current inputs and results into a [`HistoryItem`].
///
/// Profit and margin are captured as formatted strings; the snapshot is never
/// re-derived. The clock is injected so ids and date labels are deterministic
/// under test.
pub fn capture_snapshot(
    data: &ProductData,
    results: &CalculationResults,
    currency: Currency,
    now: OffsetDateTime,
) -> HistoryItem {
    let name = if data.name.trim().is_empty() {
        UNNAMED_PRODUCT.to_string()
    } else {
        data.name.clone()
    };
    let date_format = format_description!("[day]/[month]/[year]");

    HistoryItem {
        id: (now.unix_timestamp_nanos() / 1_000_000) as i64,
        name,
        sale_amount: data.sale_price,
        profit: format!("{:.2}", results.profit),
        margin: format!("{:.1}%", results.margin),
        currency_symbol: currency.symbol().to_string(),
        date_label: now.format(&date_format).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::compute;
    use time::macros::datetime;

    fn snapshot(id_offset_ms: i64, name: &str) -> HistoryItem {
        HistoryItem {
            id: 1_700_000_000_000 + id_offset_ms,
            name: name.to_string(),
            sale_amount: 30.0,
            profit: "7.50".to_string(),
            margin: "25.0%".to_string(),
            currency_symbol: "R$".to_string(),
            date_label: "06/08/2026".to_string(),
        }
    }

    #[test]
    fn capture_freezes_formatted_strings() {
        let data = ProductData {
            name: "Garrafa Térmica".to_string(),
            unit_cost: 10.0,
            shipping_cost: 5.0,
            marketing_pct: 25.0,
            sale_price: 30.0,
            ..ProductData::default()
        };
        let results = compute(&data);
        let now = datetime!(2026-08-06 15:30:00 UTC);
        let item = capture_snapshot(&data, &results, Currency::Brl, now);

        assert_eq!(item.id, now.unix_timestamp() * 1000);
        assert_eq!(item.name, "Garrafa Térmica");
        assert_eq!(item.sale_amount, 30.0);
        assert_eq!(item.profit, "7.50");
        assert_eq!(item.margin, "25.0%");
        assert_eq!(item.currency_symbol, "R$");
        assert_eq!(item.date_label, "06/08/2026");
    }

    #[test]
    fn capture_falls_back_to_the_placeholder_name() {
        let data = ProductData {
            name: "   ".to_string(),
            sale_price: 10.0,
            ..ProductData::default()
        };
        let results = compute(&data);
        let item = capture_snapshot(
            &data,
            &results,
            Currency::Usd,
            datetime!(2026-01-02 00:00:00 UTC),
        );
        assert_eq!(item.name, UNNAMED_PRODUCT);
        assert_eq!(item.currency_symbol, "$");
        assert_eq!(item.date_label, "02/01/2026");
    }

    #[test]
    fn saving_past_the_cap_evicts_the_oldest() {
        let mut history = History::default();
        for i in 0..16 {
            history.save(snapshot(i, &format!("item {i}")));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        // newest first, the very first save fell off the end
        assert_eq!(history.items()[0].name, "item 15");
        assert_eq!(history.items()[14].name, "item 1");
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut history = History::default();
        for i in 0..5 {
            history.save(snapshot(i, &format!("item {i}")));
        }
        assert!(history.delete(1_700_000_000_002));
        assert_eq!(history.len(), 4);
        let names: Vec<&str> = history.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["item 4", "item 3", "item 1", "item 0"]);
        // deleting an unknown id is a no-op
        assert!(!history.delete(42));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn history_serializes_as_a_bare_array() {
        let mut history = History::default();
        history.save(snapshot(0, "only"));
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.starts_with('['));
        let restored: History = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
