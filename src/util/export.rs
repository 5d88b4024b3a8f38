//! Semicolon-delimited history export.

use crate::domain::History;

/// Column header of the exported file. Field order matches the saved
/// snapshot strings; no quoting or escaping is applied.
pub const EXPORT_HEADER: &str = "Produto;Preco Venda;Lucro;Margem;Data";

/// Suggested name for the downloaded file.
pub const EXPORT_FILENAME: &str = "price_planner_export.csv";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Surfaced to the user as a blocking notification; nothing is written.
    #[error("history is empty")]
    EmptyHistory,
}

/// Render the full history, newest first, as semicolon-delimited text.
pub fn history_csv(history: &History) -> Result<String, ExportError> {
    if history.is_empty() {
        return Err(ExportError::EmptyHistory);
    }

    let mut csv = String::from(EXPORT_HEADER);
    csv.push('\n');
    for item in history.items() {
        csv.push_str(&format!(
            "{};{};{};{};{}\n",
            item.name, item.sale_amount, item.profit, item.margin, item.date_label
        ));
    }
    Ok(csv)
}
