pub mod export;
pub mod format;
pub mod input;
pub mod persistence;

pub use export::{history_csv, ExportError, EXPORT_FILENAME, EXPORT_HEADER};
pub use format::format_amount;
pub use input::parse_number_or_zero;
pub use persistence::{PersistSaveError, Store};
