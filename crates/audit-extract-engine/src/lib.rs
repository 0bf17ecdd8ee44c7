pub mod export;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use export::{ExportError, SpreadsheetRow, write_spreadsheet};
pub use io::*;
pub use models::{FindingRecord, ManagementReply};
pub use parsing::{Context, LineClassifier, LineKind, RecordAccumulator, extract_findings};
