use serde::Serialize;
use std::path::Path;

use crate::models::FindingRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write spreadsheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row in the fixed 11-column output schema.
///
/// Field names double as the spreadsheet header row, so their order and
/// spelling are part of the output contract.
#[derive(Debug, Serialize)]
pub struct SpreadsheetRow {
    pub level1_title: String,
    pub level2_title: String,
    pub level3_title: String,
    pub pre_risk_text: String,
    pub risk_text: String,
    pub suggestion_text: String,
    pub response_confirm: String,
    pub response_plan: String,
    pub response_responsible_owner: String,
    pub response_completion_time: String,
    pub response_other: String,
}

impl From<&FindingRecord> for SpreadsheetRow {
    fn from(record: &FindingRecord) -> Self {
        Self {
            level1_title: record.area.clone(),
            level2_title: record.category.clone(),
            level3_title: record.finding.clone(),
            pre_risk_text: record.background.clone(),
            risk_text: record.risk.clone(),
            suggestion_text: record.suggestion.clone(),
            response_confirm: record.reply.confirm.clone(),
            response_plan: record.reply.plan.clone(),
            response_responsible_owner: record.reply.responsible.clone(),
            response_completion_time: record.reply.completion_time.clone(),
            response_other: record.reply.other.clone(),
        }
    }
}

/// Write the extracted records as a spreadsheet with a header row.
pub fn write_spreadsheet(path: &Path, records: &[FindingRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(SpreadsheetRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
