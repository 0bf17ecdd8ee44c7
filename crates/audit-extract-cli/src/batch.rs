use anyhow::{Context as _, Result, bail};
use std::path::{Path, PathBuf};

use audit_extract_engine::{export, extract_findings, io};

/// Outcome tally for one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    /// One entry per failed document: input path and failure message.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Converts every document in turn. Failures are isolated per document;
/// one bad document never aborts the rest of the batch.
pub fn run(files: &[PathBuf], output_dir: Option<&Path>) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (idx, file) in files.iter().enumerate() {
        println!(
            "Processing ({}/{}): {}",
            idx + 1,
            files.len(),
            file.display()
        );
        summary.processed += 1;

        match convert_document(file, output_dir) {
            Ok(output) => {
                println!("  -> {}", output.display());
                summary.succeeded += 1;
            }
            Err(e) => {
                eprintln!("  failed: {e:#}");
                summary.failures.push((file.clone(), format!("{e:#}")));
            }
        }
    }

    summary
}

/// Parses one document and writes its spreadsheet.
///
/// A document yielding no findings is a failure, not an empty success.
pub fn convert_document(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let lines = io::read_document_lines(input)?;
    let records = extract_findings(&lines);

    if records.is_empty() {
        bail!("no findings extracted, check the document layout");
    }

    let output = output_path(input, output_dir);
    export::write_spreadsheet(&output, &records)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(output)
}

fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let file_name = format!("{stem}_findings.csv");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
