use anyhow::Result;
use audit_extract_config::Config;
use audit_extract_engine::io;
use std::{env, path::PathBuf, process};

mod batch;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <report.txt|reports-dir>...", args[0]);
        eprintln!(
            "Writes one <name>_findings.csv per report; set output_dir in {} to redirect them",
            Config::config_path().display()
        );
        process::exit(1);
    }

    let output_dir = match Config::load() {
        Ok(Some(config)) => config.output_dir,
        Ok(None) => None,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Directory arguments expand to the report documents inside them.
    let mut files = Vec::new();
    for arg in &args[1..] {
        let path = PathBuf::from(arg);
        if path.is_dir() {
            if let Err(e) = io::validate_input_dir(&path) {
                eprintln!("Error: input path '{}' is invalid: {e}", path.display());
                process::exit(1);
            }
            match io::scan_report_files(&path) {
                Ok(found) => {
                    if found.is_empty() {
                        eprintln!("Warning: no report documents in '{}'", path.display());
                    }
                    files.extend(found);
                }
                Err(e) => {
                    eprintln!("Error: cannot scan '{}': {e}", path.display());
                    process::exit(1);
                }
            }
        } else {
            files.push(path);
        }
    }

    if files.is_empty() {
        eprintln!("Error: nothing to process");
        process::exit(1);
    }

    let summary = batch::run(&files, output_dir.as_deref());

    println!();
    println!(
        "Done: {} processed, {} succeeded, {} failed",
        summary.processed,
        summary.succeeded,
        summary.failed()
    );
    if !summary.failures.is_empty() {
        eprintln!();
        eprintln!("Failed documents:");
        for (path, message) in &summary.failures {
            eprintln!("- {}", path.display());
            eprintln!("  {message}");
        }
        process::exit(1);
    }

    Ok(())
}
