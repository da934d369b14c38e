//! Sections command
//!
//! Usage: changeset sections <ORIGIN> <DESTINATION> [--separator ,] [--format text|json]
//!
//! Each argument is a list of sections joined by the separator; every
//! character of a section is one row. An empty argument means no sections.

use super::{print_json, OutputFormat};
use changeset_core::diff::{edit_distance, render_hierarchical_batch, EditOperation};
use changeset_core::{compute_edits, translate_hierarchical, HierarchicalBatchDescriptor};
use changeset_core::{log_op_end, log_op_start};
use clap::Args;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Sections before the change, e.g. "123,ab"
    pub origin: String,

    /// Sections after the change, e.g. "ab,1234"
    pub destination: String,

    /// Separator between sections
    #[arg(long, default_value = ",")]
    pub separator: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One section-level edit, with sections shown as strings
#[derive(Debug, Serialize)]
struct SectionEdit {
    kind: &'static str,
    origin: Option<usize>,
    destination: Option<usize>,
    section: String,
}

#[derive(Debug, Serialize)]
struct SectionsReport {
    distance: usize,
    edits: Vec<SectionEdit>,
    batch: HierarchicalBatchDescriptor,
}

fn split_sections(input: &str, separator: &str) -> Vec<Vec<char>> {
    if input.is_empty() {
        return Vec::new();
    }
    input
        .split(separator)
        .map(|section| section.chars().collect())
        .collect()
}

/// Execute sections command
pub fn execute(args: SectionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.separator.is_empty() {
        return Err("Separator must not be empty".into());
    }

    let origin = split_sections(&args.origin, &args.separator);
    let destination = split_sections(&args.destination, &args.separator);

    log_op_start!(
        "cli_sections",
        origin_len = origin.len(),
        destination_len = destination.len()
    );
    let start = Instant::now();

    let edits = compute_edits(&origin, &destination);
    let batch = translate_hierarchical(&edits);
    let report = SectionsReport {
        distance: edit_distance(&origin, &destination),
        edits: edits
            .iter()
            .map(|edit| SectionEdit {
                kind: edit.kind(),
                origin: edit.origin(),
                destination: edit.destination(),
                section: match &edit.operation {
                    EditOperation::Substitution { old_value, .. } => format!(
                        "{} -> {}",
                        old_value.iter().collect::<String>(),
                        edit.value.iter().collect::<String>()
                    ),
                    _ => edit.value.iter().collect(),
                },
            })
            .collect(),
        batch,
    };

    log_op_end!(
        "cli_sections",
        duration_ms = start.elapsed().as_millis() as u64,
        edit_count = report.edits.len()
    );

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            println!("distance: {}", report.distance);
            println!("section edits:");
            if report.edits.is_empty() {
                println!("_No changes._");
            }
            for edit in &report.edits {
                println!("- {} {:?}{}", edit.kind, edit.section, positions(edit));
            }
            println!("batch:");
            print!("{}", render_hierarchical_batch(&report.batch));
        }
    }

    Ok(())
}

fn positions(edit: &SectionEdit) -> String {
    match (edit.origin, edit.destination) {
        (Some(origin), Some(destination)) => {
            format!(" from origin {} to destination {}", origin, destination)
        }
        (Some(origin), None) => format!(" at origin {}", origin),
        (None, Some(destination)) => format!(" at destination {}", destination),
        (None, None) => String::new(),
    }
}
