//! Diff command
//!
//! Usage: changeset diff <ORIGIN> <DESTINATION> [--no-moves] [--format text|json]

use super::{print_json, OutputFormat};
use changeset_core::diff::{
    edit_distance, edit_script_by, render_batch, render_script, EditScript,
};
use changeset_core::{compute_edits, translate_flat, BatchDescriptor};
use changeset_core::{log_op_end, log_op_start};
use clap::Args;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Sequence before the change
    pub origin: String,

    /// Sequence after the change
    pub destination: String,

    /// Report moves as separate deletions and insertions
    #[arg(long)]
    pub no_moves: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct DiffReport {
    distance: usize,
    edits: EditScript<char>,
    batch: BatchDescriptor,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let origin: Vec<char> = args.origin.chars().collect();
    let destination: Vec<char> = args.destination.chars().collect();

    log_op_start!(
        "cli_diff",
        origin_len = origin.len(),
        destination_len = destination.len()
    );
    let start = Instant::now();

    let edits = if args.no_moves {
        edit_script_by(&origin, &destination, |a, b| a == b)
    } else {
        compute_edits(&origin, &destination)
    };
    let report = DiffReport {
        distance: edit_distance(&origin, &destination),
        batch: translate_flat(&edits, 0),
        edits,
    };

    log_op_end!(
        "cli_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        edit_count = report.edits.len()
    );

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            println!("distance: {}", report.distance);
            println!("edits:");
            print!("{}", render_script(&report.edits));
            println!("batch:");
            print!("{}", render_batch(&report.batch));
        }
    }

    Ok(())
}
