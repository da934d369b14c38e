//! Replay command
//!
//! Usage: changeset replay [--file <PATH>] [--hierarchical] [--format text|json]
//!
//! Without `--file` the built-in demo series is replayed.

use super::{print_json, OutputFormat};
use changeset_core::diff::{render_batch, render_hierarchical_batch, render_script};
use changeset_core::errors::ChangesetError;
use changeset_core::replay::fixtures::{flat_queue, hierarchical_queue};
use changeset_core::replay::{flat_queue_from_json, hierarchical_queue_from_json};
use changeset_core::ReplayQueue;
use changeset_core::{log_op_end, log_op_error, log_op_start};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON replay script: {"initial": ..., "snapshots": [...]}
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Treat snapshots as lists of sections
    #[arg(long)]
    pub hierarchical: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute replay command
pub fn execute(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    log_op_start!("cli_replay", hierarchical = args.hierarchical);
    let start = Instant::now();

    let result = if args.hierarchical {
        load_hierarchical(&args).map(|queue| run_hierarchical(queue, args.format))
    } else {
        load_flat(&args).map(|queue| run_flat(queue, args.format))
    };

    match result {
        Ok(steps) => {
            let steps = steps?;
            log_op_end!(
                "cli_replay",
                duration_ms = start.elapsed().as_millis() as u64,
                step_count = steps
            );
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                "cli_replay",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err.into())
        }
    }
}

fn read_script(args: &ReplayArgs) -> Result<Option<String>, ChangesetError> {
    match &args.file {
        Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
        None => Ok(None),
    }
}

fn load_flat(args: &ReplayArgs) -> Result<ReplayQueue<char>, ChangesetError> {
    match read_script(args)? {
        Some(json) => flat_queue_from_json(&json),
        None => Ok(flat_queue()),
    }
}

fn load_hierarchical(args: &ReplayArgs) -> Result<ReplayQueue<Vec<char>>, ChangesetError> {
    match read_script(args)? {
        Some(json) => hierarchical_queue_from_json(&json),
        None => Ok(hierarchical_queue()),
    }
}

fn run_flat(
    mut queue: ReplayQueue<char>,
    format: OutputFormat,
) -> Result<usize, Box<dyn std::error::Error>> {
    let total = queue.remaining();
    let steps = queue.drain();

    match format {
        OutputFormat::Json => print_json(&steps)?,
        OutputFormat::Text => {
            for step in &steps {
                println!("step {} of {}", step.step, total);
                print!("{}", render_script(&step.edits));
                print!("{}", render_batch(&step.batch));
            }
            println!("final: {}", queue.current().iter().collect::<String>());
        }
    }

    Ok(steps.len())
}

fn run_hierarchical(
    mut queue: ReplayQueue<Vec<char>>,
    format: OutputFormat,
) -> Result<usize, Box<dyn std::error::Error>> {
    let total = queue.remaining();
    let steps = queue.drain_hierarchical();

    match format {
        OutputFormat::Json => print_json(&steps)?,
        OutputFormat::Text => {
            for step in &steps {
                println!("step {} of {}", step.step, total);
                print!("{}", render_hierarchical_batch(&step.batch));
            }
            let sections: Vec<String> = queue
                .current()
                .iter()
                .map(|rows| rows.iter().collect())
                .collect();
            println!("final: {:?}", sections);
        }
    }

    Ok(steps.len())
}
