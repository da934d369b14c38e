//! Subcommands and the options they share.

pub mod diff;
pub mod replay;
pub mod sections;

use changeset_core::logging_facility::Profile;
use clap::ValueEnum;
use serde::Serialize;

/// `--log-profile` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Development,
    Production,
    Test,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
            LogProfile::Test => Profile::Test,
        }
    }
}

/// `--format` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let text = serde_json::to_string_pretty(value)
        .map_err(changeset_core::ChangesetError::from)?;
    println!("{}", text);
    Ok(())
}
