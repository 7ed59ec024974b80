use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sshmon_wizard::error::PayloadError;
use sshmon_wizard::{stage, Python3Probe, StagePayload, WizardSettings};

#[derive(Parser, Debug)]
#[command(name = "sshmon-wizard")]
#[command(about = "Compile Windows-over-SSH monitoring checks from wizard stage payloads")]
struct Args {
    /// Path to the stage payload (JSON object of form fields); reads stdin
    /// when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to a settings TOML file (probe command, icon image)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a stage submission; failures are reported, not fatal
    Validate {
        /// Wizard stage number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        stage: u8,
    },
    /// Prepare the payload carried into the given stage
    Prepare {
        /// Wizard stage number
        #[arg(value_parser = clap::value_parser!(u8).range(2..=3))]
        stage: u8,
    },
    /// Compile the final payload into monitoring-object records
    Objects {
        /// The monitoring engine already has a host object with this name
        #[arg(long)]
        host_exists: bool,
    },
}

/// Validation result shape written to stdout.
#[derive(Debug, Serialize)]
struct ValidationReport {
    ok: bool,
    errors: Vec<String>,
    /// Round-trip payload, present when validation repairs data (stage 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<StagePayload>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = WizardSettings::load(args.settings.as_deref())?;
    let payload = read_payload(args.input.as_deref())?;

    match args.command {
        Command::Validate { stage: number } => {
            debug!(stage = number, "validating stage payload");
            let report = match number {
                1 => {
                    let probe = Python3Probe::from_settings(&settings);
                    let outcome = stage::stage1_validate(&payload, &probe);
                    ValidationReport {
                        ok: outcome.is_ok(),
                        errors: outcome.into_errors(),
                        payload: None,
                    }
                }
                2 => {
                    let (fixed, outcome) = stage::stage2_validate(&payload);
                    ValidationReport {
                        ok: outcome.is_ok(),
                        errors: outcome.into_errors(),
                        payload: Some(fixed),
                    }
                }
                _ => {
                    let outcome = sshmon_wizard::validate::validate_stage3();
                    ValidationReport {
                        ok: outcome.is_ok(),
                        errors: outcome.into_errors(),
                        payload: None,
                    }
                }
            };
            write_json(&report, args.pretty)
        }
        Command::Prepare { stage: number } => {
            debug!(stage = number, "preparing stage payload");
            let out = match number {
                2 => stage::stage2_prepare(&payload),
                _ => stage::stage3_prepare(&payload),
            };
            write_json(&out, args.pretty)
        }
        Command::Objects { host_exists } => {
            debug!(host_exists, "compiling monitoring objects");
            let objects = stage::stage_objects(&payload, host_exists, &settings);
            write_json(&objects, args.pretty)
        }
    }
}

/// Read the stage payload from a file or stdin.
fn read_payload(path: Option<&std::path::Path>) -> Result<StagePayload, PayloadError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if raw.trim().is_empty() {
        return Ok(StagePayload::new());
    }
    Ok(serde_json::from_str(&raw)?)
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
