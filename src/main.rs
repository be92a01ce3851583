//! CLI for ECDSA nonce-delta key recovery

use anyhow::Result;
use clap::{Parser, Subcommand};
use deltak::math::{curve_order, scalar_to_hex_string};
use deltak::provider::load_signature_pair;
use deltak::scan::{scan, ScanConfig, ScanOutcome};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "deltak")]
#[command(about = "ECDSA private key recovery via bounded nonce-delta scanning")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    Scan {
        /// Signature pair as JSON array or CSV with r,s,z header; "-" reads stdin
        #[arg(default_value = "-")]
        input: String,

        /// Bech32 address the recovered key must produce
        #[arg(long)]
        target: String,

        /// Offsets tried around each seed estimate: -range..=range
        #[arg(long, default_value = "10000")]
        range: u32,

        /// Progress line cadence in offset steps; 0 silences progress
        #[arg(long, default_value = "100")]
        progress_every: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(found) => {
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Scan {
            input,
            target,
            range,
            progress_every,
        } => {
            let (first, second) = load_signature_pair(&input)?;

            let config = ScanConfig {
                target_address: target,
                scan_range: range,
                progress_interval: progress_every,
            };

            let n = curve_order();
            let outcome = scan(&first, &second, &n, &config)?;

            let output = format_output(&outcome, &config, cli.json)?;
            println!("{}", output);

            Ok(matches!(outcome, ScanOutcome::Found { .. }))
        }
    }
}

#[derive(Serialize)]
struct ScanReport {
    status: String,
    target_address: String,
    scan_range: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates_tested: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recovered_key: Option<RecoveredKeyOutput>,
}

#[derive(Serialize)]
struct RecoveredKeyOutput {
    private_key_hex: String,
    public_key_hex: String,
    address: String,
    offset: i64,
}

fn format_output(outcome: &ScanOutcome, config: &ScanConfig, json: bool) -> Result<String> {
    let report = match outcome {
        ScanOutcome::Found { offset, key } => ScanReport {
            status: "found".to_string(),
            target_address: config.target_address.clone(),
            scan_range: config.scan_range,
            candidates_tested: None,
            recovered_key: Some(RecoveredKeyOutput {
                private_key_hex: scalar_to_hex_string(&key.private_key),
                public_key_hex: hex::encode(key.public_key),
                address: key.address.clone(),
                offset: *offset,
            }),
        },
        ScanOutcome::NotFound { candidates_tested } => ScanReport {
            status: "not-found".to_string(),
            target_address: config.target_address.clone(),
            scan_range: config.scan_range,
            candidates_tested: Some(*candidates_tested),
            recovered_key: None,
        },
    };

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        let mut output = String::new();
        output.push_str(&format!("Target: {}\n", report.target_address));
        output.push_str(&format!("Scan range: +/-{}\n\n", report.scan_range));

        match &report.recovered_key {
            Some(key) => {
                output.push_str("Key found!\n");
                output.push_str(&format!("  Private Key (hex): {}\n", key.private_key_hex));
                output.push_str(&format!("  Public Key: {}\n", key.public_key_hex));
                output.push_str(&format!("  Address: {}\n", key.address));
                output.push_str(&format!("  Offset: {}\n", key.offset));
            }
            None => {
                output.push_str("No matching key in the scanned range.\n");
                if let Some(tested) = report.candidates_tested {
                    output.push_str(&format!("  Candidates tested: {}\n", tested));
                }
            }
        }

        Ok(output)
    }
}
