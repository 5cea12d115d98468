use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use qve_core::config::Config;
use qve_core::report::{self, analyze, supported_algorithms, AnalysisRequest, ErrorBody};
use qve_core::{Estimator, ModelParams};

#[derive(Parser)]
#[command(name = "qve")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Estimate quantum attack costs for one algorithm")]
    Analyze {
        #[arg(value_name = "ALGORITHM")]
        algorithm: String,
        #[arg(long)]
        key_size: Option<i64>,
        #[arg(long)]
        number_to_factor: Option<String>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, default_value_t = ModelParams::default().noise_overhead_factor)]
        noise_overhead: f64,
        #[arg(long, default_value_t = ModelParams::default().max_addressable_qubits)]
        max_qubits: u32,
    },
    #[command(about = "List the supported algorithm names")]
    Algorithms {
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Estimate every supported algorithm at its conventional key size")]
    Survey {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, default_value_t = ModelParams::default().noise_overhead_factor)]
        noise_overhead: f64,
        #[arg(long, default_value_t = ModelParams::default().max_addressable_qubits)]
        max_qubits: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Analyze {
            algorithm,
            key_size,
            number_to_factor,
            json,
            config,
            profile,
            noise_overhead,
            max_qubits,
        } => run_analyze(
            algorithm,
            key_size,
            number_to_factor,
            json,
            config.as_deref(),
            profile.as_deref(),
            noise_overhead,
            max_qubits,
        ),
        Command::Algorithms { json } => run_algorithms(json),
        Command::Survey {
            json,
            config,
            profile,
            noise_overhead,
            max_qubits,
        } => run_survey(
            json,
            config.as_deref(),
            profile.as_deref(),
            noise_overhead,
            max_qubits,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    algorithm: String,
    key_size: Option<i64>,
    number_to_factor: Option<String>,
    json: bool,
    config: Option<&Path>,
    profile: Option<&str>,
    noise_overhead: f64,
    max_qubits: u32,
) -> Result<()> {
    let params = build_params(config, profile, noise_overhead, max_qubits)?;
    let estimator = Estimator::with_params(qve_models::default_models(), params);
    let request = AnalysisRequest {
        algorithm,
        key_size,
        number_to_factor,
    };
    match analyze(&estimator, &request) {
        Ok(response) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                report::print_human(&response);
            }
            Ok(())
        }
        Err(err) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorBody::from_error(&err))?
                );
            }
            Err(err.into())
        }
    }
}

fn run_algorithms(json: bool) -> Result<()> {
    let table = supported_algorithms();
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    println!("{:<12} {:<22} {:>18}", "name", "kind", "conventional bits");
    for entry in table {
        println!(
            "{:<12} {:<22} {:>18}",
            entry.name,
            entry.kind.as_str(),
            entry.conventional_key_bits
        );
    }
    Ok(())
}

fn run_survey(
    json: bool,
    config: Option<&Path>,
    profile: Option<&str>,
    noise_overhead: f64,
    max_qubits: u32,
) -> Result<()> {
    let params = build_params(config, profile, noise_overhead, max_qubits)?;
    let estimator = Estimator::with_params(qve_models::default_models(), params);
    let mut responses = Vec::new();
    for entry in supported_algorithms() {
        let request = AnalysisRequest {
            algorithm: entry.name.to_string(),
            key_size: Some(i64::from(entry.conventional_key_bits)),
            number_to_factor: None,
        };
        responses.push(analyze(&estimator, &request)?);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
        return Ok(());
    }
    println!(
        "{:<12} {:>6} {:>9} {:>9} {:>22} {:>22}",
        "algorithm", "bits", "perfect", "current", "perfect time", "current time"
    );
    for response in &responses {
        println!(
            "{:<12} {:>6} {:>9.1} {:>9.1} {:>22} {:>22}",
            response.algorithm,
            response.key_size,
            response.perfect_quantum.vulnerability_score,
            response.current_quantum.vulnerability_score,
            report::format_seconds(
                response.perfect_quantum.time_to_break,
                response.perfect_quantum.exceeds_range
            ),
            report::format_seconds(
                response.current_quantum.time_to_break,
                response.current_quantum.exceeds_range
            ),
        );
    }
    Ok(())
}

fn build_params(
    config: Option<&Path>,
    profile: Option<&str>,
    noise_overhead: f64,
    max_qubits: u32,
) -> Result<ModelParams> {
    if noise_overhead < 1.0 {
        return Err(anyhow!("--noise-overhead must be at least 1"));
    }
    if max_qubits == 0 {
        return Err(anyhow!("--max-qubits must be positive"));
    }
    let mut params = ModelParams {
        noise_overhead_factor: noise_overhead,
        max_addressable_qubits: max_qubits,
        ..ModelParams::default()
    };
    if let Some(path) = config {
        let cfg = Config::load(path)?;
        cfg.apply(&mut params, profile);
    }
    Ok(params)
}
