use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use nandsim_engine::{GateArray, RetryBudget};

/// Print the truth table of a NAND gate array described in a RON file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Circuit description
    circuit: PathBuf,

    /// Worker threads used to enumerate rows (overrides the file)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Maximum relaxation passes per row (defaults to gate count + 1)
    #[arg(long)]
    retry_budget: Option<usize>,

    /// Refuse wiring the simulator would otherwise tolerate
    #[arg(long)]
    strict: bool,

    /// List rows that ran out of passes
    #[arg(long)]
    report: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut array = GateArray::load(&cli.circuit)
        .with_context(|| format!("failed to load {}", cli.circuit.display()))?;
    if let Some(threads) = cli.threads {
        array.config_mut().threads = threads;
    }
    if let Some(passes) = cli.retry_budget {
        array.config_mut().retry_budget = RetryBudget::Fixed(passes);
    }

    for issue in array.audit() {
        if cli.strict {
            eprintln!("{}", issue);
        } else {
            warn!("{}", issue);
        }
    }
    if cli.strict {
        array.validate().context("strict wiring check failed")?;
    }

    info!(
        "{}x{} array, {} input(s), {} output(s)",
        array.rows, array.cols, array.inputs, array.outputs
    );
    let table = array.gen_truth_table();
    print!("{}", table);

    if cli.report {
        let unsettled = table.unsettled();
        if unsettled.is_empty() {
            println!("all {} row(s) settled", table.len());
        }
        for index in unsettled {
            println!(
                "row {} did not settle after {} pass(es)",
                index,
                table.reports()[index].convergence.passes()
            );
        }
    }
    Ok(())
}
