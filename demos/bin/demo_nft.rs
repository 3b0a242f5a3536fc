//! NFT optimizer demo.
//!
//! Runs the sum-of-cosines benchmark or a VQE ground-state search and prints
//! a summary. Optimizer settings come from defaults, an optional YAML/JSON
//! file, then command-line flags, in that order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nftopt::{IterationEvent, NftConfig};
use tracing_subscriber::EnvFilter;

use nftopt_demos::config::load_config;
use nftopt_demos::problems::molecule_hamiltonian;
use nftopt_demos::runners::{CosineBenchmark, VqeRunner};
use nftopt_demos::{
    DemoError, create_progress_bar, print_header, print_info, print_result, print_section,
    print_success,
};

#[derive(Parser)]
#[command(name = "demo-nft", version, about = "Nakanishi-Fujii-Todo optimizer demos")]
struct Cli {
    /// Optimizer config file (YAML, or JSON with a .json extension)
    #[arg(long, global = true, env = "NFT_CONFIG")]
    config: Option<PathBuf>,

    /// Cap on objective evaluations
    #[arg(long, global = true, env = "NFT_MAX_EVALUATIONS")]
    max_evaluations: Option<usize>,

    /// Forced reset period in iterations (zero or negative disables)
    #[arg(long, global = true, allow_negative_numbers = true, env = "NFT_RESET_INTERVAL")]
    reset_interval: Option<i64>,

    /// Write the result as JSON to this file
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Minimize a sum of cosines over evenly spaced starting angles
    Cosine {
        /// Number of coordinates
        #[arg(long, default_value_t = 100)]
        params: usize,
    },
    /// Find a molecular ground state energy with VQE
    Vqe {
        /// Molecule name (h2, h2-4q)
        #[arg(long, default_value = "h2")]
        molecule: String,

        /// Entangling blocks in the ansatz
        #[arg(long, default_value_t = 1)]
        reps: usize,

        /// Seed for the initial parameters
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

impl Cli {
    /// Layers file settings and flags over the defaults.
    fn optimizer_config(&self, default: NftConfig) -> Result<NftConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => default,
        };
        if let Some(max_evaluations) = self.max_evaluations {
            config.max_evaluations = max_evaluations;
        }
        if let Some(reset_interval) = self.reset_interval {
            config.reset_interval = reset_interval;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(path: &Path, value: &impl serde::Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    print_info(&format!("Result written to {}", path.display()));
    Ok(())
}

fn run_cosine(cli: &Cli, params: usize) -> Result<()> {
    let bench = CosineBenchmark::new(params);
    let config = cli.optimizer_config(bench.config)?;
    let bench = bench.with_config(config);

    print_header("NFT: Sum of Cosines");
    print_result("Coordinates", params);
    print_result("Max evaluations", config.max_evaluations);
    print_result("Reset interval", config.reset_interval);

    let pb = create_progress_bar(config.max_evaluations as u64, "optimizing");
    let progress = |event: &IterationEvent<'_>| pb.set_position(event.evaluations as u64);
    let report = bench.run(progress)?;
    pb.finish_and_clear();

    print_section("Result");
    print_result("Iterations", report.result.nit);
    print_result("Evaluations", report.result.nfev);
    if let Some(fun) = report.result.fun {
        print_result("f(x*)", format!("{fun:.10}"));
    }
    print_result("Max |x mod 2π - π|", format!("{:.3e}", report.max_deviation));
    print_success("Done");

    if let Some(path) = &cli.output {
        write_output(path, &report)?;
    }
    Ok(())
}

fn run_vqe(cli: &Cli, molecule: &str, reps: usize, seed: u64) -> Result<()> {
    let hamiltonian = molecule_hamiltonian(molecule)
        .ok_or_else(|| DemoError::UnknownMolecule(molecule.to_string()))?;
    let exact = hamiltonian.ground_state_energy(5000);

    let runner = VqeRunner::new(hamiltonian).with_reps(reps).with_seed(seed);
    let config = cli.optimizer_config(runner.config)?;
    let runner = runner.with_config(config);

    print_header(&format!("NFT: VQE for {}", molecule.to_uppercase()));
    print_result("Qubits", runner.n_qubits);
    print_result("Parameters", runner.num_parameters());
    print_result("Max evaluations", config.max_evaluations);
    print_result("Reset interval", config.reset_interval);

    let pb = create_progress_bar(config.max_evaluations as u64, "optimizing");
    let progress = |event: &IterationEvent<'_>| {
        pb.set_position(event.evaluations as u64);
        pb.set_message(format!("E = {:.6}", event.fit.min_value()));
    };
    let result = runner.run_observed(runner.initial_params(), progress)?;
    pb.finish_and_clear();

    print_section("Result");
    print_result("Energy", format!("{:.6} Ha", result.optimal_energy));
    print_result("Exact", format!("{:.6} Ha", exact));
    print_result("Error", format!("{:.3e} Ha", result.optimal_energy - exact));
    print_result("Iterations", result.iterations);
    print_result("Circuit evaluations", result.circuit_evaluations);
    print_success("Done");

    if let Some(path) = &cli.output {
        write_output(path, &result)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Cosine { params } => run_cosine(&cli, *params),
        Command::Vqe {
            molecule,
            reps,
            seed,
        } => run_vqe(&cli, molecule, *reps, *seed),
    }
}
