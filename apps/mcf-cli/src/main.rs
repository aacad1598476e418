use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use mcf_solver::{MinCostFlow, Objective, SolverConfig, solve_assignment};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

use report::{AssignmentReport, CliResult, SolveReport};

#[derive(Parser)]
#[command(name = "mcf-cli")]
#[command(about = "Minimum-cost maximum-flow solver", long_about = None)]
struct Cli {
    /// Log solver progress (repeat for per-augmentation detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a problem file's syntax and references
    Validate {
        /// Path to the problem file (.yaml, .yml or .json)
        problem_path: PathBuf,
    },
    /// Solve a flow problem
    Solve {
        /// Path to the problem file (.yaml, .yml or .json)
        problem_path: PathBuf,
        /// Stop after delivering this much flow (overrides the file)
        #[arg(long)]
        flow_limit: Option<i64>,
        /// Stop after this many augmenting paths
        #[arg(long)]
        max_augmentations: Option<usize>,
        /// Re-check residual invariants after every augmentation
        #[arg(long)]
        verify: bool,
        /// Print per-edge flows
        #[arg(long)]
        show_flows: bool,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solve a bipartite assignment problem
    Assign {
        /// Path to the assignment file (.yaml, .yml or .json)
        problem_path: PathBuf,
        /// Treat entries as profits (overrides the file)
        #[arg(long)]
        maximize: bool,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { problem_path } => cmd_validate(&problem_path),
        Commands::Solve {
            problem_path,
            flow_limit,
            max_augmentations,
            verify,
            show_flows,
            json,
        } => {
            let overrides = SolveOverrides {
                flow_limit,
                max_augmentations,
                verify,
            };
            cmd_solve(&problem_path, &overrides, show_flows, json)
        }
        Commands::Assign {
            problem_path,
            maximize,
            json,
        } => cmd_assign(&problem_path, maximize, json),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct SolveOverrides {
    flow_limit: Option<i64>,
    max_augmentations: Option<usize>,
    verify: bool,
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    let problem = mcf_problem::load_problem(path)?;
    let network = problem.to_network()?;
    println!("✓ {} is valid", path.display());
    println!(
        "  {} nodes, {} edges, {} -> {}",
        network.graph.node_count(),
        network.graph.edge_count() / 2,
        problem.source,
        problem.sink
    );
    Ok(())
}

fn cmd_solve(
    path: &Path,
    overrides: &SolveOverrides,
    show_flows: bool,
    json: bool,
) -> CliResult<()> {
    let problem = mcf_problem::load_problem(path)?;
    let network = problem.to_network()?;

    let mut config: SolverConfig = network.config();
    if overrides.flow_limit.is_some() {
        config.flow_limit = overrides.flow_limit;
    }
    config.max_augmentations = overrides.max_augmentations;
    config.verify_invariants = overrides.verify;

    let start = Instant::now();
    let mut solver = MinCostFlow::new(network.graph);
    let outcome = solver.run_with(network.source, network.sink, &config)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "solve finished");

    let report = SolveReport::new(
        problem.name.clone(),
        &network.labels,
        network.source,
        network.sink,
        &outcome,
        show_flows.then(|| solver.graph().edge_flows()),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }
    Ok(())
}

fn cmd_assign(path: &Path, maximize: bool, json: bool) -> CliResult<()> {
    let def = mcf_problem::load_assignment(path)?;
    let objective = if maximize || def.maximize {
        Objective::Maximize
    } else {
        Objective::Minimize
    };

    let assignment = solve_assignment(&def.costs, objective)?;
    let report = AssignmentReport::new(objective, &assignment);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }
    Ok(())
}
