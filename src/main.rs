use clap::Parser;
use matrix_astar::{AStar, FrontierKind, GoalPolicy, SearchProblem};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run an A* search described by a JSON problem file
#[derive(Parser, Debug)]
#[command(name = "matrix-astar")]
#[command(about = "A* search over a cost matrix and heuristic table", long_about = None)]
struct Args {
    /// Path to the problem file (cost, heuristic, start, goals, optional config)
    #[arg(short, long)]
    problem: PathBuf,

    /// Override the goal selection policy
    #[arg(long, value_enum)]
    policy: Option<GoalPolicy>,

    /// Override the frontier implementation
    #[arg(long, value_enum)]
    frontier: Option<FrontierKind>,

    /// Override node numbering: true reserves row/column 0, false numbers from 0
    #[arg(long)]
    one_indexed: Option<bool>,

    /// Abort after this many frontier extractions
    #[arg(long)]
    max_expansions: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "search failed");
            ExitCode::FAILURE
        }
    }
}

/// Fold command line overrides into the problem and build its planner
fn apply_overrides(args: &Args, problem: &mut SearchProblem) -> AStar {
    if let Some(one_indexed) = args.one_indexed {
        problem.one_indexed = one_indexed;
    }

    let mut config = problem.config.clone();
    if let Some(policy) = args.policy {
        config = config.goal_policy(policy);
    }
    if let Some(kind) = args.frontier {
        config = config.frontier(kind);
    }
    if let Some(max) = args.max_expansions {
        config = config.max_expansions(max);
    }
    AStar::new(config)
}

fn run(args: &Args) -> matrix_astar::Result<()> {
    let mut problem: SearchProblem = SearchProblem::from_json_file(&args.problem)?;
    let a_star = apply_overrides(args, &mut problem);
    let matrix = problem.matrix()?;

    info!(
        start = problem.start,
        goals = ?problem.goals,
        nodes = matrix.nodes().len(),
        one_indexed = matrix.one_indexed(),
        config = ?a_star.config(),
        "running search"
    );
    let outcome = a_star.plan(&matrix, problem.start, &problem.goals)?;

    match outcome.cost {
        Some(cost) => info!(cost, expanded = outcome.expanded, candidates = outcome.goal_candidates, "path found"),
        None => info!(expanded = outcome.expanded, "no path found"),
    }

    // stdout carries only the path, as a JSON array
    println!("{}", serde_json::to_string(&outcome.path)?);
    Ok(())
}
