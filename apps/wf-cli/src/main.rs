use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wf_core::NodeId;
use wf_graph::Graph;
use wf_plan::{Planner, Profile, ReductionPlan};
use wf_route::{route, within_budget};

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "Wayfare CLI - travel route costing and trip budgeting tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file
    Validate {
        /// Path to the network YAML file
        network_path: PathBuf,
    },
    /// List the places in the network
    Nodes {
        /// Network YAML file (defaults to the built-in sample network)
        #[arg(long)]
        network: Option<PathBuf>,
    },
    /// Cheapest route between two places
    Route {
        /// Starting place
        source: String,
        /// Destination place
        target: String,
        /// Network YAML file (defaults to the built-in sample network)
        #[arg(long)]
        network: Option<PathBuf>,
    },
    /// All destinations reachable within a budget
    Reachable {
        /// Starting place
        source: String,
        /// Inclusive cost ceiling
        budget: u64,
        /// Network YAML file (defaults to the built-in sample network)
        #[arg(long)]
        network: Option<PathBuf>,
    },
    /// Build a savings plan for a trip and write the report to a file
    Plan {
        /// Starting place
        source: String,
        /// Destination place
        target: String,
        /// Monthly income
        #[arg(long)]
        income: f64,
        /// Annual income growth rate (e.g. 0.05 for 5%)
        #[arg(long, default_value_t = 0.0)]
        growth_rate: f64,
        /// Fixed monthly costs (rent, utilities)
        #[arg(long, default_value_t = 0.0)]
        fixed_costs: f64,
        /// Variable cost category as name=amount (repeatable)
        #[arg(long = "cost", value_parser = parse_cost)]
        costs: Vec<(String, f64)>,
        /// Number of months to save over
        #[arg(long)]
        months: u32,
        /// Estimated trip cost, used when no route exists
        #[arg(long)]
        fallback_cost: Option<f64>,
        /// Report output path
        #[arg(short, long, default_value = "financial_advice.txt")]
        output: PathBuf,
        /// Network YAML file (defaults to the built-in sample network)
        #[arg(long)]
        network: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("No route from {src} to {target}; pass --fallback-cost to plan anyway")]
    NoRoute { src: String, target: String },

    #[error(transparent)]
    Project(#[from] wf_project::ProjectError),

    #[error(transparent)]
    Plan(#[from] wf_plan::PlanError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Nodes { network } => cmd_nodes(network.as_deref()),
        Commands::Route {
            source,
            target,
            network,
        } => cmd_route(network.as_deref(), &source, &target),
        Commands::Reachable {
            source,
            budget,
            network,
        } => cmd_reachable(network.as_deref(), &source, budget),
        Commands::Plan {
            source,
            target,
            income,
            growth_rate,
            fixed_costs,
            costs,
            months,
            fallback_cost,
            output,
            network,
        } => cmd_plan(PlanArgs {
            network: network.as_deref(),
            source,
            target,
            income,
            growth_rate,
            fixed_costs,
            costs,
            months,
            fallback_cost,
            output,
        }),
    }
}

fn parse_cost(s: &str) -> Result<(String, f64), String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=amount, got '{s}'"))?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| format!("invalid amount in '{s}'"))?;
    Ok((name.to_string(), amount))
}

/// Load a network file, or fall back to the built-in sample.
fn load_graph(network: Option<&Path>) -> Result<Graph, CliError> {
    let def = match network {
        Some(path) => wf_project::load_network(path)?,
        None => wf_project::sample_network(),
    };
    Ok(wf_project::build_graph(&def)?)
}

fn format_path(graph: &Graph, path: &[NodeId]) -> String {
    path.iter()
        .filter_map(|&n| graph.node(n).map(|node| node.name.as_str()))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn cmd_validate(network_path: &Path) -> Result<(), CliError> {
    println!("Validating network: {}", network_path.display());
    let def = wf_project::load_network(network_path)?;
    let graph = wf_project::build_graph(&def)?;
    println!(
        "✓ Network '{}' is valid ({} nodes, {} edges)",
        def.name,
        graph.node_count(),
        def.edges.len()
    );
    Ok(())
}

fn cmd_nodes(network: Option<&Path>) -> Result<(), CliError> {
    let graph = load_graph(network)?;
    if graph.nodes().is_empty() {
        println!("No places in network");
    } else {
        println!("Places in network:");
        for node in graph.nodes() {
            println!("  {} ({} connections)", node.name, graph.neighbors(node.id).len());
        }
    }
    Ok(())
}

fn cmd_route(network: Option<&Path>, source: &str, target: &str) -> Result<(), CliError> {
    let graph = load_graph(network)?;

    // Unknown names behave like places with no connections: no route.
    let found = graph
        .node_by_name(source)
        .zip(graph.node_by_name(target))
        .and_then(|(s, t)| route(&graph, s, t));

    match found {
        Some(r) => {
            println!("Shortest path from {source} to {target} costs: ${}", r.cost);
            println!("Path: {}", format_path(&graph, &r.path));
        }
        None => println!("No path exists from {source} to {target}"),
    }
    Ok(())
}

fn cmd_reachable(network: Option<&Path>, source: &str, budget: u64) -> Result<(), CliError> {
    let graph = load_graph(network)?;

    let dests = match graph.node_by_name(source) {
        Some(s) => within_budget(&graph, s, budget),
        None => Vec::new(),
    };

    println!("Destinations within budget of ${budget}:");
    if dests.is_empty() {
        println!("  (none)");
    }
    for dest in dests {
        let name = graph.node(dest.node).map(|n| n.name.as_str()).unwrap_or("?");
        println!(
            "  - {}: ${} (Path: {})",
            name,
            dest.cost,
            format_path(&graph, &dest.path)
        );
    }
    Ok(())
}

struct PlanArgs<'a> {
    network: Option<&'a Path>,
    source: String,
    target: String,
    income: f64,
    growth_rate: f64,
    fixed_costs: f64,
    costs: Vec<(String, f64)>,
    months: u32,
    fallback_cost: Option<f64>,
    output: PathBuf,
}

fn cmd_plan(args: PlanArgs<'_>) -> Result<(), CliError> {
    let graph = load_graph(args.network)?;
    let found = graph
        .node_by_name(&args.source)
        .zip(graph.node_by_name(&args.target))
        .and_then(|(s, t)| route(&graph, s, t));

    let mut report = String::new();
    let trip_budget = match &found {
        Some(r) => {
            report.push_str(&format!(
                "Shortest path from {} to {} costs: ${}\n",
                args.source, args.target, r.cost
            ));
            report.push_str(&format!("Path: {}\n", format_path(&graph, &r.path)));
            r.cost as f64
        }
        None => {
            report.push_str(&format!(
                "No path exists from {} to {}\n",
                args.source, args.target
            ));
            args.fallback_cost.ok_or(CliError::NoRoute {
                src: args.source.clone(),
                target: args.target.clone(),
            })?
        }
    };

    let planner = Planner::new(
        Profile {
            monthly_income: args.income,
            annual_growth_rate: args.growth_rate,
            fixed_costs: args.fixed_costs,
            variable_costs: args.costs,
            planning_months: args.months,
        },
        trip_budget,
    )?;

    render_breakdown(&mut report, &planner);
    render_cash_flow(&mut report, &planner);
    render_reduction(&mut report, &planner);

    std::fs::write(&args.output, &report)?;
    println!("Financial advice saved to '{}'", args.output.display());
    Ok(())
}

fn render_breakdown(report: &mut String, planner: &Planner) {
    let profile = planner.profile();
    let breakdown = planner.spending_breakdown();

    report.push_str("\n=========== Current Spending Breakdown ===========\n");
    report.push_str(&format!("Monthly Income: ${:.2}\n", profile.monthly_income));
    report.push_str(&format!("Fixed Costs: ${:.2}\n", profile.fixed_costs));
    report.push_str("Variable Costs:\n");
    for (name, cost) in &profile.variable_costs {
        report.push_str(&format!(" - {name}: ${cost:.2}\n"));
    }
    report.push_str(&format!("Total Spending: ${:.2}\n", breakdown.total_spending));
    report.push_str(&format!("Current Savings: ${:.2}\n", breakdown.savings));
}

fn render_cash_flow(report: &mut String, planner: &Planner) {
    report.push_str("\n=========== Projected Cash Flow ===========\n");
    report.push_str(&format!("{:>10}{:>20}\n", "Month", "Savings ($)"));
    report.push_str("-------------------------------------------\n");
    for entry in planner.cash_flow() {
        report.push_str(&format!("{:>10}{:>20.2}\n", entry.month, entry.savings));
    }
}

fn render_reduction(report: &mut String, planner: &Planner) {
    let profile = planner.profile();
    report.push_str("\n=========== Maximum Achievable Reduction ===========\n");
    report.push_str(&format!(
        "Trip Goal: ${:.2} in {} months.\n",
        planner.trip_budget(),
        profile.planning_months
    ));

    match planner.reduction_plan() {
        ReductionPlan::GoalMet {
            required_monthly,
            current_monthly,
        } => {
            report.push_str(&format!(
                "Required Monthly Savings: ${required_monthly:.2}\n"
            ));
            report.push_str(&format!(
                "Current Monthly Savings: ${current_monthly:.2}\n"
            ));
            report.push_str(
                "Congratulations! Your current savings are sufficient to meet your trip goal.\n",
            );
        }
        ReductionPlan::Proportional {
            required_monthly,
            current_monthly,
            shortfall,
            cuts,
        } => {
            report.push_str(&format!(
                "Required Monthly Savings: ${required_monthly:.2}\n"
            ));
            report.push_str(&format!(
                "Current Monthly Savings: ${current_monthly:.2}\n"
            ));
            report.push_str(&format!("Additional Reduction Needed: ${shortfall:.2}\n"));
            report.push_str("The goal can be met by reducing the following costs proportionally:\n");
            for cut in cuts {
                report.push_str(&format!(
                    " - {}: Reduce by ${:.2} ({:.1}% of the original cost)\n",
                    cut.category,
                    cut.amount,
                    cut.fraction_of_original * 100.0
                ));
            }
        }
        ReductionPlan::Infeasible {
            shortfall,
            max_reduction,
        } => {
            report.push_str(&format!("Additional Reduction Needed: ${shortfall:.2}\n"));
            report.push_str(&format!(
                "Maximum Achievable Reduction: ${max_reduction:.2}\n"
            ));
            report.push_str(
                "Warning: Maximum achievable reduction is insufficient to meet your goal.\n",
            );
            report.push_str("Consider reducing fixed costs or increasing income.\n");
        }
    }
}
