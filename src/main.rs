use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use seat_planner::allocation::allocate_roster;
use seat_planner::config::{AllocateArgs, Cli, Command};
use seat_planner::display::{print_assignment, write_assignment_to_file};
use seat_planner::error::AppError;
use seat_planner::logging;
use seat_planner::web::{self, AllocateRequest};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    match cli.command {
        Command::Serve(args) => {
            let config = args.into_config()?;
            println!("Access the API at http://localhost:{}/api/health", config.port);
            web::start_server(config).await?;
        }
        Command::Allocate(args) => run_allocation(args)?,
    }

    Ok(())
}

fn run_allocation(args: AllocateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.request)?;
    let request: AllocateRequest = serde_json::from_str(&raw)?;
    info!(
        members = request.members.len(),
        groups = request.groups.len(),
        "loaded roster from {}",
        args.request.display()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = allocate_roster(&request.members, &request.groups, args.max_per_team, &mut rng)?;

    print_assignment(&outcome.teams, &outcome.report);

    if let Some(path) = &args.output {
        write_assignment_to_file(&outcome.teams, &request.groups, path)?;
        println!("Seating saved to {}", path.display());
    }

    Ok(())
}
