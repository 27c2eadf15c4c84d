use crate::commands::{
    run_check, run_requirements, run_roster, CheckArgs, RequirementsArgs, RosterArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use enrollment_docs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Enrollment Documentation Service",
    about = "Resolve required enrollment documents and check submission completeness",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Show the documents required for a modality and plan
    Requirements(RequirementsArgs),
    /// Check one enrollment's submitted documents and print a receipt
    Check(CheckArgs),
    /// Evaluate every enrollment in a roster CSV export
    Roster(RosterArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Requirements(args) => run_requirements(args),
        Command::Check(args) => run_check(args),
        Command::Roster(args) => run_roster(args),
    }
}
