use crate::demo::{run_demo, run_scholarship_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scholarworks::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Career Scholarship Catalog",
    about = "Catalog career work information and derive scholarship awards from the command line",
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
    /// Scholarship scoring utilities
    Scholarship {
        #[command(subcommand)]
        command: ScholarshipCommand,
    },
    /// Run an end-to-end CLI demo covering intake and scoring
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScholarshipCommand {
    /// Estimate a career's award from a work-information CSV export
    Estimate(EstimateArgs),
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
        Command::Scholarship {
            command: ScholarshipCommand::Estimate(args),
        } => run_scholarship_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}
