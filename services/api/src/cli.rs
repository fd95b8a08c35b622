use crate::report::{run_jobs, run_stats, JobsArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_tracker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Youth Job Application Tracker",
    about = "Run the job-application tracker service or print its reports from the command line",
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
    /// Print the age-group labour statistics table
    Stats(StatsArgs),
    /// List the job board or recommend listings for an interest
    Jobs(JobsArgs),
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
        Command::Stats(args) => run_stats(args),
        Command::Jobs(args) => {
            run_jobs(args);
            Ok(())
        }
    }
}
