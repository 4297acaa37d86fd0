use crate::batch::{run_csv_batch, run_synthetic_batch, CsvBatchArgs, SyntheticBatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gsp_cert::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GSP Certificate Generator",
    about = "Serve the GSP certificate renderer or drive batches of render requests against it",
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
    /// Drive batches of render requests against a running service
    Batch {
        #[command(subcommand)]
        command: BatchCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BatchCommand {
    /// Render a batch of synthetic certificates
    Synthetic(SyntheticBatchArgs),
    /// Render one certificate per row of a CSV file
    Csv(CsvBatchArgs),
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
        Command::Batch {
            command: BatchCommand::Synthetic(args),
        } => run_synthetic_batch(args).await,
        Command::Batch {
            command: BatchCommand::Csv(args),
        } => run_csv_batch(args).await,
    }
}
