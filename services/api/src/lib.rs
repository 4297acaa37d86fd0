mod batch;
mod cli;
mod infra;
mod routes;
mod server;
mod synth;

use gsp_cert::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
