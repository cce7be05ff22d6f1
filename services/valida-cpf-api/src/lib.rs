mod cli;
mod infra;
mod routes;
mod server;

use std::process::ExitCode;
use valida_cpf::error::AppError;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
