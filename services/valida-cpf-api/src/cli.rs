use crate::server;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use valida_cpf::cpf;
use valida_cpf::error::AppError;

/// Exit status of `check` when the identifier fails validation.
const INVALID_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "valida-cpf",
    about = "Validate Brazilian CPF identifiers over HTTP or from the command line",
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
    /// Validate a single CPF and report the verdict
    Check(CheckArgs),
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

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// CPF to validate, with or without punctuation
    pub(crate) cpf: String,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Check(args) => Ok(run_check(args)),
    }
}

fn run_check(args: CheckArgs) -> ExitCode {
    let valid = cpf::validate(&args.cpf);
    println!("{}", check_line(&args.cpf, valid));

    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(INVALID_EXIT_CODE)
    }
}

fn check_line(input: &str, valid: bool) -> String {
    let verdict = if valid { "valid" } else { "invalid" };
    format!("{input}: {verdict}")
}
