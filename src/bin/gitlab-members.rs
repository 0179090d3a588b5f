//! gitlab-members CLI binary.
//!
//! Prints every member of a GitLab group hierarchy with their roles, or
//! serves the same report over HTTP.

use std::process::ExitCode;

use clap::Parser;
use gitlab_members::cli::{Cli, Command};
use gitlab_members::{audit_group, web};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> gitlab_members::Result<()> {
    match &cli.command {
        Some(Command::Serve { bind }) => {
            let client = cli.client()?;
            web::serve(client, *bind).await
        }
        None => {
            // Both inputs are validated before any request is made
            let id = cli.group_id()?;
            let client = cli.client()?;

            let report = audit_group(&client, id).await?;
            println!("{report}");
            Ok(())
        }
    }
}
