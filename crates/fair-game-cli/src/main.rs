//! Fair Game CLI
//!
//! Terminal front end: validates the move list, runs the commit-reveal game
//! loop on stdin/stdout, and verifies published commitments offline.

mod cli;
mod console;
mod table;

use clap::Parser;
use cli::{Cli, Command, VerifyArgs};
use console::TerminalConsole;
use fair_game_core::{
    verify_commitment, CommitmentEngine, GameError, MoveSet, OsRandom, RoundReceipt, Session,
};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Verify(args)) => verify(args),
        None => play(cli).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "Exiting with error");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn play(cli: Cli) -> Result<ExitCode, GameError> {
    let moves = MoveSet::new(cli.moves)?;
    info!(moves = ?moves.names(), digest = %cli.digest, "Move set accepted");

    let engine = CommitmentEngine::new(OsRandom, cli.digest);
    let mut session = Session::new(moves, engine);
    let mut console = TerminalConsole::stdio(cli.json);

    session.run(&mut console).await?;
    Ok(ExitCode::SUCCESS)
}

fn verify(args: VerifyArgs) -> Result<ExitCode, GameError> {
    let ok = match (args.receipt, args.key, args.move_name, args.commitment) {
        (Some(json), _, _, _) => {
            let receipt = RoundReceipt::from_json(&json)?;
            info!(round = receipt.round, "Verifying receipt");
            receipt.verify()
        }
        (None, Some(key), Some(move_name), Some(commitment)) => {
            verify_commitment(args.digest, &key, &move_name, &commitment)?
        }
        _ => {
            return Err(GameError::MissingArgument(
                "--receipt, or all of --key, --move and --commitment",
            ))
        }
    };

    if ok {
        println!("OK: the key and move reproduce the commitment");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("MISMATCH: the key and move do not reproduce the commitment");
        Ok(ExitCode::FAILURE)
    }
}
