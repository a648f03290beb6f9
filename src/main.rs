use log::error;
use std::io;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use zonecast::{run, ConsolePrompter, NwsClient, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let client = match NwsClient::builder().build() {
        Ok(client) => client,
        Err(err) => {
            error!("client construction failed: {err:?}");
            println!("Failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let mut prompter = ConsolePrompter;
    let mut out = io::stdout();
    match run(&client, &mut prompter, &mut out, cancel).await {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => ExitCode::FAILURE,
        Err(err) => {
            error!("fatal: {err:?}");
            println!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
