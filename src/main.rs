use moro::commands::Cli;
use moro::libs::logging::enable_logging;
use moro::libs::messages::Message;
use moro::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    enable_logging();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
