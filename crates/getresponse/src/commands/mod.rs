//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod config_cmd;
pub mod encode;
pub mod env;
pub mod request;
pub mod util;

use getresponse_api::Client;

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;

/// Resolved output settings shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, client: &Client, render: Render) -> Result<(), CliError> {
    match cmd {
        Command::Get(args) => request::get(client, &args, render).await,
        Command::Delete(args) => request::delete(client, &args, render).await,
        Command::Post(args) => request::post(client, &args, render).await,
        Command::Upload(args) => request::upload(client, args, render).await,
        Command::Env => env::handle(client, render).await,
        // Offline commands are handled before dispatch
        Command::Encode(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
