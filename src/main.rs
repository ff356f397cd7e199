use clap::Parser;

use release_notifier::cli::{
    Cli, CommandOutcome, execute_command, init_logger_from_settings, load_and_merge_config,
};
use release_notifier::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    match execute_command(&cli, &settings)? {
        CommandOutcome::StartServer => Server::new(settings, environment).run().await,
        CommandOutcome::Completed => Ok(()),
    }
}
