use clap::Parser;
use kod_gozcusu::structs::cli::Cli;
use kod_gozcusu::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ {e:#}");
        std::process::exit(1);
    }
}
