// src/main.rs — spendcheck entry point

use spendcheck::api;
use spendcheck::dialogue::Controller;
use spendcheck::infra::config::Config;
use spendcheck::infra::logger;
use spendcheck::telegram::{poller, TelegramBot};

#[tokio::main]
async fn main() {
    // Respects RUST_LOG
    logger::init_logging("info");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let Config { bot_token, port } = Config::from_env()?;

    let bot = TelegramBot::new(bot_token);
    let username = bot.validate().await?;
    tracing::info!("Authenticated as @{username}");

    // Liveness listener for the hosting platform; shares nothing with the
    // bot and never stops on its own.
    tokio::spawn(async move {
        if let Err(e) = api::start_server(port).await {
            tracing::error!("Liveness listener failed: {e}");
        }
    });

    let mut controller = Controller::new();
    tracing::info!("🤖 Insight bot running");
    poller::run(&bot, &mut controller).await;

    Ok(())
}
