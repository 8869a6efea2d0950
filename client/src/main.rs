mod config;
mod probe;
mod screen;
#[cfg(test)]
mod test_support;
mod tui;

use anyhow::Result;
use config::Config;
use probe::StatusProbe;
use screen::StatusScreen;
use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they stay off the drawn screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botdo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();

    tracing::info!("Starting BotDO status screen");
    let probe = StatusProbe::new(&config.api_url)?;
    tracing::info!("Backend URL: {}", probe.url());

    let mut screen = StatusScreen::new(probe);

    if io::stdout().is_terminal() {
        tui::run(&mut screen).await
    } else {
        screen.activate();
        screen.settle().await;
        print!("{}", screen.summary());
        Ok(())
    }
}
