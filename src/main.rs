use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridwatch_lib::app::App;
use gridwatch_lib::client::poller::StatePoller;
use gridwatch_lib::model::config::AppConfig;
use gridwatch_lib::model::frame::DisplayFrame;
use gridwatch_lib::ui::tui::Tui;
use gridwatch_lib::ui::views::status::format_delay;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the spectator in
    #[arg(short, long, value_enum, default_value = "watch")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the server base URL
    #[arg(long)]
    server: Option<String>,

    /// Override the polling interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Live TUI spectator
    Watch,
    /// Fetch one snapshot and print the standings
    Once,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "gridwatch=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::load(&args.config);
    if let Some(server) = args.server {
        config.server.url = server;
    }
    if let Some(interval) = args.interval {
        config.display.poll_interval_ms = interval;
    }

    let poller = StatePoller::new(&config);

    match args.mode {
        Mode::Once => {
            let snapshot = poller.fetch_once().await?;
            let frame = DisplayFrame::derive(&snapshot, config.display.leaderboard_size);
            println!(
                "Round {}  ({} delay, {} robots)",
                frame.round,
                format_delay(frame.delay_ns),
                frame.robots.len()
            );
            for entry in &frame.leaders {
                println!("{:<12} {}", entry.name, entry.score);
            }
        }
        Mode::Watch => {
            let slot = poller.slot();
            let poll_task = poller.spawn();

            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config, slot);
            let res = app.run(&mut tui).await;

            tui.exit()?;
            poll_task.abort();

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
