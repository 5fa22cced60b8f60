// bases/download_cli/src/main.rs
mod app;
mod args;
mod config;
mod output;

use app::App;
use args::Args;
use clap::Parser;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "download_cli=warn,media_downloader=warn".into()),
        )
        .init();

    let config = Config::from_args(Args::parse())?;
    let app = App::new(config);

    let code = app.execute().await;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
