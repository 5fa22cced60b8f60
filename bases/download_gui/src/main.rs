// bases/download_gui/src/main.rs
mod app;
mod config;
mod panel;

use app::{DownloaderApp, WINDOW_TITLE};
use color_eyre::{eyre::eyre, Result};
use config::Config;
use eframe::egui;
use media_downloader::MediaDownloader;
use panel::{DownloadForm, DownloadPanel};
use std::sync::Arc;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "download_gui=info,media_downloader=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Using yt-dlp at {}", config.yt_dlp.display());

    // Downloads run here, the UI owns the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let downloader = Arc::new(MediaDownloader::new(&config.yt_dlp));
    let panel = DownloadPanel::new(
        DownloadForm::new(&config.output_dir),
        downloader,
        runtime.handle().clone(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DownloaderApp::new(panel)))),
    )
    .map_err(|e| eyre!("GUI exited with an error: {e}"))?;

    Ok(())
}
