// bases/download_gui/src/app.rs
use crate::panel::{DownloadPanel, Phase};
use download_primitives::{AudioQuality, BaseFormat, Resolution, VideoCodec};
use eframe::egui::{self, Button, Color32, ComboBox, Grid, ProgressBar, RichText, TextEdit};
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Advanced YouTube Downloader";

const REPAINT_WHILE_RUNNING: Duration = Duration::from_millis(100);

pub struct DownloaderApp {
    panel: DownloadPanel,
}

impl DownloaderApp {
    pub fn new(panel: DownloadPanel) -> Self {
        Self { panel }
    }

    fn browse_directory(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_title("Select Output Directory")
            .set_directory(self.panel.form.output_path())
            .pick_folder()
        {
            self.panel.form.output_dir = dir.display().to_string();
        }
    }

    fn options_grid(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.panel.form;
        Grid::new("download_options")
            .num_columns(3)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Format:");
                choice(ui, "format", &mut form.base_format, BaseFormat::ALL, |f| {
                    f.label().to_string()
                });
                ui.checkbox(&mut form.subtitles, "Download Subtitles");
                ui.end_row();

                ui.label("Max Resolution:");
                choice(ui, "resolution", &mut form.resolution, Resolution::all(), |r| {
                    r.to_string()
                });
                ui.checkbox(&mut form.thumbnail, "Download Thumbnail");
                ui.end_row();

                ui.label("Video Codec:");
                choice(ui, "codec", &mut form.codec, VideoCodec::ALL, |c| c.to_string());
                ui.checkbox(&mut form.description, "Save Description");
                ui.end_row();

                ui.label("Audio Quality (kbps):");
                let enabled = form.accepts_audio_quality();
                ui.add_enabled_ui(enabled, |ui| {
                    let qualities = std::iter::once(None).chain(AudioQuality::all().map(Some));
                    choice(ui, "audio_quality", &mut form.audio_quality, qualities, |q| {
                        q.map_or_else(|| "none".to_string(), |q| q.to_string())
                    });
                });
                ui.checkbox(&mut form.info_json, "Save Video Info");
                ui.end_row();
            });
    }

    fn status_color(&self) -> Color32 {
        match self.panel.phase() {
            Phase::Failed => Color32::RED,
            Phase::Completed => Color32::GREEN,
            Phase::Idle | Phase::Running => Color32::GRAY,
        }
    }
}

fn choice<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    id: &str,
    current: &mut T,
    choices: impl IntoIterator<Item = T>,
    label: impl Fn(&T) -> String,
) {
    ComboBox::from_id_salt(id)
        .selected_text(label(current))
        .show_ui(ui, |ui| {
            for value in choices {
                let text = label(&value);
                ui.selectable_value(current, value, text);
            }
        });
}

impl eframe::App for DownloaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.poll();
        if self.panel.is_running() {
            ctx.request_repaint_after(REPAINT_WHILE_RUNNING);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(
                TextEdit::singleline(&mut self.panel.form.url)
                    .hint_text("Enter YouTube URL")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(RichText::new("Download Options").strong());
                self.options_grid(ui);
            });
            ui.add_space(8.0);

            let mut browse = false;
            ui.horizontal(|ui| {
                ui.add(
                    TextEdit::singleline(&mut self.panel.form.output_dir)
                        .hint_text("Output directory")
                        .desired_width(ui.available_width() - 80.0),
                );
                browse = ui.button("Browse").clicked();
            });
            if browse {
                self.browse_directory();
            }
            ui.add_space(8.0);

            let download = ui.add_enabled(
                self.panel.start_enabled(),
                Button::new("Download").min_size(egui::vec2(ui.available_width(), 28.0)),
            );
            if download.clicked() {
                self.panel.start_download();
            }

            ui.add(ProgressBar::new(f32::from(self.panel.progress()) / 100.0).show_percentage());
            ui.label(RichText::new(self.panel.status()).color(self.status_color()));
        });
    }
}
