mod app;
mod cases;
mod chat;
mod config;
mod error;
mod event;
mod logging;
mod nav;
mod notify;
mod results;
mod theme;
mod ui;
mod upload;

use anyhow::Context as _;
use app::LegalAiApp;
use clap::Parser;
use config::AppConfig;
use eframe::egui;
use error::AppError;
use nav::Route;
use std::path::PathBuf;
use std::sync::mpsc;
use theme::Theme;
use tracing::info;
use upload::analysis::AnalysisRunner;
use upload::picker::FilePicker;

#[derive(Debug, Parser)]
#[command(name = "legalai", version, about = "LegalAI case research assistant")]
struct Cli {
    #[arg(long, help = "TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Simulated analysis delay in milliseconds")]
    analysis_delay_ms: Option<u64>,

    #[arg(long, help = "Reject files outside the advertised type and size limits")]
    enforce_upload_limits: bool,

    #[arg(long, help = "Log level when RUST_LOG is unset")]
    log_level: Option<String>,

    #[arg(long, value_enum, help = "Screen to open on launch")]
    start: Option<Route>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(delay_ms) = self.analysis_delay_ms {
            config.analysis.delay_ms = delay_ms;
        }
        if self.enforce_upload_limits {
            config.upload.enforce_limits = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(route) = self.start {
            config.window.start_route = route;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);
    logging::init_logging(&config.logging)?;
    info!(
        delay_ms = config.analysis.delay_ms,
        enforce_limits = config.upload.enforce_limits,
        "starting LegalAI"
    );

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("legalai-runtime")
        .build()
        .map_err(AppError::Runtime)?;

    let runner = AnalysisRunner::new(runtime.handle().clone(), tx.clone(), config.analysis.delay());
    let picker = FilePicker::new(runtime.handle().clone(), tx);
    let theme = Theme::default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("LegalAI")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([960.0, 640.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let app = LegalAiApp::new(rx, runner, picker, config, theme.clone());
    eframe::run_native(
        "LegalAI",
        native_options,
        Box::new(move |creation_context| {
            theme.apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| AppError::Ui(err.to_string()))?;

    drop(runtime);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_file_values() {
        let cli = Cli::parse_from([
            "legalai",
            "--analysis-delay-ms",
            "500",
            "--enforce-upload-limits",
            "--start",
            "similar-cases",
            "--log-level",
            "debug",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.analysis.delay_ms, 500);
        assert!(config.upload.enforce_limits);
        assert_eq!(config.window.start_route, Route::SimilarCases);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["legalai"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
