use crate::cases::similar_cases;
use crate::config::AppConfig;
use crate::error::UploadError;
use crate::event::AppEvent;
use crate::nav::{NavigationPayload, Route, Screen};
use crate::notify::Toasts;
use crate::theme::Theme;
use crate::ui;
use crate::ui::home::HomeAction;
use crate::ui::upload::UploadAction;
use crate::upload::analysis::AnalysisRunner;
use crate::upload::picker::FilePicker;
use crate::upload::{AnalyzeRequest, SelectedFile, UploadScreen};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{debug, info, warn};

pub struct LegalAiApp {
    rx: Receiver<AppEvent>,
    runner: AnalysisRunner,
    picker: FilePicker,
    config: AppConfig,
    theme: Theme,
    screen: Screen,
    toasts: Toasts,
}

impl LegalAiApp {
    pub fn new(
        rx: Receiver<AppEvent>,
        runner: AnalysisRunner,
        picker: FilePicker,
        config: AppConfig,
        theme: Theme,
    ) -> Self {
        let screen = Screen::enter(config.window.start_route, None, &config);
        Self {
            rx,
            runner,
            picker,
            config,
            theme,
            screen,
            toasts: Toasts::default(),
        }
    }

    fn navigate(&mut self, route: Route, payload: Option<NavigationPayload>) {
        if payload.is_none() && route == self.screen.route() {
            return;
        }
        info!(from = self.screen.route().path(), to = route.path(), "navigate");
        self.screen = Screen::enter(route, payload, &self.config);
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event, ctx),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent, ctx: &egui::Context) {
        match event {
            AppEvent::AnalysisComplete { payload, toast } => {
                info!(file = %payload.uploaded_file, "analysis complete");
                self.toasts.dismiss(toast);
                self.toasts.success(format!(
                    "Analysis complete! Found {} similar cases",
                    similar_cases().len()
                ));
                self.navigate(Route::SimilarCases, Some(payload));
                ctx.request_repaint();
            }
            AppEvent::FilesPicked(paths) => self.apply_picked_files(paths),
        }
    }

    fn apply_picked_files(&mut self, paths: Vec<PathBuf>) {
        let Screen::Upload(upload) = &mut self.screen else {
            debug!("file picked after leaving the upload screen");
            return;
        };

        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            match SelectedFile::from_path(path) {
                Ok(file) => files.push(file),
                Err(err) => {
                    warn!(error = %err, "picked file unreadable");
                    self.toasts.error(err.to_string());
                }
            }
        }
        let result = upload.pick_files(files);
        report_upload_error(&mut self.toasts, result);
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let Screen::Upload(upload) = &mut self.screen else {
            return;
        };
        let drag = ui::upload::drag_input(ctx);
        upload.set_hovering(drag.hovering);
        if drag.dropped.is_empty() {
            return;
        }

        let mut files = Vec::with_capacity(drag.dropped.len());
        for dropped in &drag.dropped {
            match SelectedFile::from_dropped(dropped) {
                Ok(Some(file)) => files.push(file),
                Ok(None) => debug!(name = %dropped.name, "dropped item has no path or bytes"),
                Err(err) => {
                    warn!(error = %err, "dropped file unreadable");
                    self.toasts.error(err.to_string());
                }
            }
        }
        let result = upload.drop_files(files);
        report_upload_error(&mut self.toasts, result);
    }

    fn handle_upload_action(&mut self, action: UploadAction, ctx: &egui::Context) {
        let Screen::Upload(upload) = &mut self.screen else {
            return;
        };
        match action {
            UploadAction::ChooseFile => {
                self.picker
                    .open(&upload.limits().accepted_extensions, ctx.clone());
            }
            UploadAction::RemoveFile => upload.remove_file(),
            UploadAction::Analyze => self.start_analysis(ctx),
        }
    }

    fn start_analysis(&mut self, ctx: &egui::Context) {
        let Screen::Upload(upload) = &mut self.screen else {
            return;
        };
        match begin_analysis(upload, &mut self.toasts) {
            Some(payload) => {
                let toast = self.toasts.loading("Analyzing your case file...");
                self.runner.schedule(payload, toast, Some(ctx.clone()));
            }
            None => debug!("analysis not started"),
        }
    }

    fn render_screen(&mut self, ctx: &egui::Context) {
        let mut home_action = None;
        let mut upload_action = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.background)
                    .inner_margin(egui::Margin::symmetric(48, 16)),
            )
            .show(ctx, |ui| match &mut self.screen {
                Screen::Home(chat) => home_action = ui::home::render(ui, &self.theme, chat),
                Screen::Upload(upload) => {
                    upload_action = ui::upload::render(ui, &self.theme, &self.config, upload)
                }
                Screen::SimilarCases(results) => ui::results::render(ui, &self.theme, results),
            });

        if let Some(HomeAction::UploadCase) = home_action {
            self.navigate(Route::Upload, None);
        }
        if let Some(action) = upload_action {
            self.handle_upload_action(action, ctx);
        }
    }
}

fn begin_analysis(upload: &mut UploadScreen, toasts: &mut Toasts) -> Option<NavigationPayload> {
    match upload.analyze() {
        Ok(AnalyzeRequest::Started(payload)) => Some(payload),
        Ok(AnalyzeRequest::AlreadyRunning) => None,
        Err(err) => {
            toasts.error(err.to_string());
            None
        }
    }
}

fn report_upload_error(toasts: &mut Toasts, result: Result<(), UploadError>) {
    if let Err(err) = result {
        info!(error = %err, "file rejected");
        toasts.error(err.to_string());
    }
}

impl eframe::App for LegalAiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        self.handle_drag_and_drop(ctx);

        if let Some(route) = ui::navbar::render(ctx, &self.theme, self.screen.route()) {
            self.navigate(route, None);
        }
        self.render_screen(ctx);
        ui::toasts::render(ctx, &self.theme, &mut self.toasts);
    }
}
