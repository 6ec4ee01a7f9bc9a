use crate::config::AppConfig;
use crate::theme::Theme;
use crate::upload::{format_megabytes, UploadScreen};
use crate::ui::widgets::info_card;
use eframe::egui::{self, Align, Layout, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    ChooseFile,
    RemoveFile,
    Analyze,
}

/// Pending OS-level drag state for this frame.
pub struct DragInput {
    pub hovering: bool,
    pub dropped: Vec<egui::DroppedFile>,
}

pub fn drag_input(ctx: &egui::Context) -> DragInput {
    ctx.input(|i| DragInput {
        hovering: !i.raw.hovered_files.is_empty(),
        dropped: i.raw.dropped_files.clone(),
    })
}

pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    config: &AppConfig,
    screen: &UploadScreen,
) -> Option<UploadAction> {
    let mut action = None;
    egui::ScrollArea::vertical()
        .id_salt("upload_page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(768.0);
                ui.add_space(theme.spacing_24);
                ui.heading(RichText::new("Upload Legal Document").size(34.0).strong());
                ui.label(
                    RichText::new(
                        "Upload your case file to find similar precedents and get AI-powered insights",
                    )
                    .size(16.0)
                    .color(theme.text_muted),
                );
                ui.add_space(theme.spacing_24 * 2.0);

                if let Some(selected) = render_drop_zone(ui, theme, config, screen) {
                    action = Some(selected);
                }

                if screen.selected_name().is_some() {
                    ui.add_space(theme.spacing_24);
                    let label = if screen.is_analyzing() {
                        "⏳ Analyzing..."
                    } else {
                        "Analyze & Find Similar Cases ➡"
                    };
                    let analyze = ui.add_enabled(
                        !screen.is_analyzing(),
                        theme.primary_button(label).min_size(egui::vec2(256.0, 48.0)),
                    );
                    if analyze.clicked() {
                        action = Some(UploadAction::Analyze);
                    }
                }

                ui.add_space(theme.spacing_24 * 2.0);
                ui.columns(3, |columns| {
                    info_card(
                        &mut columns[0],
                        theme,
                        "01",
                        "Upload Document",
                        "Submit your legal case file in PDF or DOCX format",
                    );
                    info_card(
                        &mut columns[1],
                        theme,
                        "02",
                        "AI Analysis",
                        "Our AI analyzes your case and searches our database",
                    );
                    info_card(
                        &mut columns[2],
                        theme,
                        "03",
                        "View Results",
                        "Get similar cases with citations and sentiment analysis",
                    );
                });
            });
        });
    action
}

fn render_drop_zone(
    ui: &mut egui::Ui,
    theme: &Theme,
    config: &AppConfig,
    screen: &UploadScreen,
) -> Option<UploadAction> {
    let zone = screen.drop_zone();
    if let Some(file) = zone.selected() {
        let mut action = None;
        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(theme.accent_tint)
                    .corner_radius(egui::CornerRadius::same(theme.radius_8))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(RichText::new("📄").size(28.0).color(theme.accent));
                    });
                ui.vertical(|ui| {
                    ui.label(RichText::new(&file.name).strong());
                    ui.label(RichText::new(file.size_label()).color(theme.text_muted));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let remove = ui
                        .add_enabled(!screen.is_analyzing(), egui::Button::new("✖").frame(false))
                        .on_hover_text("Remove file");
                    if remove.clicked() {
                        action = Some(UploadAction::RemoveFile);
                    }
                });
            });
        });
        return action;
    }

    let mut action = None;
    theme.drop_zone_frame(zone.is_dragging()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("⬆").size(56.0).color(theme.accent));
            ui.label(RichText::new("Upload Legal Document").size(18.0).strong());
            ui.label(
                RichText::new("Drag and drop your case file here, or click to browse")
                    .color(theme.text_muted),
            );
            ui.add_space(theme.spacing_16);
            if ui.add(theme.accent_button("Choose File")).clicked() {
                action = Some(UploadAction::ChooseFile);
            }
            ui.add_space(theme.spacing_8);
            ui.label(
                RichText::new(format!(
                    "Supported formats: {} (Max {})",
                    config.accepted_extensions_label(),
                    max_size_label(config.upload.max_bytes)
                ))
                .small()
                .color(theme.text_muted),
            );
        });
    });
    action
}

fn max_size_label(bytes: u64) -> String {
    let mb = format_megabytes(bytes);
    mb.replace(".00 MB", "MB")
}
