use crate::cases::CaseRecord;
use crate::results::ResultsScreen;
use crate::theme::Theme;
use crate::ui::widgets::{case_card, icon_tile, outline_badge};
use eframe::egui::{self, Align, Layout, RichText};

pub fn render(ui: &mut egui::Ui, theme: &Theme, screen: &mut ResultsScreen) {
    let mut clicked_case = None;
    egui::ScrollArea::vertical()
        .id_salt("results_page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(theme.spacing_24);
            render_header(ui, theme, screen);
            ui.add_space(theme.spacing_24 * 2.0);

            for pair in screen.cases().chunks(2) {
                ui.columns(2, |columns| {
                    for (column, case) in columns.iter_mut().zip(pair) {
                        if case_card(column, theme, case).clicked() {
                            clicked_case = Some(case.id);
                        }
                    }
                });
                ui.add_space(theme.spacing_16);
            }
        });

    if let Some(case_id) = clicked_case {
        screen.open_case(case_id);
    }

    if let Some(case) = screen.selected_case() {
        if render_case_modal(ui.ctx(), theme, case) {
            screen.close_case();
        }
    }
}

fn render_header(ui: &mut egui::Ui, theme: &Theme, screen: &ResultsScreen) {
    ui.horizontal(|ui| {
        icon_tile(ui, theme, "📄", 22.0);
        ui.vertical(|ui| {
            ui.label(RichText::new("Analyzed Document").small().color(theme.text_muted));
            ui.label(RichText::new(screen.uploaded_file()).size(20.0).strong());
        });
    });
    ui.add_space(theme.spacing_16);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("Similar Cases Found").size(34.0).strong());
            ui.label(
                RichText::new(format!(
                    "We found {} relevant precedents matching your case",
                    screen.cases().len()
                ))
                .size(16.0)
                .color(theme.text_muted),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            egui::Frame::new()
                .fill(theme.accent_tint)
                .stroke(egui::Stroke::new(1.0, theme.accent))
                .corner_radius(egui::CornerRadius::same(theme.radius_8))
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("📈").size(20.0).color(theme.accent));
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new("Avg. Match Score")
                                    .small()
                                    .color(theme.text_muted),
                            );
                            ui.label(
                                RichText::new(format!("{}%", screen.average_confidence()))
                                    .size(24.0)
                                    .strong()
                                    .color(theme.accent),
                            );
                        });
                    });
                });
        });
    });
}

/// Returns true when the modal asked to close.
fn render_case_modal(ctx: &egui::Context, theme: &Theme, case: &CaseRecord) -> bool {
    let mut close_clicked = false;
    let modal = egui::Modal::new(egui::Id::new(("case_modal", case.id))).show(ctx, |ui| {
        ui.set_width((ctx.screen_rect().width() * 0.8).min(1024.0));
        egui::ScrollArea::vertical()
            .max_height(ctx.screen_rect().height() * 0.8)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(case.title).size(24.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.add(egui::Button::new("✖").frame(false)).clicked() {
                            close_clicked = true;
                        }
                    });
                });
                ui.add_space(theme.spacing_16);

                let style = case.sentiment.style(theme);
                theme.tinted_frame(style.fill).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(style.glyph).size(22.0).color(style.color));
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Sentiment Analysis").strong().color(style.color));
                            ui.label(RichText::new(style.label).small().color(theme.text_muted));
                        });
                    });
                });

                if !case.citations.is_empty() {
                    ui.add_space(theme.spacing_16);
                    ui.label(RichText::new("Key Citations").strong());
                    for (index, citation) in case.citations.iter().enumerate() {
                        theme.tinted_frame(theme.accent_tint).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            outline_badge(ui, theme, &format!("Citation {}", index + 1));
                            ui.label(*citation);
                        });
                    }
                }

                ui.add_space(theme.spacing_16);
                theme.drop_zone_frame(false).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("📄").size(56.0).color(theme.text_muted));
                        ui.label(RichText::new("PDF Document Preview").strong());
                        ui.label(
                            RichText::new(
                                "Document viewer with highlighted citations would appear here",
                            )
                            .small()
                            .color(theme.text_muted),
                        );
                    });
                });
            });
    });
    close_clicked || modal.should_close()
}
