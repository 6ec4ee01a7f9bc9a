use crate::cases::CaseRecord;
use crate::chat::{ChatTurn, Speaker};
use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, RichText, Sense};

pub fn badge(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    egui::Frame::new()
        .fill(theme.accent_tint)
        .stroke(egui::Stroke::new(1.0, theme.accent))
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(theme.accent).small().strong());
        });
}

pub fn outline_badge(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, theme.border_subtle))
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(theme.text_primary).small());
        });
}

pub fn icon_tile(ui: &mut egui::Ui, theme: &Theme, glyph: &str, size: f32) {
    egui::Frame::new()
        .fill(theme.primary)
        .corner_radius(egui::CornerRadius::same(theme.radius_8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(glyph).size(size).color(theme.text_on_primary));
        });
}

pub fn chat_bubble(ui: &mut egui::Ui, theme: &Theme, turn: &ChatTurn, index: usize) {
    let max_width = ui.available_width() * 0.75;
    match turn.speaker {
        Speaker::User => {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, theme, "You");
                ui.allocate_ui(egui::vec2(max_width, 0.0), |ui| {
                    theme.user_bubble_frame().show(ui, |ui| {
                        ui.label(RichText::new(&turn.text).color(theme.text_on_primary));
                    });
                });
            });
        }
        Speaker::Assistant => {
            ui.horizontal_top(|ui| {
                icon_tile(ui, theme, "🤖", 16.0);
                ui.allocate_ui(egui::vec2(max_width, 0.0), |ui| {
                    ui.vertical(|ui| {
                        theme.assistant_bubble_frame().show(ui, |ui| {
                            ui.label(RichText::new(&turn.text).color(theme.text_primary));
                        });
                        if let Some(explanation) = &turn.explanation {
                            egui::CollapsingHeader::new(
                                RichText::new("View AI Reasoning").small().color(theme.text_muted),
                            )
                            .id_salt(("reasoning", index))
                            .default_open(false)
                            .show(ui, |ui| {
                                ui.label(RichText::new(explanation).small().color(theme.text_muted));
                            });
                        }
                    });
                });
            });
        }
    }
    ui.add_space(theme.spacing_12);
}

pub fn info_card(ui: &mut egui::Ui, theme: &Theme, number: &str, title: &str, description: &str) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_height(140.0);
        egui::Frame::new()
            .fill(theme.accent)
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(number)
                        .size(18.0)
                        .strong()
                        .color(theme.text_on_accent),
                );
            });
        ui.add_space(theme.spacing_8);
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(description).small().color(theme.text_muted));
    });
}

/// Clickable summary card for one precedent.
pub fn case_card(ui: &mut egui::Ui, theme: &Theme, case: &CaseRecord) -> egui::Response {
    let id = ui.id().with(("case_card", case.id));
    let hovered = ui.ctx().data(|data| data.get_temp::<bool>(id).unwrap_or(false));
    let frame = if hovered {
        theme.hovered_card_frame()
    } else {
        theme.card_frame()
    };

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            icon_tile(ui, theme, "📄", 16.0);
            ui.vertical(|ui| {
                let title_color = if hovered { theme.primary } else { theme.text_primary };
                ui.label(RichText::new(case.title).strong().color(title_color));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("⚖ {}", case.court))
                            .small()
                            .color(theme.text_muted),
                    );
                    ui.label(
                        RichText::new(format!("📅 {}", case.year))
                            .small()
                            .color(theme.text_muted),
                    );
                });
            });
        });
        ui.add_space(theme.spacing_8);
        ui.label(RichText::new(case.summary).color(theme.text_muted));
        ui.add_space(theme.spacing_8);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("📈 Similarity Score")
                    .small()
                    .color(theme.text_muted),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}%", case.confidence))
                        .small()
                        .strong()
                        .color(theme.accent),
                );
            });
        });
        ui.add(
            egui::ProgressBar::new(f32::from(case.confidence) / 100.0)
                .desired_height(8.0)
                .fill(theme.primary),
        );
    });

    let response = inner.response.interact(Sense::click());
    let now_hovered = response.hovered();
    if now_hovered != hovered {
        ui.ctx().data_mut(|data| data.insert_temp(id, now_hovered));
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
