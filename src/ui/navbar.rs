use crate::nav::Route;
use crate::theme::Theme;
use crate::ui::widgets::icon_tile;
use eframe::egui::{self, Align, Layout, RichText, Sense};

/// Returns the route the user asked to navigate to, if any.
pub fn render(ctx: &egui::Context, theme: &Theme, current: Route) -> Option<Route> {
    let mut target = None;
    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::new()
                .fill(theme.surface)
                .stroke(egui::Stroke::new(1.0, theme.border_subtle))
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui
                    .scope(|ui| {
                        ui.horizontal(|ui| {
                            icon_tile(ui, theme, "⚖", 20.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new("LegalAI").size(18.0).strong());
                                ui.label(
                                    RichText::new("Intelligent Case Analysis")
                                        .small()
                                        .color(theme.text_muted),
                                );
                            });
                        });
                    })
                    .response
                    .interact(Sense::click());
                if brand.clicked() {
                    target = Some(Route::Home);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(theme.accent_button("Get Started")).clicked() {
                        target = Some(Route::Upload);
                    }
                    for route in [Route::Upload, Route::Home] {
                        let color = if route == current {
                            theme.primary
                        } else {
                            theme.text_muted
                        };
                        let link = egui::Button::new(
                            RichText::new(route.nav_label()).color(color).strong(),
                        )
                        .frame(false);
                        if ui.add(link).clicked() {
                            target = Some(route);
                        }
                    }
                });
            });
        });
    target
}
