use crate::notify::{ToastKind, Toasts};
use crate::theme::Theme;
use eframe::egui::{self, RichText};
use std::time::Instant;

pub fn render(ctx: &egui::Context, theme: &Theme, toasts: &mut Toasts) {
    let now = Instant::now();
    toasts.prune(now);
    if let Some(wait) = toasts.next_expiry(now) {
        ctx.request_repaint_after(wait);
    }
    if toasts.entries().is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.entries() {
                let (glyph, accent) = match toast.kind {
                    ToastKind::Error => ("⚠", theme.danger),
                    ToastKind::Loading => ("⏳", theme.primary),
                    ToastKind::Success => ("✔", theme.success),
                };
                theme.panel_frame(theme.surface, 12).show(ui, |ui| {
                    ui.set_min_width(280.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(glyph).color(accent));
                        ui.label(&toast.message);
                    });
                });
            }
        });
}
