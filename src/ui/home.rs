use crate::chat::{is_submit_chord, ChatScreen};
use crate::theme::Theme;
use crate::ui::widgets::{badge, chat_bubble, icon_tile};
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    UploadCase,
}

pub fn render(ui: &mut egui::Ui, theme: &Theme, chat: &mut ChatScreen) -> Option<HomeAction> {
    let mut action = None;
    ScrollArea::vertical()
        .id_salt("home_page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(theme.spacing_24);
            ui.columns(2, |columns| {
                render_hero(&mut columns[0], theme);
                action = render_chat_column(&mut columns[1], theme, chat);
            });
            ui.add_space(theme.spacing_24 * 2.0);
            render_footer(ui, theme);
        });
    action
}

fn render_hero(ui: &mut egui::Ui, theme: &Theme) {
    theme
        .panel_frame(theme.primary, 32)
        .show(ui, |ui| {
            ui.set_min_height(420.0);
            ui.vertical_centered(|ui| {
                ui.add_space(96.0);
                ui.label(RichText::new("⚖").size(96.0).color(theme.accent));
                ui.add_space(theme.spacing_16);
                ui.label(
                    RichText::new("Legal AI Platform")
                        .size(20.0)
                        .strong()
                        .color(theme.text_on_primary),
                );
            });
        });
}

fn render_chat_column(
    ui: &mut egui::Ui,
    theme: &Theme,
    chat: &mut ChatScreen,
) -> Option<HomeAction> {
    ui.horizontal(|ui| {
        ui.label(RichText::new("✨").size(20.0).color(theme.accent));
        badge(ui, theme, "AI-Powered");
    });
    ui.label(RichText::new("Your Legal").size(40.0).strong());
    ui.label(
        RichText::new("Intelligence Partner")
            .size(40.0)
            .strong()
            .color(theme.primary),
    );
    ui.label(
        RichText::new(
            "Get instant AI-powered legal insights. Ask questions in any language, \
             upload case files, and discover similar precedents.",
        )
        .size(16.0)
        .color(theme.text_muted),
    );
    ui.add_space(theme.spacing_16);

    theme.panel_frame(theme.surface, 0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        render_transcript(ui, theme, chat);
        ui.separator();
        render_composer(ui, theme, chat);
    });

    ui.add_space(theme.spacing_16);
    let cta = ui.add_sized(
        [ui.available_width(), 44.0],
        theme.accent_button("Upload Case & Analyze"),
    );
    cta.clicked().then_some(HomeAction::UploadCase)
}

fn render_transcript(ui: &mut egui::Ui, theme: &Theme, chat: &mut ChatScreen) {
    if chat.transcript().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(theme.spacing_24);
            icon_tile(ui, theme, "✨", 28.0);
            ui.add_space(theme.spacing_8);
            ui.label(RichText::new("Start a Conversation").strong());
            ui.label(
                RichText::new("Ask me anything about legal matters or procedures")
                    .small()
                    .color(theme.text_muted),
            );
            ui.add_space(theme.spacing_24);
        });
        return;
    }

    let scroll_to_bottom = chat.take_scroll_request();
    egui::Frame::new()
        .inner_margin(egui::Margin::same(Theme::P24 as i8))
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("chat_transcript")
                .max_height(384.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (index, turn) in chat.transcript().turns().iter().enumerate() {
                        chat_bubble(ui, theme, turn, index);
                    }
                    if scroll_to_bottom {
                        ui.scroll_to_cursor(Some(Align::BOTTOM));
                    }
                });
        });
}

pub fn composer_id() -> egui::Id {
    egui::Id::new("chat_composer")
}

fn render_composer(ui: &mut egui::Ui, theme: &Theme, chat: &mut ChatScreen) {
    egui::Frame::new()
        .fill(theme.surface_muted)
        .inner_margin(egui::Margin::same(Theme::P16 as i8))
        .show(ui, |ui| {
            let mut send_now = false;
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let clicked = ui
                    .add_enabled(chat.can_submit(), theme.primary_button("➤"))
                    .clicked();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut chat.input)
                        .id(composer_id())
                        .desired_width(f32::INFINITY)
                        .hint_text("Type your legal question..."),
                );
                let chord = ui.input(|i| {
                    is_submit_chord(i.key_pressed(egui::Key::Enter), i.modifiers.shift)
                });
                // A singleline edit gives up focus on Enter before we see it.
                let lost_focus = response.lost_focus();
                if lost_focus && chord {
                    send_now = true;
                    response.request_focus();
                }
                send_now |= clicked;
            });

            if send_now {
                chat.submit();
            }
        });
}

fn render_footer(ui: &mut egui::Ui, theme: &Theme) {
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("© 2025 LegalAI. AI-assisted legal research tool.")
                .small()
                .color(theme.text_muted),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            for link in ["Contact", "Terms of Service", "Privacy Policy"] {
                ui.label(RichText::new(link).small().color(theme.text_muted));
            }
        });
    });
}
