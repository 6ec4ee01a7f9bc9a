use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_muted: Color32,
    pub primary: Color32,
    pub primary_hover: Color32,
    pub accent: Color32,
    pub accent_tint: Color32,
    pub success: Color32,
    pub success_tint: Color32,
    pub danger: Color32,
    pub danger_tint: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_on_primary: Color32,
    pub text_on_accent: Color32,
    pub border_subtle: Color32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub spacing_24: f32,
    pub radius_8: u8,
    pub radius_12: u8,
    pub radius_16: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0xF8, 0xF9, 0xFB),
            surface: Color32::WHITE,
            surface_muted: Color32::from_rgb(0xF1, 0xF3, 0xF6),
            primary: Color32::from_rgb(0x1E, 0x3A, 0x5F),
            primary_hover: Color32::from_rgb(0x27, 0x4B, 0x7A),
            accent: Color32::from_rgb(0xC9, 0x96, 0x2B),
            accent_tint: Color32::from_rgb(0xFA, 0xF3, 0xE3),
            success: Color32::from_rgb(0x16, 0xA3, 0x4A),
            success_tint: Color32::from_rgb(0xDC, 0xFC, 0xE7),
            danger: Color32::from_rgb(0xDC, 0x26, 0x26),
            danger_tint: Color32::from_rgb(0xFE, 0xE2, 0xE2),
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
            text_muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            text_on_primary: Color32::from_rgb(0xF8, 0xFB, 0xFF),
            text_on_accent: Color32::from_rgb(0x1F, 0x17, 0x05),
            border_subtle: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            spacing_8: Self::P8,
            spacing_12: Self::P12,
            spacing_16: Self::P16,
            spacing_24: Self::P24,
            radius_8: Self::R8,
            radius_12: Self::R12,
            radius_16: 16,
        }
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P12: f32 = 12.0;
    pub const P16: f32 = 16.0;
    pub const P24: f32 = 24.0;

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.weak_bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_fill = self.surface_muted;
        visuals.widgets.inactive.weak_bg_fill = self.surface_muted;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.accent_tint;
        visuals.widgets.hovered.weak_bg_fill = self.accent_tint;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.primary_hover;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.primary_hover;
        visuals.selection.stroke = Stroke::new(1.0, self.text_on_primary);
        visuals.hyperlink_color = self.primary;
        visuals.window_fill = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);
        visuals.window_shadow = egui::epaint::Shadow {
            offset: [0, 8],
            blur: 24,
            spread: 0,
            color: Color32::from_rgba_premultiplied(0, 0, 0, 40),
        };
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(26.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn panel_frame(&self, fill: Color32, inner_padding: i8) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(inner_padding))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.border_subtle))
            .shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 10,
                spread: 0,
                color: Color32::from_rgba_premultiplied(0, 0, 0, 18),
            })
    }

    pub fn card_frame(&self) -> Frame {
        self.panel_frame(self.surface, Self::P24 as i8)
    }

    pub fn hovered_card_frame(&self) -> Frame {
        self.card_frame().stroke(Stroke::new(1.5, self.accent))
    }

    pub fn tinted_frame(&self, fill: Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(Self::P12 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    pub fn drop_zone_frame(&self, dragging: bool) -> Frame {
        let (fill, stroke) = if dragging {
            (self.accent_tint, Stroke::new(2.0, self.accent))
        } else {
            (self.surface_muted, Stroke::new(2.0, self.border_subtle))
        };
        Frame::new()
            .fill(fill)
            .stroke(stroke)
            .inner_margin(Margin::same(48))
            .corner_radius(CornerRadius::same(self.radius_12))
    }

    pub fn user_bubble_frame(&self) -> Frame {
        Frame::new()
            .fill(self.primary)
            .inner_margin(Margin::symmetric(20, 12))
            .corner_radius(CornerRadius::same(self.radius_16))
    }

    pub fn assistant_bubble_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .stroke(Stroke::new(1.0, self.border_subtle))
            .inner_margin(Margin::symmetric(20, 12))
            .corner_radius(CornerRadius::same(self.radius_16))
    }

    pub fn primary_button(&self, text: impl Into<String>) -> egui::Button<'static> {
        egui::Button::new(egui::RichText::new(text.into()).color(self.text_on_primary))
            .fill(self.primary)
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    pub fn accent_button(&self, text: impl Into<String>) -> egui::Button<'static> {
        egui::Button::new(
            egui::RichText::new(text.into())
                .color(self.text_on_accent)
                .strong(),
        )
        .fill(self.accent)
        .corner_radius(CornerRadius::same(self.radius_8))
    }
}
