use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// syntect theme used for code samples
    pub fn code_theme(&self) -> &'static str {
        match self {
            Theme::Light => "base16-ocean.light",
            Theme::Dark => "base16-ocean.dark",
        }
    }
}

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const CHILD_ICON_SIZE: f32 = 12.0;
pub const ITEM_INDENT: f32 = 8.0;
pub const CHILD_INDENT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const CODE_FONT_SIZE: f32 = 12.0;

// --- Panel constraints ---
pub const SIDEBAR_MIN: f32 = 180.0;
pub const SIDEBAR_MAX: f32 = 420.0;
pub const CONTENT_MAX_WIDTH: f32 = 900.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(235, 100, 100);

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Rendering limits ---
pub const MAX_HIGHLIGHTED_LINES: usize = 1000;

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
