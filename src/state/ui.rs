// UI state - presentation settings and status messages
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub sidebar_width: f32,
    pub font_size: f32,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme, sidebar_width: f32, font_size: f32) -> Self {
        Self {
            theme,
            sidebar_width,
            font_size,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}
