// Header bar: history buttons, breadcrumbs, theme toggle

use super::NavAction;
use crate::app::LearnDsa;
use crate::breadcrumb::derive_breadcrumbs;
use crate::style::{self, Theme};
use eframe::egui;
use std::cell::RefCell;

impl LearnDsa {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, next_navigation: &RefCell<Option<NavAction>>) {
        let mut toggle_theme = false;

        ui.horizontal_centered(|ui| {
            if ui
                .add_enabled(self.history.can_go_back(), egui::Button::new("⬅"))
                .on_hover_text("Back (Alt+←)")
                .clicked()
            {
                *next_navigation.borrow_mut() = Some(NavAction::Back);
            }
            if ui
                .add_enabled(self.history.can_go_forward(), egui::Button::new("➡"))
                .on_hover_text("Forward (Alt+→)")
                .clicked()
            {
                *next_navigation.borrow_mut() = Some(NavAction::Forward);
            }
            if ui.button("🏠").on_hover_text("Home (Alt+Home)").clicked() {
                *next_navigation.borrow_mut() = Some(NavAction::Go("/".to_string()));
            }

            let crumbs = derive_breadcrumbs(&self.history.current_route);
            let last = crumbs.len().saturating_sub(1);
            for (i, crumb) in crumbs.iter().enumerate() {
                ui.label(egui::RichText::new("›").weak());
                if i == last {
                    ui.label(egui::RichText::new(&crumb.label).strong());
                } else if ui.link(&crumb.label).clicked() {
                    *next_navigation.borrow_mut() = Some(NavAction::Go(crumb.path.clone()));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icon, hint) = match self.ui.theme {
                    Theme::Dark => ("☀", "Switch to light theme"),
                    Theme::Light => ("🌙", "Switch to dark theme"),
                };
                if ui.button(icon).on_hover_text(hint).clicked() {
                    toggle_theme = true;
                }
                if self.content.is_loading() {
                    ui.spinner();
                }
            });
        });

        if toggle_theme {
            self.toggle_theme(ui.ctx());
        }
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some((message, _)) = &self.ui.error_message {
                ui.label(egui::RichText::new(format!("⚠ {}", message)).color(style::ERROR));
            } else if let Some((message, _)) = &self.ui.info_message {
                ui.label(message);
            } else {
                style::truncated_label(ui, egui::RichText::new(&self.api_base_url).weak());
            }
        });
    }
}
