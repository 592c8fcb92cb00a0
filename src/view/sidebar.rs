// Side navigation rendering

use super::NavAction;
use crate::app::LearnDsa;
use crate::state::NavRow;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl LearnDsa {
    pub(crate) fn render_sidebar(&mut self, ui: &mut egui::Ui, next_navigation: &RefCell<Option<NavAction>>) {
        ui.add_space(8.0);
        let title = style::truncated_label_with_sense(
            ui,
            egui::RichText::new("Learn DSA").heading().strong(),
            egui::Sense::click(),
        );
        if title.clicked() {
            *next_navigation.borrow_mut() = Some(NavAction::Go("/".to_string()));
        }
        ui.label(egui::RichText::new("Data Structures & Algorithms").small().weak());
        ui.separator();

        let accent = style::ACCENT;
        let default_color = ui.visuals().text_color();
        let mut toggled_section: Option<String> = None;
        let mut toggled_item: Option<String> = None;

        let rows = self
            .navigation
            .rows(&self.registry, &self.history.current_route);

        egui::ScrollArea::vertical()
            .id_salt("nav_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in &rows {
                    match row {
                        NavRow::Section { title, expanded } => {
                            ui.add_space(6.0);
                            let arrow = if *expanded { "⏷" } else { "⏵" };
                            let response = style::truncated_label_with_sense(
                                ui,
                                egui::RichText::new(format!("{} {}", arrow, title.to_uppercase()))
                                    .small()
                                    .strong(),
                                egui::Sense::click(),
                            );
                            if response.clicked() {
                                toggled_section = Some(title.to_string());
                            }
                        }
                        NavRow::Item {
                            title,
                            slug,
                            icon,
                            href,
                            expandable,
                            expanded,
                            ..
                        } => {
                            let color = if row.is_active() { accent } else { default_color };
                            ui.horizontal(|ui| {
                                ui.add_space(style::ITEM_INDENT);
                                ui.label(
                                    egui::RichText::new(icon.glyph())
                                        .size(style::ICON_SIZE)
                                        .color(color),
                                )
                                .on_hover_text(icon.name());
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    egui::RichText::new(*title).color(color),
                                    egui::Sense::click(),
                                );

                                if *expandable {
                                    // Clicking a group only folds it; the arrow opens its overview
                                    if response.clicked() {
                                        toggled_item = Some(slug.to_string());
                                    }
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let arrow = if *expanded { "⏷" } else { "⏵" };
                                            if ui.small_button(arrow).clicked() {
                                                toggled_item = Some(slug.to_string());
                                            }
                                            if ui
                                                .small_button("→")
                                                .on_hover_text(format!("Open {}", title))
                                                .clicked()
                                            {
                                                *next_navigation.borrow_mut() =
                                                    Some(NavAction::Go(href.clone()));
                                            }
                                        },
                                    );
                                } else if response.clicked() {
                                    *next_navigation.borrow_mut() = Some(NavAction::Go(href.clone()));
                                }
                            });
                        }
                        NavRow::Child {
                            title,
                            icon,
                            href,
                            ..
                        } => {
                            let color = if row.is_active() { accent } else { default_color };
                            ui.horizontal(|ui| {
                                ui.add_space(style::CHILD_INDENT);
                                ui.label(
                                    egui::RichText::new(icon.glyph())
                                        .size(style::CHILD_ICON_SIZE)
                                        .color(color),
                                );
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    egui::RichText::new(*title).small().color(color),
                                    egui::Sense::click(),
                                );
                                if response.clicked() {
                                    *next_navigation.borrow_mut() = Some(NavAction::Go(href.clone()));
                                }
                            });
                        }
                    }
                }
            });

        if let Some(title) = toggled_section {
            self.navigation.toggle_section(&title);
        }
        if let Some(slug) = toggled_item {
            self.navigation.toggle_item(&slug);
        }
    }
}
