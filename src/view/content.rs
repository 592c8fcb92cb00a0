// Content viewport: one renderer per page kind

use super::markdown::render_markdown;
use super::NavAction;
use crate::app::LearnDsa;
use crate::io::schema::{Algorithm, Category, Difficulty, Example};
use crate::io::PageContent;
use crate::registry::{Page, Topic};
use crate::state::ContentState;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl LearnDsa {
    pub(crate) fn render_content(&self, ui: &mut egui::Ui, next_navigation: &RefCell<Option<NavAction>>) {
        egui::ScrollArea::vertical()
            .id_salt(("content_scroll", self.history.current_route.as_str()))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width().min(style::CONTENT_MAX_WIDTH));
                ui.add_space(12.0);
                match &self.page {
                    Page::Home => self.render_home(ui, next_navigation),
                    Page::Section(index) => self.render_section(ui, *index, next_navigation),
                    Page::Topic(topic) => self.render_topic(ui, topic, next_navigation),
                    Page::NotFound => render_not_found(ui, &self.history.current_route, next_navigation),
                }
                ui.add_space(24.0);
            });
    }

    fn render_home(&self, ui: &mut egui::Ui, next_navigation: &RefCell<Option<NavAction>>) {
        ui.heading(egui::RichText::new("Learn Data Structures & Algorithms").size(26.0).strong());
        ui.label("Explanations, complexity analysis and code for the fundamentals.");
        ui.add_space(12.0);

        for section in self.registry.sections() {
            ui.add_space(8.0);
            if ui.link(egui::RichText::new(&section.title).heading()).clicked() {
                *next_navigation.borrow_mut() = Some(NavAction::Go(section.path()));
            }
            ui.horizontal_wrapped(|ui| {
                for item in &section.items {
                    let text = format!("{} {}", item.icon.glyph(), item.title);
                    if ui.button(text).clicked() {
                        *next_navigation.borrow_mut() = Some(NavAction::Go(section.href(&item.slug)));
                    }
                }
            });
        }
    }

    fn render_section(&self, ui: &mut egui::Ui, index: usize, next_navigation: &RefCell<Option<NavAction>>) {
        let Some(section) = self.registry.section(index) else {
            render_not_found(ui, &self.history.current_route, next_navigation);
            return;
        };

        ui.heading(egui::RichText::new(&section.title).size(24.0).strong());
        ui.add_space(8.0);

        for item in &section.items {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(item.icon.glyph()).size(style::ICON_SIZE));
                if ui.link(&item.title).clicked() {
                    *next_navigation.borrow_mut() = Some(NavAction::Go(section.href(&item.slug)));
                }
            });
            for child in &item.children {
                ui.horizontal(|ui| {
                    ui.add_space(style::CHILD_INDENT);
                    if ui.link(egui::RichText::new(&child.title).small()).clicked() {
                        *next_navigation.borrow_mut() = Some(NavAction::Go(section.href(&child.slug)));
                    }
                });
            }
        }
    }

    fn render_topic(&self, ui: &mut egui::Ui, topic: &Topic, next_navigation: &RefCell<Option<NavAction>>) {
        match &self.content {
            ContentState::Static => {
                ui.heading(egui::RichText::new(&topic.title).size(24.0).strong());
                ui.label(egui::RichText::new("No content is published for this topic.").weak());
            }
            ContentState::Loading { .. } => {
                ui.heading(egui::RichText::new(&topic.title).size(24.0).strong());
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading…");
                });
            }
            ContentState::Failed { message, .. } => {
                ui.heading(egui::RichText::new(&topic.title).size(24.0).strong());
                ui.add_space(8.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new("Could not load this page").color(style::ERROR).strong());
                    ui.label(message);
                    if ui.button("Retry").clicked() {
                        *next_navigation.borrow_mut() = Some(NavAction::Reload);
                    }
                });
            }
            ContentState::Loaded { content, .. } => match content {
                PageContent::Examples { category, examples } => {
                    self.render_examples(ui, category, examples);
                }
                PageContent::AlgorithmGroup {
                    category,
                    algorithms,
                } => self.render_algorithm_group(ui, topic, category, algorithms, next_navigation),
                PageContent::Algorithm(algorithm) => self.render_algorithm(ui, algorithm),
            },
        }
    }

    fn render_examples(&self, ui: &mut egui::Ui, category: &Category, examples: &[Example]) {
        render_category_header(ui, category);

        if examples.is_empty() {
            ui.label(egui::RichText::new("No examples yet.").weak());
            return;
        }

        for example in examples {
            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&example.title).size(20.0).strong());
                difficulty_badge(ui, example.difficulty);
            });
            if let Some(description) = &example.description {
                ui.label(description);
            }
            ui.add_space(6.0);
            complexity_table(
                ui,
                ("example_complexity", example.id),
                &[
                    ("Time", example.time_complexity.as_deref()),
                    ("Space", example.space_complexity.as_deref()),
                ],
            );
            if let Some(explanation) = &example.explanation {
                ui.add_space(6.0);
                render_markdown(ui, explanation, &self.highlighter, self.ui.theme);
            }
            if let Some(code) = &example.code_example {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Code").strong());
                self.highlighter.render(ui, code, "python", self.ui.theme);
            }
            bullet_list(ui, "Use cases", &example.use_case_list());
            bullet_list(ui, "Pros", &example.pro_list());
            bullet_list(ui, "Cons", &example.con_list());
        }
    }

    fn render_algorithm_group(
        &self,
        ui: &mut egui::Ui,
        topic: &Topic,
        category: &Category,
        algorithms: &[Algorithm],
        next_navigation: &RefCell<Option<NavAction>>,
    ) {
        render_category_header(ui, category);

        if algorithms.is_empty() {
            ui.label(egui::RichText::new("No algorithms in this category yet.").weak());
            return;
        }

        let children = self
            .registry
            .find_item(&topic.base_path, &topic.slug)
            .map(|item| item.children.as_slice())
            .unwrap_or_default();

        for algorithm in algorithms {
            ui.add_space(8.0);
            let child_slug = format!("{}/{}", topic.slug, algorithm.slug);
            let child = children.iter().find(|c| c.slug == child_slug);

            ui.horizontal(|ui| {
                let name = egui::RichText::new(&algorithm.name).size(17.0).strong();
                match child {
                    Some(child) => {
                        if ui.link(name).clicked() {
                            *next_navigation.borrow_mut() =
                                Some(NavAction::Go(format!("/{}/{}", topic.base_path, child.slug)));
                        }
                    }
                    None => {
                        ui.label(name);
                    }
                }
                difficulty_badge(ui, algorithm.difficulty);
                if let Some(average) = &algorithm.time_complexity_average {
                    ui.label(egui::RichText::new(average).monospace().weak());
                }
            });
            if let Some(description) = &algorithm.description {
                ui.label(description);
            }
        }
    }

    fn render_algorithm(&self, ui: &mut egui::Ui, algorithm: &Algorithm) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(&algorithm.name).size(24.0).strong());
            difficulty_badge(ui, algorithm.difficulty);
        });
        if let Some(description) = &algorithm.description {
            ui.label(description);
        }
        ui.add_space(8.0);

        complexity_table(
            ui,
            ("algorithm_complexity", algorithm.id),
            &[
                ("Best", algorithm.time_complexity_best.as_deref()),
                ("Average", algorithm.time_complexity_average.as_deref()),
                ("Worst", algorithm.time_complexity_worst.as_deref()),
                ("Space", algorithm.space_complexity.as_deref()),
            ],
        );

        if let Some(explanation) = &algorithm.explanation {
            ui.add_space(8.0);
            render_markdown(ui, explanation, &self.highlighter, self.ui.theme);
        }

        let samples = [
            ("Pseudocode", "txt", &algorithm.pseudocode),
            ("Python", "python", &algorithm.python_code),
            ("JavaScript", "javascript", &algorithm.javascript_code),
        ];
        for (label, language, code) in samples {
            if let Some(code) = code {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(label).strong());
                self.highlighter.render(ui, code, language, self.ui.theme);
            }
        }

        bullet_list(ui, "Use cases", &algorithm.use_case_list());
    }
}

fn render_not_found(ui: &mut egui::Ui, route: &str, next_navigation: &RefCell<Option<NavAction>>) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Page not found").size(22.0).strong());
        ui.label(egui::RichText::new(route).monospace().weak());
        ui.add_space(10.0);
        if ui.button("Back to home").clicked() {
            *next_navigation.borrow_mut() = Some(NavAction::Go("/".to_string()));
        }
    });
}

fn render_category_header(ui: &mut egui::Ui, category: &Category) {
    ui.heading(egui::RichText::new(&category.name).size(24.0).strong());
    if let Some(description) = &category.description {
        ui.label(description);
    }
    ui.add_space(8.0);
}

fn difficulty_badge(ui: &mut egui::Ui, difficulty: Difficulty) {
    let color = match difficulty {
        Difficulty::Beginner => egui::Color32::from_rgb(90, 180, 110),
        Difficulty::Intermediate => egui::Color32::from_rgb(220, 170, 60),
        Difficulty::Advanced => style::ERROR,
    };
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(difficulty.label()).small().color(color));
        });
}

/// Two-column table; rows without a value are skipped and an all-empty table is not drawn.
fn complexity_table(ui: &mut egui::Ui, id: impl std::hash::Hash, rows: &[(&str, Option<&str>)]) {
    let rows: Vec<(&str, &str)> = rows
        .iter()
        .filter_map(|(label, value)| value.map(|v| (*label, v)))
        .collect();
    if rows.is_empty() {
        return;
    }

    ui.push_id(id, |ui| {
        use egui_extras::{Column, TableBuilder};
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(90.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Complexity");
                });
                header.col(|ui| {
                    ui.strong("");
                });
            })
            .body(|body| {
                body.rows(22.0, rows.len(), |mut row| {
                    let (label, value) = rows[row.index()];
                    row.col(|ui| {
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(value).monospace());
                    });
                });
            });
    });
}

fn bullet_list(ui: &mut egui::Ui, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.label(egui::RichText::new(heading).strong());
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.add_space(style::ITEM_INDENT);
            ui.label("•");
            ui.label(item);
        });
    }
}
