// Syntax-highlighted code samples

use crate::style::{self, Theme};
use eframe::egui;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// `language` is a fence tag or a name like "python"; anything unknown
    /// (pseudocode included) is shown as plain text.
    pub fn highlight(&self, code: &str, language: &str, theme: Theme) -> egui::text::LayoutJob {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut job = egui::text::LayoutJob::default();
        let fallback_color = match theme {
            Theme::Dark => egui::Color32::from_gray(220),
            Theme::Light => egui::Color32::from_gray(30),
        };
        let font_id = egui::FontId::monospace(style::CODE_FONT_SIZE);

        let Some(code_theme) = self.theme_set.themes.get(theme.code_theme()) else {
            job.append(
                code,
                0.0,
                egui::TextFormat {
                    font_id,
                    color: fallback_color,
                    ..Default::default()
                },
            );
            return job;
        };

        let mut highlighter = HighlightLines::new(syntax, code_theme);
        for line in LinesWithEndings::from(code).take(style::MAX_HIGHLIGHTED_LINES) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    for (style, text) in ranges {
                        let color = egui::Color32::from_rgb(
                            style.foreground.r,
                            style.foreground.g,
                            style.foreground.b,
                        );
                        job.append(
                            text,
                            0.0,
                            egui::TextFormat {
                                font_id: font_id.clone(),
                                color,
                                ..Default::default()
                            },
                        );
                    }
                }
                Err(e) => {
                    log::debug!("Highlighting failed, falling back to plain text: {}", e);
                    job.append(
                        line,
                        0.0,
                        egui::TextFormat {
                            font_id: font_id.clone(),
                            color: fallback_color,
                            ..Default::default()
                        },
                    );
                }
            }
        }

        job
    }

    pub fn render(&self, ui: &mut egui::Ui, code: &str, language: &str, theme: Theme) {
        let total_lines = code.lines().count();
        if total_lines > style::MAX_HIGHLIGHTED_LINES {
            ui.label(
                egui::RichText::new(format!(
                    "Showing first {} of {} lines",
                    style::MAX_HIGHLIGHTED_LINES,
                    total_lines
                ))
                .italics(),
            );
        }

        let job = self.highlight(code, language, theme);
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::ScrollArea::horizontal()
                    .id_salt(("code", language, code.len()))
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(job).extend());
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_source_text() {
        let highlighter = CodeHighlighter::new();
        let code = "def quick_sort(arr):\n    return arr\n";
        let job = highlighter.highlight(code, "python", Theme::Dark);
        assert_eq!(job.text, code);
        assert!(job.sections.len() > 1);
    }

    #[test]
    fn test_unknown_language_is_plain_text() {
        let highlighter = CodeHighlighter::new();
        let code = "FUNCTION binarySearch(arr, target)\n";
        let job = highlighter.highlight(code, "pseudocode", Theme::Light);
        assert_eq!(job.text, code);
    }

    #[test]
    fn test_long_samples_are_cut() {
        let highlighter = CodeHighlighter::new();
        let code = "x = 1\n".repeat(style::MAX_HIGHLIGHTED_LINES + 10);
        let job = highlighter.highlight(&code, "py", Theme::Dark);
        assert_eq!(job.text.lines().count(), style::MAX_HIGHLIGHTED_LINES);
    }
}
