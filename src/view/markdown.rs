// Markdown rendering for explanation text

use super::code::CodeHighlighter;
use crate::style::Theme;
use eframe::egui;
use pulldown_cmark::{CodeBlockKind, Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// `marker` is "•" or "3." and `depth` starts at 1
    ListItem { marker: String, depth: usize, spans: Vec<Span> },
    Code { language: String, body: String },
}

/// Flatten markdown into the blocks the viewport knows how to draw.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut heading: Option<u8> = None;
    let mut strong = false;
    let mut emphasis = false;
    let mut code_block: Option<(String, String)> = None;
    // One entry per open list; Some(n) is the next ordinal of an ordered list
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut item: Option<(String, usize)> = None;

    for event in Parser::new(text) {
        match event {
            MarkdownEvent::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    heading = Some(match level {
                        HeadingLevel::H1 => 1,
                        HeadingLevel::H2 => 2,
                        HeadingLevel::H3 => 3,
                        HeadingLevel::H4 => 4,
                        HeadingLevel::H5 => 5,
                        HeadingLevel::H6 => 6,
                    });
                }
                Tag::Strong => strong = true,
                Tag::Emphasis => emphasis = true,
                Tag::CodeBlock(kind) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(lang) => lang.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code_block = Some((language, String::new()));
                }
                Tag::List(start) => {
                    // A nested list starts inside an item's text
                    flush(&mut blocks, &mut spans, heading, item.as_ref());
                    lists.push(start);
                }
                Tag::Item => {
                    let marker = match lists.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{}.", n);
                            *n += 1;
                            marker
                        }
                        _ => "•".to_string(),
                    };
                    item = Some((marker, lists.len()));
                }
                _ => {}
            },
            MarkdownEvent::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    flush(&mut blocks, &mut spans, heading, None);
                    heading = None;
                }
                TagEnd::Strong => strong = false,
                TagEnd::Emphasis => emphasis = false,
                TagEnd::CodeBlock => {
                    if let Some((language, body)) = code_block.take() {
                        blocks.push(Block::Code { language, body });
                    }
                }
                TagEnd::Paragraph => flush(&mut blocks, &mut spans, None, item.as_ref()),
                TagEnd::Item => {
                    flush(&mut blocks, &mut spans, None, item.as_ref());
                    item = None;
                }
                TagEnd::List(_) => {
                    lists.pop();
                }
                _ => {}
            },
            MarkdownEvent::Text(text) => {
                if let Some((_, body)) = &mut code_block {
                    body.push_str(&text);
                } else {
                    spans.push(Span {
                        text: text.to_string(),
                        strong,
                        emphasis,
                        code: false,
                    });
                }
            }
            MarkdownEvent::Code(code) => spans.push(Span {
                text: code.to_string(),
                strong,
                emphasis,
                code: true,
            }),
            MarkdownEvent::SoftBreak => spans.push(Span {
                text: " ".to_string(),
                ..Default::default()
            }),
            MarkdownEvent::HardBreak => spans.push(Span {
                text: "\n".to_string(),
                ..Default::default()
            }),
            _ => {}
        }
    }

    flush(&mut blocks, &mut spans, heading, item.as_ref());
    blocks
}

fn flush(
    blocks: &mut Vec<Block>,
    spans: &mut Vec<Span>,
    heading: Option<u8>,
    item: Option<&(String, usize)>,
) {
    if spans.is_empty() {
        return;
    }
    let spans = std::mem::take(spans);
    blocks.push(match (heading, item) {
        (Some(level), _) => Block::Heading { level, spans },
        (None, Some((marker, depth))) => Block::ListItem {
            marker: marker.clone(),
            depth: *depth,
            spans,
        },
        (None, None) => Block::Paragraph(spans),
    });
}

pub fn render_markdown(ui: &mut egui::Ui, text: &str, highlighter: &CodeHighlighter, theme: Theme) {
    let body_size = egui::TextStyle::Body.resolve(ui.style()).size;

    for block in parse_blocks(text) {
        match block {
            Block::Heading { level, spans } => {
                let size = match level {
                    1 => body_size + 10.0,
                    2 => body_size + 6.0,
                    3 => body_size + 4.0,
                    4 => body_size + 2.0,
                    _ => body_size,
                };
                ui.add_space(4.0);
                ui.label(layout_spans(ui, &spans, size, true));
                ui.add_space(5.0);
            }
            Block::Paragraph(spans) => {
                ui.label(layout_spans(ui, &spans, body_size, false));
                ui.add_space(5.0);
            }
            Block::ListItem {
                marker,
                depth,
                spans,
            } => {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(12.0 * depth as f32);
                    ui.label(marker);
                    ui.label(layout_spans(ui, &spans, body_size, false));
                });
            }
            Block::Code { language, body } => {
                highlighter.render(ui, &body, &language, theme);
                ui.add_space(5.0);
            }
        }
    }
}

fn layout_spans(ui: &egui::Ui, spans: &[Span], size: f32, bold: bool) -> egui::text::LayoutJob {
    let visuals = ui.visuals();
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = ui.available_width();

    for span in spans {
        let color = if bold || span.strong {
            visuals.strong_text_color()
        } else {
            visuals.text_color()
        };
        let mut format = egui::TextFormat {
            font_id: if span.code {
                egui::FontId::monospace(size)
            } else {
                egui::FontId::proportional(size)
            },
            color,
            italics: span.emphasis,
            ..Default::default()
        };
        if span.code {
            format.background = visuals.code_bg_color;
        }
        job.append(&span.text, 0.0, format);
    }

    job
}
