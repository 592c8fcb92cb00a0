use crate::config::Config;
use crate::io::{spawn_worker, ContentClient, ContentRequest, IoCommand, IoResult};
use crate::registry::{Page, Registry};
use crate::state::{ContentState, NavigationState, RouteHistory, UIState};
use crate::style;
use crate::view::{CodeHighlighter, NavAction};
use eframe::egui;
use std::cell::RefCell;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

pub struct LearnDsa {
    // Navigation
    pub(crate) registry: Registry,
    pub(crate) navigation: NavigationState,
    pub(crate) history: RouteHistory,
    pub(crate) page: Page,

    // Content
    pub(crate) content: ContentState,
    pub(crate) highlighter: CodeHighlighter,

    // UI & settings
    pub(crate) ui: UIState,
    pub(crate) config: Config,
    pub(crate) api_base_url: String,

    // Worker channels; None when the backend client could not be built
    pub(crate) io_tx: Option<UnboundedSender<IoCommand>>,
    pub(crate) io_rx: Option<Receiver<IoResult>>,
    backend_error: Option<String>,
}

impl LearnDsa {
    pub fn new(ctx: &egui::Context, config: Config, registry: Registry) -> Self {
        let api_base_url = config.api_base_url();
        let mut app = Self::detached(config, registry, api_base_url);

        match ContentClient::new(&app.api_base_url, app.config.request_timeout()) {
            Ok(client) => {
                log::info!("Using content backend at {}", client.base_url());
                let (tx, rx) = spawn_worker(ctx.clone(), client);
                app.io_tx = Some(tx);
                app.io_rx = Some(rx);
            }
            Err(e) => {
                log::error!("Content backend unavailable: {}", e);
                app.ui.set_error(format!("Content backend unavailable: {}", e));
                app.backend_error = Some(e.to_string());
            }
        }

        ctx.set_visuals(app.ui.theme.visuals());
        let font_size = app.ui.font_size;
        ctx.style_mut(|style| {
            for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
                if let Some(font) = style.text_styles.get_mut(&text_style) {
                    font.size = font_size;
                }
            }
        });

        app.load_current_page();
        app
    }

    /// App state without a running worker.
    pub(crate) fn detached(config: Config, registry: Registry, api_base_url: String) -> Self {
        let ui = UIState::new(
            config.theme(),
            config
                .panel
                .sidebar_width
                .clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX),
            config.font.font_size,
        );

        Self {
            navigation: NavigationState::new(&registry),
            registry,
            history: RouteHistory::new("/"),
            page: Page::Home,
            content: ContentState::Static,
            highlighter: CodeHighlighter::new(),
            ui,
            config,
            api_base_url,
            io_tx: None,
            io_rx: None,
            backend_error: None,
        }
    }

    pub fn navigate(&mut self, route: String) {
        if route == self.history.current_route {
            return;
        }
        self.history.push(route);
        self.load_current_page();
    }

    pub fn go_back(&mut self) {
        if self.history.go_back().is_some() {
            self.load_current_page();
        }
    }

    pub fn go_forward(&mut self) {
        if self.history.go_forward().is_some() {
            self.load_current_page();
        }
    }

    pub(crate) fn load_current_page(&mut self) {
        let route = self.history.current_route.clone();
        self.page = self.registry.resolve(&route);

        let request = match &self.page {
            Page::Topic(topic) => ContentRequest::for_topic(topic),
            _ => None,
        };
        self.content = match request {
            Some(request) => self.request_content(route, request),
            None => ContentState::Static,
        };
    }

    fn request_content(&mut self, route: String, request: ContentRequest) -> ContentState {
        let Some(tx) = &self.io_tx else {
            let message = self
                .backend_error
                .clone()
                .unwrap_or_else(|| "Content loader is not running".to_string());
            return ContentState::Failed { route, message };
        };

        match tx.send(IoCommand::LoadPage {
            route: route.clone(),
            request,
        }) {
            Ok(()) => ContentState::Loading { route },
            Err(_) => {
                log::error!("Content loader stopped; cannot load {}", route);
                self.io_tx = None;
                ContentState::Failed {
                    route,
                    message: "Content loader stopped".to_string(),
                }
            }
        }
    }

    pub(crate) fn process_io_results(&mut self) {
        let Some(rx) = &self.io_rx else {
            return;
        };
        let results: Vec<IoResult> = rx.try_iter().collect();

        for result in results {
            match result {
                IoResult::PageLoaded { route, result } => {
                    let failure = result.as_ref().err().cloned();
                    if !self.content.apply(route.clone(), result) {
                        log::debug!("Dropping stale content for {}", route);
                        continue;
                    }
                    match failure {
                        Some(message) => self.ui.set_error(message),
                        None => log::debug!("Loaded {}", route),
                    }
                }
                IoResult::Error(message) => {
                    self.ui.set_error(message);
                }
            }
        }
    }

    pub(crate) fn apply_action(&mut self, action: NavAction) {
        match action {
            NavAction::Go(route) => self.navigate(route),
            NavAction::Back => self.go_back(),
            NavAction::Forward => self.go_forward(),
            NavAction::Reload => self.load_current_page(),
        }
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.ui.toggle_theme();
        ctx.set_visuals(self.ui.theme.visuals());

        self.config.theme.mode = self.ui.theme.mode().to_string();
        self.config.panel.sidebar_width = self.ui.sidebar_width;
        match self.config.save() {
            Ok(()) => self.ui.set_info(format!("Switched to {} theme", self.ui.theme.mode())),
            Err(e) => {
                log::warn!("Failed to save config: {}", e);
                self.ui.set_error(format!("Could not save settings: {}", e));
            }
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.go_back();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.go_forward();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::Home)) {
            self.navigate("/".to_string());
        }
    }
}

impl eframe::App for LearnDsa {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_io_results();
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        self.handle_input(ctx);

        // Deferred so panels render against one consistent route
        let next_navigation = RefCell::new(None);

        egui::TopBottomPanel::top("header")
            .exact_height(style::HEADER_HEIGHT)
            .show(ctx, |ui| {
                self.render_header(ui, &next_navigation);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        let sidebar = egui::SidePanel::left("nav_panel")
            .resizable(true)
            .default_width(self.ui.sidebar_width)
            .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
            .show(ctx, |ui| {
                self.render_sidebar(ui, &next_navigation);
            });
        self.ui.sidebar_width = sidebar.response.rect.width();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_content(ui, &next_navigation);
        });

        if let Some(action) = next_navigation.into_inner() {
            self.apply_action(action);
        }

        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::schema::{Algorithm, Difficulty};
    use crate::io::PageContent;
    use std::sync::mpsc::{channel, Sender};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    struct Harness {
        app: LearnDsa,
        commands: UnboundedReceiver<IoCommand>,
        results: Sender<IoResult>,
    }

    fn harness() -> Harness {
        let registry = Registry::reference().unwrap();
        let mut app = LearnDsa::detached(
            Config::default(),
            registry,
            "http://localhost:8000/api".to_string(),
        );
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let (res_tx, res_rx) = channel();
        app.io_tx = Some(cmd_tx);
        app.io_rx = Some(res_rx);
        Harness {
            app,
            commands: cmd_rx,
            results: res_tx,
        }
    }

    fn algorithm(slug: &str) -> PageContent {
        PageContent::Algorithm(Algorithm {
            id: 1,
            name: slug.into(),
            slug: slug.into(),
            category: "sorting".into(),
            description: None,
            explanation: None,
            pseudocode: None,
            python_code: None,
            javascript_code: None,
            time_complexity_best: None,
            time_complexity_average: None,
            time_complexity_worst: None,
            space_complexity: None,
            difficulty: Difficulty::Beginner,
            use_cases: None,
            visualization_data: None,
        })
    }

    #[test]
    fn test_topic_navigation_requests_content() {
        let mut h = harness();
        h.app.navigate("/algorithms/sorting/quick-sort".into());

        assert!(matches!(h.app.page, Page::Topic(ref t) if t.slug == "sorting/quick-sort"));
        assert!(h.app.content.is_loading());

        let IoCommand::LoadPage { route, request } = h.commands.try_recv().unwrap();
        assert_eq!(route, "/algorithms/sorting/quick-sort");
        assert_eq!(
            request,
            ContentRequest::Algorithm {
                slug: "quick-sort".into()
            }
        );
    }

    #[test]
    fn test_static_pages_request_nothing() {
        let mut h = harness();
        h.app.navigate("/algorithms".into());
        assert_eq!(h.app.page, Page::Section(1));
        assert_eq!(h.app.content, ContentState::Static);

        h.app.navigate("/nowhere".into());
        assert_eq!(h.app.page, Page::NotFound);
        assert!(h.commands.try_recv().is_err());
    }

    #[test]
    fn test_late_result_for_previous_route_is_ignored() {
        let mut h = harness();
        h.app.navigate("/algorithms/sorting/quick-sort".into());
        h.app.navigate("/algorithms/sorting/merge-sort".into());

        h.results
            .send(IoResult::PageLoaded {
                route: "/algorithms/sorting/quick-sort".into(),
                result: Ok(algorithm("quick-sort")),
            })
            .unwrap();
        h.app.process_io_results();
        assert_eq!(
            h.app.content,
            ContentState::Loading {
                route: "/algorithms/sorting/merge-sort".into()
            }
        );

        h.results
            .send(IoResult::PageLoaded {
                route: "/algorithms/sorting/merge-sort".into(),
                result: Ok(algorithm("merge-sort")),
            })
            .unwrap();
        h.app.process_io_results();
        assert_eq!(
            h.app.content,
            ContentState::Loaded {
                route: "/algorithms/sorting/merge-sort".into(),
                content: algorithm("merge-sort"),
            }
        );
    }

    #[test]
    fn test_failed_load_is_shown_inline_and_in_status() {
        let mut h = harness();
        h.app.navigate("/data-structures/heaps".into());
        h.results
            .send(IoResult::PageLoaded {
                route: "/data-structures/heaps".into(),
                result: Err("failed to fetch category (HTTP 404 Not Found)".into()),
            })
            .unwrap();
        h.app.process_io_results();

        assert!(matches!(h.app.content, ContentState::Failed { .. }));
        let (message, _) = h.app.ui.error_message.clone().unwrap();
        assert!(message.starts_with("failed to fetch category"));
    }

    #[test]
    fn test_back_and_forward_reload_pages() {
        let mut h = harness();
        h.app.navigate("/data-structures".into());
        h.app.navigate("/data-structures/arrays".into());
        let _ = h.commands.try_recv().unwrap();

        h.app.apply_action(NavAction::Back);
        assert_eq!(h.app.history.current_route, "/data-structures");
        assert_eq!(h.app.page, Page::Section(0));

        h.app.apply_action(NavAction::Forward);
        assert!(h.app.content.is_loading());
        let IoCommand::LoadPage { route, .. } = h.commands.try_recv().unwrap();
        assert_eq!(route, "/data-structures/arrays");
    }

    #[test]
    fn test_without_worker_topic_fails_inline() {
        let registry = Registry::reference().unwrap();
        let mut app = LearnDsa::detached(Config::default(), registry, String::new());
        app.navigate("/algorithms/greedy".into());
        assert!(matches!(app.content, ContentState::Failed { .. }));

        app.navigate("/".into());
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.content, ContentState::Static);
    }
}
