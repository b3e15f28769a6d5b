use crate::constants::{CHAT_CANNED_REPLY, FALLBACK_BODY, FALLBACK_TITLE};
use crate::theme::ColorRole;
use crate::ui::components::{ChatAssistant, NavBar, StatusBar};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    scheduler::{Scheduler, TimerId},
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::router::{Route, NAV_ORDER};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tokio::sync::mpsc;

/// Render a page behind the error boundary.
///
/// Returns false if the page panicked; the caller substitutes the fallback
/// view and the rest of the application keeps running.
pub fn render_guarded(page: &mut dyn Component, f: &mut Frame, rect: Rect) -> bool {
    let frame = AssertUnwindSafe(&mut *f);
    let page = AssertUnwindSafe(page);
    catch_unwind(move || {
        let frame = frame;
        let mut page = page;
        page.0.render(frame.0, rect);
    })
    .is_ok()
}

/// Root component: owns routing, the active page, the chat overlay, and all
/// pending timers.
pub struct AppComponent {
    // Shared services
    ctx: AppContext,

    // Routing state
    current_route: Route,
    page: Box<dyn Component>,
    page_failed: bool,

    // Overlay
    chat: ChatAssistant,

    // Timers
    scheduler: Scheduler,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    active_animation_timer: Option<TimerId>,

    // Simple UI state
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: AppContext, initial_path: &str) -> Self {
        let (scheduler, background_action_rx) = Scheduler::new();
        let current_route = Route::resolve(initial_path);
        let page = current_route.make_page(&ctx);
        let chat = ChatAssistant::new(ctx.clone());

        let mut app = Self {
            ctx,
            current_route,
            page,
            page_failed: false,
            chat,
            scheduler,
            background_action_rx,
            active_animation_timer: None,
            should_quit: false,
        };
        app.start_page_animation();
        app.ctx.logger.log(format!(
            "Router: initial route {} for path '{}'",
            app.current_route.title(),
            initial_path
        ));
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        self.current_route
    }

    #[must_use]
    pub fn page_failed(&self) -> bool {
        self.page_failed
    }

    #[must_use]
    pub fn chat(&self) -> &ChatAssistant {
        &self.chat
    }

    /// Get the number of pending timers
    #[must_use]
    pub fn active_timer_count(&self) -> usize {
        self.scheduler.timer_count()
    }

    /// Replace the active page. The fresh component starts with scroll at the
    /// top and a restarted animation; the outgoing page's ticker is aborted
    /// so it can never touch the new page.
    fn navigate(&mut self, route: Route) {
        self.stop_page_animation();
        self.current_route = route;
        self.page = route.make_page(&self.ctx);
        self.page_failed = false;
        self.start_page_animation();

        self.ctx
            .logger
            .log(format!("Router: navigated to {} ({})", route.title(), route.path()));
        log::info!("navigated to {}", route.path());
    }

    fn start_page_animation(&mut self) {
        if self.page.uses_animation() {
            let timing = &self.ctx.theme.timing;
            let timer_id = self.scheduler.spawn_repeating(
                timing.metrics_step_interval(),
                timing.metrics_steps,
                Action::MetricsTick,
                "Metrics counter animation".to_string(),
            );
            self.active_animation_timer = Some(timer_id);
        }
    }

    fn stop_page_animation(&mut self) {
        if let Some(timer_id) = self.active_animation_timer.take() {
            self.scheduler.cancel(timer_id);
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc => {
                if self.chat.is_visible() {
                    Action::CloseChat
                } else {
                    Action::Quit
                }
            }
            KeyCode::Tab => Action::NextPage,
            KeyCode::BackTab => Action::PreviousPage,
            KeyCode::Char('c') => Action::OpenChat,
            KeyCode::Char('t') => Action::CycleIconTheme,
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                Action::Navigate(NAV_ORDER[index])
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(route) => {
                self.navigate(route);
                Action::None
            }
            Action::NextPage => {
                self.navigate(self.current_route.next());
                Action::None
            }
            Action::PreviousPage => {
                self.navigate(self.current_route.previous());
                Action::None
            }
            Action::OpenChat => {
                self.chat.open();
                self.ctx.logger.log("Chat: assistant opened".to_string());
                Action::None
            }
            Action::CloseChat => {
                self.chat.close();
                self.ctx.logger.log("Chat: assistant closed".to_string());
                Action::None
            }
            Action::SendChatMessage => {
                // Empty input is ignored inside submit; each accepted send
                // schedules its own independent reply timer.
                if let Some(text) = self.chat.submit() {
                    self.ctx.logger.log(format!("Chat: user message '{}'", text));
                    self.scheduler.spawn_delayed(
                        self.ctx.theme.timing.chat_reply_delay(),
                        Action::BotReplyReady(CHAT_CANNED_REPLY.to_string()),
                        "Assistant reply".to_string(),
                    );
                }
                Action::None
            }
            Action::BotReplyReady(text) => {
                self.ctx.logger.log("Chat: assistant reply appended".to_string());
                self.chat.push_bot_reply(text);
                Action::None
            }
            Action::MetricsTick => {
                // Route animation steps into the active page
                self.page.update(Action::MetricsTick);
                Action::None
            }
            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                self.chat.set_icons(self.ctx.icons.clone());
                // Pages capture the icon set at construction
                self.navigate(self.current_route);
                Action::None
            }
            // Pass through other actions
            other => other,
        }
    }

    /// Process background actions from the scheduler
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.scheduler.cleanup_finished();
        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.chat.is_visible() {
                    // The overlay has priority when visible
                    self.chat.handle_key_events(key)
                } else {
                    // Pages see scroll keys first, then global shortcuts
                    let page_action = self.page.handle_key_events(key);
                    if matches!(page_action, Action::None) {
                        self.handle_global_key(key)
                    } else {
                        page_action
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Render | EventType::Other => Action::None,
        };

        self.handle_app_action(action);
    }

    fn render_fallback(&self, f: &mut Frame, rect: Rect) {
        let theme = &self.ctx.theme;
        let lines = vec![
            Line::raw(""),
            Line::styled(
                format!("{} {}", self.ctx.icons.error(), FALLBACK_TITLE),
                Style::default()
                    .fg(theme.color(ColorRole::Error))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(FALLBACK_BODY, Style::default().fg(theme.color(ColorRole::Text))),
        ];

        let fallback = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.color(ColorRole::Error))),
            );
        f.render_widget(fallback, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        NavBar::render(f, chunks[0], &self.ctx, self.current_route);

        if !self.page_failed && !render_guarded(self.page.as_mut(), f, chunks[1]) {
            self.page_failed = true;
            self.stop_page_animation();
            self.ctx
                .logger
                .log("Render: page panicked, switching to fallback view".to_string());
            log::warn!("page {} panicked during render", self.current_route.path());
        }
        if self.page_failed {
            self.render_fallback(f, chunks[1]);
        }

        StatusBar::render(f, chunks[2], &self.ctx.theme, self.chat.is_visible());

        // Chat overlay on top
        if self.chat.is_visible() {
            self.chat.render(f, rect);
        }
    }
}
