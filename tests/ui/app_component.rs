use cropcast::ui::app_component::{render_guarded, AppComponent};
use cropcast::ui::components::chat_assistant::ChatSender;
use cropcast::ui::core::{Action, AppContext, Component, EventType};
use cropcast::ui::router::{Route, NAV_ORDER, ROUTES};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};
use tokio::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

struct PanickingPage;

impl Component for PanickingPage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {
        panic!("render failure");
    }
}

#[tokio::test]
async fn test_initial_route_comes_from_path() {
    let app = AppComponent::new(AppContext::default(), "/forecast-dashboard-ai-prediction-interface");
    assert_eq!(app.current_route(), Route::ForecastDashboard);

    let app = AppComponent::new(AppContext::default(), "/definitely-not-a-page");
    assert_eq!(app.current_route(), Route::NotFound);
}

#[tokio::test]
async fn test_navigation_actions_change_route() {
    let mut app = AppComponent::new(AppContext::default(), "/");
    assert_eq!(app.current_route(), Route::Home);

    app.handle_app_action(Action::Navigate(Route::Methodology));
    assert_eq!(app.current_route(), Route::Methodology);

    app.handle_app_action(Action::NextPage);
    assert_eq!(app.current_route(), Route::ContactSupport);

    app.handle_app_action(Action::PreviousPage);
    assert_eq!(app.current_route(), Route::Methodology);
}

#[tokio::test]
async fn test_every_defined_path_renders() {
    for entry in ROUTES.iter() {
        let mut app = AppComponent::new(AppContext::default(), entry.path);
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f, f.area())).unwrap();
        assert!(!app.page_failed(), "page at {} failed to render", entry.path);
    }

    // The wildcard fallback renders too
    let mut app = AppComponent::new(AppContext::default(), "/missing");
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(!app.page_failed());
}

#[tokio::test]
async fn test_error_boundary_catches_page_panics() {
    let mut page = PanickingPage;
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut rendered_ok = true;
    terminal
        .draw(|f| {
            rendered_ok = render_guarded(&mut page, f, f.area());
        })
        .unwrap();

    assert!(!rendered_ok, "panic must be caught, not propagated");
}

#[tokio::test]
async fn test_home_animation_ticker_is_cancelled_on_navigation() {
    let mut app = AppComponent::new(AppContext::default(), "/");
    // The homepage schedules its metrics ticker on mount
    assert_eq!(app.active_timer_count(), 1);

    app.handle_app_action(Action::Navigate(Route::Methodology));
    assert_eq!(app.active_timer_count(), 0);

    app.handle_app_action(Action::Navigate(Route::Home));
    assert_eq!(app.active_timer_count(), 1);
}

#[tokio::test]
async fn test_chat_send_appends_user_then_bot_message() {
    let mut app = AppComponent::new(
        AppContext::default(),
        "/contact-support-agricultural-community-connection",
    );
    assert_eq!(app.active_timer_count(), 0);

    app.handle_event(EventType::Key(key(KeyCode::Char('c'))));
    assert!(app.chat().is_visible());

    for c in "hello".chars() {
        app.handle_event(EventType::Key(key(KeyCode::Char(c))));
    }
    app.handle_event(EventType::Key(key(KeyCode::Enter)));

    // Exactly one user message appended immediately, reply pending
    assert_eq!(app.chat().messages().len(), 2);
    assert_eq!(app.chat().messages().last().unwrap().sender, ChatSender::User);
    assert_eq!(app.active_timer_count(), 1);

    tokio::time::sleep(Duration::from_millis(1200)).await;
    for action in app.process_background_actions() {
        app.handle_app_action(action);
    }

    assert_eq!(app.chat().messages().len(), 3);
    assert_eq!(app.chat().messages().last().unwrap().sender, ChatSender::Bot);
}

#[tokio::test]
async fn test_empty_chat_send_is_ignored() {
    let mut app = AppComponent::new(
        AppContext::default(),
        "/contact-support-agricultural-community-connection",
    );

    app.handle_event(EventType::Key(key(KeyCode::Char('c'))));
    for _ in 0..2 {
        app.handle_event(EventType::Key(key(KeyCode::Char(' '))));
    }
    app.handle_event(EventType::Key(key(KeyCode::Enter)));

    assert_eq!(app.chat().messages().len(), 1, "only the greeting may be present");
    assert_eq!(app.active_timer_count(), 0, "no reply may be scheduled");
}

#[tokio::test]
async fn test_number_keys_jump_to_pages() {
    let mut app = AppComponent::new(AppContext::default(), "/");

    app.handle_event(EventType::Key(key(KeyCode::Char('4'))));
    assert_eq!(app.current_route(), NAV_ORDER[3]);

    app.handle_event(EventType::Key(key(KeyCode::Tab)));
    assert_eq!(app.current_route(), NAV_ORDER[4]);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = AppComponent::new(AppContext::default(), "/");
    assert!(!app.should_quit());

    app.handle_event(EventType::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_escape_closes_chat_before_quitting() {
    let mut app = AppComponent::new(AppContext::default(), "/");

    app.handle_event(EventType::Key(key(KeyCode::Char('c'))));
    assert!(app.chat().is_visible());

    app.handle_event(EventType::Key(key(KeyCode::Esc)));
    assert!(!app.chat().is_visible());
    assert!(!app.should_quit());

    app.handle_event(EventType::Key(key(KeyCode::Esc)));
    assert!(app.should_quit());
}
