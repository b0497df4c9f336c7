mod app;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use crate::app::App;
use crate::config::Config;
use crate::core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::Scene;
use utils::error::Result;

fn main() -> Result<()> {
    let config = Config::from_env();
    utils::logging::init(config.log_file.as_deref(), &config.log_filter);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        fps = config.fps,
        settings = ?config.settings_file,
        "starting"
    );

    // Create app (번역 테이블 로드 실패는 터미널 설정 전에 보고)
    let mut app = App::new(&config)?;
    if let Some(code) = config.lang.as_deref() {
        app.set_language_code(code);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, config.frame_interval());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminated with error");
        eprintln!("Error: {:?}", err);
    }
    tracing::info!("exiting");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()> {
    let started = Instant::now();
    app.mount(Duration::ZERO);

    loop {
        terminal.draw(|f| {
            let area = f.area();

            // 레이아웃 업데이트 (언어 방향 반영)
            let direction = app.i18n().direction();
            app.layout.update(area, direction);

            let particles = app.particles();
            let scene = Scene::new(app.i18n(), &app.layout, &app.theme, app.elapsed())
                .particles(&particles)
                .shapes(app.shapes())
                .hover(app.hover())
                .commands(generate_command_bar_items(app.i18n()))
                .toast(app.toast());
            f.render_widget(scene, area);
        })?;

        // 다음 프레임 또는 다음 컨페티 생성/제거 중 빠른 쪽까지 대기
        let now = started.elapsed();
        let poll_timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now).min(frame_interval))
            .unwrap_or(frame_interval);

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        app.on_tick(started.elapsed());

        if app.should_quit() {
            break;
        }
    }

    app.unmount();
    Ok(())
}

/// 키 처리 (액션 레지스트리 기반)
fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if let Some(action) = find_action(key.modifiers, key.code) {
        app.execute_action(action);
    }
}

/// 마우스 처리: 이동은 호버, 왼쪽 클릭은 언어 버튼
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => app.hover_at(mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => app.click_at(mouse.column, mouse.row),
        _ => {}
    }
}
