//! GlyphVox
//!
//! Terminal letter and number speaker for small children: press a key,
//! see it huge, hear it spoken.

use std::fs::File;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};

use glyphvox_core::{Effect, FocusTimer, InputRouter};
use glyphvox_speech::{run_speech_thread, SpeechService};
use glyphvox_tui::{
    App, GlyphPanelWidget, LanguageSelectorWidget, ModeSelectorWidget, StatusBarWidget, Theme,
};

/// Frame rate for UI updates
const FPS: u64 = 30;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create speech channels
    let (cmd_tx, cmd_rx, evt_tx, evt_rx) = SpeechService::create_channels();

    // Shutdown flag
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_speech = shutdown.clone();

    // Spawn speech worker thread
    let speech_handle = thread::spawn(move || {
        run_speech_thread(cmd_rx, evt_tx, shutdown_speech);
    });

    // Create service handle for main thread
    let speech = SpeechService::new(cmd_tx, evt_rx);

    // Run main event loop
    let result = run_app(&mut terminal, speech, shutdown.clone());

    // Cleanup
    shutdown.store(true, Ordering::SeqCst);
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Wait for speech thread
    let _ = speech_handle.join();

    result
}

/// Log to a file when RUST_LOG is set; stdout belongs to the TUI
fn init_tracing() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("glyphvox.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    speech: SpeechService,
    shutdown: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let mut app = App::new();
    let mut router = InputRouter::new();
    let mut timer = FocusTimer::new();

    // The view appeared: arm the delayed focus request
    let effects = app.state.controller.on_appear();
    apply_effects(&mut app, &mut router, &mut timer, &speech, effects);

    let frame_duration = Duration::from_millis(1000 / FPS);
    let mut last_frame = Instant::now();

    loop {
        // Check for shutdown
        if shutdown.load(Ordering::Relaxed) || app.should_quit {
            speech.shutdown();
            break;
        }

        // Route the startup focus once the delay elapses
        if timer.fire_if_due(Instant::now()) {
            let effects = app.state.controller.on_focus_delay_elapsed();
            apply_effects(&mut app, &mut router, &mut timer, &speech, effects);
        }

        // Process speech worker events
        while let Ok(event) = speech.event_rx.try_recv() {
            app.state.handle_speech_event(event);
        }

        // Advance animations
        app.state.tick();

        // Render
        terminal.draw(|frame| {
            render_ui(frame, &mut app);
        })?;

        // Handle input
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle quit shortcut
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.quit();
                    continue;
                }

                let effects = match key.code {
                    // Mode picker: Tab toggles 123 <-> ABC
                    KeyCode::Tab => {
                        let mode = app.state.controller.mode().toggled();
                        app.state.controller.on_mode_changed(mode)
                    }
                    // Language picker: arrows toggle EN <-> DE
                    KeyCode::Left | KeyCode::Right => {
                        let language = app.state.controller.language().toggled();
                        app.state.controller.on_language_changed(language)
                    }
                    // Everything else goes to the focused input surface
                    _ => match router.handle_key(key) {
                        Some(buffer) => app.state.controller.on_text_changed(&buffer),
                        None => Vec::new(),
                    },
                };
                apply_effects(&mut app, &mut router, &mut timer, &speech, effects);
            }
        }

        // Maintain frame rate
        let elapsed = last_frame.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
        last_frame = Instant::now();
    }

    Ok(())
}

/// Interpret the effects returned by a controller dispatch
fn apply_effects(
    app: &mut App,
    router: &mut InputRouter,
    timer: &mut FocusTimer,
    speech: &SpeechService,
    effects: Vec<Effect>,
) {
    for effect in effects {
        match effect {
            Effect::ScheduleFocus(delay) => {
                timer.schedule(Instant::now(), delay);
            }
            Effect::FocusInput(mode) => {
                router.set_focus(mode);
                app.state.focus = Some(mode);
            }
            Effect::Render { animated } => {
                if animated {
                    app.state.trigger_pop();
                }
            }
            Effect::Speak { text, language } => {
                tracing::debug!(text = %text, language = language.code(), "utterance requested");
                speech.speak(text, language);
            }
        }
    }
}

fn render_ui(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let theme = &app.state.theme;

    // Clear with background
    let block = ratatui::widgets::Block::default().style(theme.normal());
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Selectors
        Constraint::Min(9),    // Glyph panel
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    // Title bar
    render_title(frame, chunks[0], theme);

    // Selector row: mode on the left, language on the right
    let selector_chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
    frame.render_widget(
        ModeSelectorWidget::new(app.state.controller.mode(), theme),
        selector_chunks[0],
    );
    frame.render_widget(
        LanguageSelectorWidget::new(app.state.controller.language(), theme),
        selector_chunks[1],
    );

    // The glyph itself
    let panel = GlyphPanelWidget::new(app.state.controller.glyph(), theme)
        .scale(app.state.pop_scale());
    frame.render_widget(panel, chunks[2]);

    // Status bar
    let status = StatusBarWidget::new(app.state.focus, app.state.controller.language(), theme)
        .message(app.state.message.as_deref(), app.state.message_type)
        .last_utterance(app.state.last_utterance.as_deref());
    frame.render_widget(status, chunks[3]);
}

fn render_title(frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let title_text = " GLYPHVOX ";
    let padding = (area.width as usize).saturating_sub(title_text.len()) / 2;
    let padded = format!(
        "{:═<pad$}{}{:═<rest$}",
        "",
        title_text,
        "",
        pad = padding,
        rest = (area.width as usize)
            .saturating_sub(padding)
            .saturating_sub(title_text.len())
    );

    let line = Line::from(Span::styled(padded, theme.title()));
    frame.render_widget(Paragraph::new(line), area);
}
