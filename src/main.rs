use std::io;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use tabsheet::app::App;
use tabsheet::session::SessionStore;
use tabsheet::startup::{self, Options};
use tabsheet::telemetry::TracingTelemetry;
use tabsheet::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let options = Options::parse(std::env::args().skip(1));
    if options.show_version {
        println!("tabsheet {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;
    startup::init_tracing();
    setup_panic_hook();

    let sessions = match &options.sessions_file {
        Some(path) => startup::load_sessions(path)?,
        None => startup::default_sessions(),
    };
    let mut store = SessionStore::new();
    for session in sessions {
        store.add(session);
    }

    let mut app = App::new(store, Box::new(TracingTelemetry));

    // Everything is single-threaded: pointer events, ticks and animation
    // completions all run on this one event loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // First layout pass: animate the sheet in
    app.present_sheet(Instant::now());

    loop {
        if app.needs_redraw || app.is_animating() {
            let now = Instant::now();
            terminal.draw(|f| ui::render(f, app, now))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the sheet and settle animations
        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    let now = Instant::now();
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    return Ok(());
                                }
                                // Back-navigation closes the sheet
                                KeyCode::Esc | KeyCode::Char('q') => {
                                    app.close_sheet(now);
                                }
                                _ => {}
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                app.on_mouse_down(mouse.column, mouse.row, now);
                            }
                            MouseEventKind::Drag(MouseButton::Left) => {
                                app.on_mouse_drag(mouse.column, mouse.row);
                            }
                            MouseEventKind::Up(MouseButton::Left) => {
                                app.on_mouse_up(mouse.column, mouse.row, now);
                            }
                            _ => {}
                        },
                        // Losing terminal focus cancels the active gesture
                        Event::FocusLost => {
                            app.on_pointer_cancel(now);
                        }
                        Event::Resize(..) => {
                            app.mark_dirty();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Setup panic hook to restore the terminal before the default hook runs.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore the terminal to normal mode.
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
