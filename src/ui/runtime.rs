use crate::config::Config;
use crate::dispatcher::SearchDispatcher;
use crate::registry::SearchBackend;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive search screen until the user quits.
///
/// Must be called on a Tokio runtime: each submission spawns its request
/// there, and terminal signals come back through the dispatcher channel.
pub async fn run<B: SearchBackend>(
    backend: Arc<B>,
    config: &Config,
    registry_label: String,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(registry_label);
    app.store_mut().subscribe(|state| {
        tracing::debug!(
            loading = state.loading,
            error = ?state.error,
            results = state.data.len(),
            "Search state changed"
        );
    });

    let (dispatcher, mut signals) = SearchDispatcher::new(backend);
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    if let InputAction::Submit(term) = handle_key(&mut app, key) {
                        // Not awaited: the result arrives on `signals`.
                        let _ = dispatcher.dispatch_search(app.store_mut(), term);
                    }
                }
                Some(AppEvent::Paste(text)) => app.on_paste(&text),
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize) => {}
                None => break,
            },
            Some(signal) = signals.recv() => app.on_signal(signal),
        }
    }

    drop(events);
    drop(guard);
    Ok(())
}
