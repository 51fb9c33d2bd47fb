//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates the App state
//! machine with the message store's notification stream. Uses
//! `tokio::select!` to handle keyboard events, arrangement changes, and a
//! periodic tick concurrently.
//!
//! The runtime is the composition root: it creates the store, subscribes to
//! its arrangement changes, and hands the store to the App. No registry or
//! service locator is involved.

use std::io::{self, Stdout, stdout};

use chatpane_app::{App, AppAction, AppEvent, KeyInput};
use chatpane_core::{ArrangementChanges, MessageStore};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{InputState, ui};

/// Rows a PageUp/PageDown jump moves the list by.
const PAGE_STEP: usize = 5;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What woke the event loop up.
#[derive(Debug, Clone, Copy)]
enum Wake {
    /// A key was pressed.
    Key(KeyCode),
    /// The terminal was resized (columns, rows).
    Resize(u16, u16),
    /// The store applied a mutation.
    Changed,
    /// Tick timeout elapsed.
    Tick,
    /// Nothing actionable (ignored event, closed stream).
    Idle,
}

/// Async runtime for the chat screen.
///
/// Manages terminal setup/teardown and the main event loop; all chat state
/// lives in [`App`] and the store it wraps.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    input: InputState,
    changes: ArrangementChanges,
    /// Scroll position in display rows from the latest message.
    scroll_offset: usize,
}

impl Runtime {
    /// Create the runtime and take over the terminal.
    pub fn new() -> Result<Self, RuntimeError> {
        let store = MessageStore::new();
        let changes = store.subscribe();
        let app = App::new(store);

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        tracing::debug!("runtime created");
        Ok(Self { terminal, app, input: InputState::new(), changes, scroll_offset: 0 })
    }

    /// Run the main event loop until the user quits.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        let mut events = EventStream::new();
        self.render()?;

        loop {
            let wake = self.next_wake(&mut events).await?;

            let actions = match wake {
                Wake::Key(code) => self.handle_key(code),
                Wake::Resize(cols, rows) => self.app.handle(AppEvent::Resize(cols, rows)),
                Wake::Changed => self.app.handle(AppEvent::ArrangementChanged),
                Wake::Tick => self.app.handle(AppEvent::Tick),
                Wake::Idle => vec![],
            };

            if self.process_actions(actions)? {
                break;
            }
        }
        Ok(())
    }

    /// Wait for the next wakeup from any input source.
    ///
    /// Only classifies; all state changes happen back in [`run`](Self::run)
    /// once the competing futures are dropped.
    async fn next_wake(&mut self, events: &mut EventStream) -> Result<Wake, RuntimeError> {
        let tick = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    Ok(Wake::Key(key.code))
                },
                Some(Ok(Event::Resize(cols, rows))) => Ok(Wake::Resize(cols, rows)),
                Some(Err(e)) => Err(RuntimeError::Io(e)),
                _ => Ok(Wake::Idle),
            },

            changed = self.changes.changed() => {
                // The store outlives the loop (the App owns a handle), so
                // the stream only ends when we are already shutting down.
                Ok(if changed { Wake::Changed } else { Wake::Idle })
            },

            () = tokio::time::sleep(tick) => Ok(Wake::Tick),
        }
    }

    /// Route one key press.
    ///
    /// Paging is runtime state (the scroll window), everything else belongs
    /// to the input state or the App.
    fn handle_key(&mut self, code: KeyCode) -> Vec<AppAction> {
        match convert_key(code) {
            Some(KeyInput::PageUp) => {
                let max = self.app.message_count().saturating_sub(1);
                self.scroll_offset = (self.scroll_offset + PAGE_STEP).min(max);
                vec![AppAction::Render]
            },
            Some(KeyInput::PageDown) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
                vec![AppAction::Render]
            },
            Some(key) => self.input.handle_key(key, &mut self.app),
            None => vec![],
        }
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if the application should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                AppAction::Render => self.render()?,
                AppAction::ScrollToLatest => {
                    if self.app.latest_display_row().is_some() {
                        self.scroll_offset = 0;
                        self.render()?;
                    }
                },
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Redraw the screen from current state.
    fn render(&mut self) -> Result<(), RuntimeError> {
        let app = &self.app;
        let input = &self.input;
        let scroll_offset = self.scroll_offset;
        self.terminal.draw(|frame| ui::render(frame, app, input, scroll_offset))?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Convert crossterm `KeyCode` to the terminal-agnostic `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        KeyCode::PageUp => Some(KeyInput::PageUp),
        KeyCode::PageDown => Some(KeyInput::PageDown),
        _ => None,
    }
}
