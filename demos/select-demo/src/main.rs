//! select-demo - tui-select in a terminal
//!
//! Two dropdowns over one option list: a single select ("favorite") and a
//! multi select ("basket"). Both are controlled: the store holds the
//! selections, the widgets only hold open/highlight state.
//!
//! Event -> Select.handle_event() -> Actions -> Store -> Render
//!
//! Keys: Tab/Shift+Tab = switch select, q/Ctrl+C = quit, Esc = quit when
//! the list is closed. Select keys come from the keymap (`--keymap`).
//!
//! # Usage
//!
//! ```sh
//! cargo run -p select-demo
//! cargo run -p select-demo -- --options sizes.json --log-file /tmp/select.log
//! RUST_LOG=trace cargo run -p select-demo -- --log-file /tmp/select.log
//! ```

mod action;
mod config;
mod reducer;
mod state;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, KeyCode,
        KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_select::{
    process_raw_event, spawn_event_poller, Component, EventKind, Keybindings, LoggingMiddleware,
    RawEvent, Select, SelectCommand, SelectProps, SelectStyle, StoreWithMiddleware,
    CONTROL_HEIGHT,
};

use crate::action::Action;
use crate::reducer::reducer;
use crate::state::{AppState, Focus};

/// Single and multi select dropdowns in the terminal
#[derive(Parser, Debug)]
#[command(name = "select-demo")]
#[command(about = "Single and multi select dropdowns in the terminal")]
struct Args {
    /// JSON array of options (`[{"value": 1, "label": "Apple"}]`); built-in list when absent
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON keymap (`{"toggle": ["enter", "space"]}`) merged over the defaults
    #[arg(long)]
    keymap: Option<PathBuf>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Plain ASCII glyphs
    #[arg(long)]
    ascii: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Load config before entering TUI mode
    let loaded = config::load_options(args.options.as_deref())
        .and_then(|options| Ok((options, config::load_keymap(args.keymap.as_deref())?)));
    let (options, keymap) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let style = if args.ascii {
        SelectStyle::ascii()
    } else {
        SelectStyle::default()
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, AppState::new(options), DemoUi::new(keymap, style)).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct DemoUi {
    favorite: Select,
    basket: Select,
    help: String,
}

impl DemoUi {
    fn new(keymap: Keybindings<SelectCommand>, style: SelectStyle) -> Self {
        let hint = |command| keymap.hint(command).unwrap_or_else(|| "-".to_string());
        let help = format!(
            "{}: open/pick  {}/{}: move  {}: close  Tab: switch  q: quit",
            hint(SelectCommand::Toggle),
            hint(SelectCommand::Prev),
            hint(SelectCommand::Next),
            hint(SelectCommand::Close),
        );

        Self {
            favorite: Select::new()
                .with_style(style.clone())
                .with_keymap(keymap.clone()),
            basket: Select::new().with_style(style).with_keymap(keymap),
            help,
        }
    }

    fn select(&self, focus: Focus) -> &Select {
        match focus {
            Focus::Favorite => &self.favorite,
            Focus::Basket => &self.basket,
        }
    }

    fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(44),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let [title, favorite_label, favorite_area, _, basket_label, basket_area, _, summary, help] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(CONTROL_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .areas(column);

        let label = |text: &'static str, focused: bool| {
            let style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(text).style(style)
        };

        frame.render_widget(
            Paragraph::new("tui-select demo").style(Style::default().add_modifier(Modifier::BOLD)),
            title,
        );
        frame.render_widget(
            label("Favorite", state.focus == Focus::Favorite),
            favorite_label,
        );
        frame.render_widget(label("Basket", state.focus == Focus::Basket), basket_label);
        frame.render_widget(Paragraph::new(summary_text(state)), summary);
        frame.render_widget(
            Paragraph::new(self.help.as_str()).style(Style::default().fg(Color::DarkGray)),
            help,
        );

        // Focused select last, so its open list draws over the other one
        match state.focus {
            Focus::Favorite => {
                self.basket.render(frame, basket_area, basket_props(state, false));
                self.favorite
                    .render(frame, favorite_area, favorite_props(state, true));
            }
            Focus::Basket => {
                self.favorite
                    .render(frame, favorite_area, favorite_props(state, false));
                self.basket.render(frame, basket_area, basket_props(state, true));
            }
        }
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut target = state.focus;

        match event {
            EventKind::Key(key) => {
                if let Some(action) = self.global_key(key, state) {
                    return vec![action];
                }
            }
            EventKind::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                // The focused select is drawn on top, so it gets first pick
                let hit = [state.focus, state.focus.next()]
                    .into_iter()
                    .find(|focus| self.select(*focus).contains(mouse.column, mouse.row));
                if let Some(hit) = hit.filter(|hit| *hit != state.focus) {
                    actions.push(Action::FocusSet(hit));
                    target = hit;
                }
            }
            EventKind::FocusLost => {
                self.favorite.blur();
                self.basket.blur();
                return actions;
            }
            _ => {}
        }

        match target {
            Focus::Favorite => {
                actions.extend(self.favorite.handle_event(event, favorite_props(state, true)))
            }
            Focus::Basket => {
                actions.extend(self.basket.handle_event(event, basket_props(state, true)))
            }
        }
        actions
    }

    /// Keys handled by the app rather than the focused select
    fn global_key(&self, key: &KeyEvent, state: &AppState) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        let select = self.select(state.focus);
        match select.keymap().command_for(key) {
            Some(SelectCommand::Close) if !select.is_open() => Some(Action::Quit),
            Some(_) => None,
            None => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                _ => None,
            },
        }
    }
}

fn favorite_props(state: &AppState, is_focused: bool) -> SelectProps<'_, Action> {
    SelectProps::single(
        &state.options,
        state.favorite.as_ref(),
        Action::FavoriteChange,
    )
    .focused(is_focused)
    .placeholder("Pick a favorite")
}

fn basket_props(state: &AppState, is_focused: bool) -> SelectProps<'_, Action> {
    SelectProps::multiple(&state.options, &state.basket, Action::BasketChange)
        .focused(is_focused)
        .placeholder("Fill the basket")
}

fn summary_text(state: &AppState) -> String {
    let favorite = state
        .favorite
        .as_ref()
        .map(|o| o.label.as_str())
        .unwrap_or("none");
    let basket: Vec<&str> = state.basket.iter().map(|o| o.label.as_str()).collect();
    format!(
        "Favorite: {}\nBasket: {}",
        favorite,
        if basket.is_empty() {
            "empty".to_string()
        } else {
            basket.join(", ")
        }
    )
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
    mut ui: DemoUi,
) -> io::Result<()> {
    info!(options = state.options.len(), "select-demo started");

    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut store = StoreWithMiddleware::new(state, reducer, LoggingMiddleware::new());

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                for action in ui.map_event(&event, store.state()) {
                    let _ = action_tx.send(action);
                }
                // Open/highlight state lives in the widgets, so any input may change the picture
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                should_render |= store.dispatch(action);
            }
        }
    }

    info!(
        dispatched = store.middleware().dispatched(),
        "select-demo stopped"
    );
    cancel_token.cancel();
    Ok(())
}
